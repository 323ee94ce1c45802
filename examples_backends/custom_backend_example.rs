use std::sync::Arc;

use async_trait::async_trait;
use log_entry::{
    console::ConsoleSink,
    init::init_tracing,
    record::{LogRecord, NewLogRecord},
    sink::LogSink,
};
use tracing::{error, info};

/// Example of integrating a completely custom backend by implementing
/// the `LogSink` trait directly. Imagine this talks to the database
/// behind the site's admin pages.
struct MyCustomDbSink;

#[async_trait]
impl LogSink for MyCustomDbSink {
    async fn send(&self, record: &LogRecord) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Here you would call your own client library for the target DB.
        println!("[my-custom-db] {:?}", record);
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    init_tracing().expect("install tracing subscriber");

    let sinks: Vec<Arc<dyn LogSink>> = vec![Arc::new(MyCustomDbSink), Arc::new(ConsoleSink::stdout())];

    let incoming = vec![
        NewLogRecord::new("bot", "bot.exts.utils", "info", "bot.exts.utils.reminders", 120, "Reminder sent"),
        NewLogRecord::new("site", "django.request", "critical", "site.api.views", 77, "Database unreachable"),
        NewLogRecord::new("website", "main", "info", "site", 1, "rejected: unknown application"),
    ];

    for new in incoming {
        let record = match LogRecord::create(new) {
            Ok(record) => record,
            Err(e) => {
                error!(error = %e, "dropping invalid log entry");
                continue;
            }
        };
        for sink in &sinks {
            if let Err(e) = sink.send(&record).await {
                error!(error = %e, "sink rejected log entry");
            }
        }
    }

    for sink in &sinks {
        if let Err(e) = sink.flush().await {
            error!(error = %e, "sink failed to flush");
        }
    }
    info!("custom backend example finished");
}
