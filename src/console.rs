use crate::record::LogRecord;
use crate::render::RenderConfig;
use crate::sink::LogSink;
use async_trait::async_trait;
use std::error::Error;
use std::io::{self, Write};
use tokio::sync::Mutex;

/// Sink that writes the one-line summary of every record to a writer,
/// one line per record. This is the listing view of stored entries.
pub struct ConsoleSink<W> {
    writer: Mutex<W>,
    config: RenderConfig,
}

impl ConsoleSink<io::Stdout> {
    /// Console sink on standard output with the default [`RenderConfig`].
    pub fn stdout() -> Self {
        ConsoleSink::new(io::stdout(), RenderConfig::default())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W, config: RenderConfig) -> Self {
        Self {
            writer: Mutex::new(writer),
            config,
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> LogSink for ConsoleSink<W> {
    async fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let line = record.render_with(&self.config);
        let mut writer = self.writer.lock().await;
        writeln!(writer, "{}", line)?;
        tracing::trace!(application = %record.application(), level = %record.level(), "wrote log record to console");
        Ok(())
    }

    async fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.writer.lock().await.flush()?;
        Ok(())
    }
}
