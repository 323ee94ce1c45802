use std::time::Instant;

use log_entry::init::init_tracing;
use log_entry::{LogRecord, NewLogRecord};
use tracing::info;

fn main() {
    init_tracing().expect("install tracing subscriber");

    let message = "the quick brown fox jumps over the lazy dog ".repeat(10);
    let n: u64 = 100_000;
    let start = Instant::now();

    let mut total_len = 0usize;
    for i in 0..n {
        let record = LogRecord::create(NewLogRecord::new(
            "bot",
            "bot.load",
            "warning",
            "bot.exts.load",
            (i % 1000) as i64,
            message.as_str(),
        ))
        .expect("valid record");
        total_len += record.render().len();
    }

    let elapsed = start.elapsed();
    info!(
        records = n,
        bytes = total_len,
        "created and rendered {} records in {:?} (~{:.0} rec/s)",
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
}
