use crate::record::LogRecord;
use crate::sink::LogSink;
use async_trait::async_trait;
use std::error::Error;
use std::io::Write;
use tokio::sync::Mutex;

/// Sink that writes every record as one JSON object per line
/// (newline-delimited JSON), ready to be bulk-loaded by a storage backend.
///
/// The object carries the record fields under their stored names, with
/// `application` and `level` as their lowercase values and `timestamp` in
/// RFC 3339. Reading a line back through `serde_json` re-validates it.
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> LogSink for JsonLinesSink<W> {
    async fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let body = serde_json::to_string(record)? + "\n";
        let mut writer = self.writer.lock().await;
        writer.write_all(body.as_bytes())?;
        Ok(())
    }

    async fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.writer.lock().await.flush()?;
        Ok(())
    }
}
