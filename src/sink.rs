use crate::record::LogRecord;
use async_trait::async_trait;
use std::error::Error;

/// Asynchronous destination for validated [`LogRecord`]s.
///
/// This is the boundary towards whatever persists or displays records
/// (a database table, an administrative listing, a file). Records handed
/// to a sink have already passed [`LogRecord::create`], so implementations
/// never need to re-validate.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Send a single log record to the underlying backend.
    ///
    /// **Parameters**
    /// - `record`: validated [`LogRecord`].
    ///
    /// **Returns**
    /// - `Ok(())` if the record was accepted by the backend.
    /// - `Err(..)` if the backend failed (I/O error, serialization
    ///   error, etc.). Retrying is the caller's decision.
    async fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Flush any buffered records, if the backend implements buffering.
    ///
    /// Default implementation is a no-op.
    async fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
