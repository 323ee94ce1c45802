pub mod error;
pub mod record;
pub mod render;
pub mod sink;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "json")]
pub mod json;

pub mod env;
pub mod init;
pub mod noop_sink;

pub use error::ValidationError;
pub use record::{Application, Level, LogRecord, NewLogRecord};
