//! Environment variable names used by this crate for convenient
//! configuration from the applications that embed it.
//!
//! These are purely helpers; record construction and rendering never read
//! the environment on their own.

/// Maximum character width of the rendered message segment, e.g. `140`.
pub const LOG_ENTRY_MESSAGE_WIDTH_ENV: &str = "LOG_ENTRY_MESSAGE_WIDTH";

/// Marker appended to shortened messages, e.g. ` [...]`.
pub const LOG_ENTRY_PLACEHOLDER_ENV: &str = "LOG_ENTRY_PLACEHOLDER";

/// `true`/`false`: whether [`crate::init::TracingConfig::from_env`]
/// enables the stdout `fmt` layer.
pub const LOG_ENTRY_LOG_STDOUT_ENV: &str = "LOG_ENTRY_LOG_STDOUT";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
