use crate::env::{env_or, LOG_ENTRY_LOG_STDOUT_ENV};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// Configuration of the process-wide `tracing` subscriber.
///
/// **Fields**
/// - `enable_stdout`: if `true`, a `tracing_subscriber::fmt::Layer` prints
///   events to the console; otherwise events are collected by a bare
///   [`Registry`] and go nowhere.
/// - `max_level`: most verbose level that is still printed.
#[derive(Clone, Debug)]
pub struct TracingConfig {
    pub enable_stdout: bool,
    pub max_level: Level,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enable_stdout: true,
            max_level: Level::INFO,
        }
    }
}

impl TracingConfig {
    /// Defaults, with `enable_stdout` taken from `LOG_ENTRY_LOG_STDOUT`.
    pub fn from_env() -> Self {
        let enable_stdout = !matches!(
            env_or(LOG_ENTRY_LOG_STDOUT_ENV, "true").trim().to_ascii_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        );
        Self {
            enable_stdout,
            ..Self::default()
        }
    }
}

/// Error returned when the global subscriber cannot be installed.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("a global tracing subscriber is already set")]
    AlreadySet(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global `tracing` subscriber described by `config`.
///
/// **Returns**
/// - `Ok(())` once the subscriber is installed.
/// - `Err(InitError::AlreadySet)` if another subscriber was installed
///   earlier in the process.
pub fn init_tracing_with_config(config: TracingConfig) -> Result<(), InitError> {
    // Both branches build a different subscriber type, so each one is
    // installed on its own.
    if config.enable_stdout {
        let fmt_layer = tracing_subscriber::fmt::layer().with_filter(LevelFilter::from_level(config.max_level));
        let subscriber = Registry::default().with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        tracing::subscriber::set_global_default(Registry::default())?;
    }
    Ok(())
}

/// Initialize tracing with [`TracingConfig::default`].
pub fn init_tracing() -> Result<(), InitError> {
    init_tracing_with_config(TracingConfig::default())
}
