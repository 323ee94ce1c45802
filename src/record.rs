use crate::error::ValidationError;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const APPLICATION_MAX_LENGTH: usize = 20;
pub const LOGGER_NAME_MAX_LENGTH: usize = 100;
pub const LEVEL_MAX_LENGTH: usize = 8;
pub const MODULE_MAX_LENGTH: usize = 100;

/// Years that render as four digits in the `YYYY-MM-DD HH:MM:SS` summary.
pub const TIMESTAMP_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Application that emitted a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    Bot,
    Seasonalbot,
    Site,
}

impl Application {
    pub const ALL: [Application; 3] = [Application::Bot, Application::Seasonalbot, Application::Site];

    /// Stored value, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Application::Bot => "bot",
            Application::Seasonalbot => "seasonalbot",
            Application::Site => "site",
        }
    }

    /// Human readable name shown in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Application::Bot => "Bot",
            Application::Seasonalbot => "Seasonalbot",
            Application::Site => "Website",
        }
    }
}

impl FromStr for Application {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Application::ALL
            .into_iter()
            .find(|app| app.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownApplication(s.to_string()))
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a log entry, ordered from least to most severe.
///
/// The values mirror the standard logging levels the applications emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::Debug, Level::Info, Level::Warning, Level::Error, Level::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Critical => "Critical",
        }
    }

    /// First four characters of the level, uppercased.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Level::Debug => "DEBU",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERRO",
            Level::Critical => "CRIT",
        }
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownLevel(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated log entry as handed over by an ingestion caller.
///
/// Enumerated fields are kept as raw strings and `line` as a signed
/// integer so that every violation surfaces as a [`ValidationError`]
/// from [`LogRecord::create`] rather than as a type error upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLogRecord {
    pub application: String,
    pub logger_name: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub level: String,
    pub module: String,
    pub line: i64,
    pub message: String,
}

impl NewLogRecord {
    /// Input without an explicit timestamp; creation time is used instead.
    pub fn new(
        application: impl Into<String>,
        logger_name: impl Into<String>,
        level: impl Into<String>,
        module: impl Into<String>,
        line: i64,
        message: impl Into<String>,
    ) -> Self {
        NewLogRecord {
            application: application.into(),
            logger_name: logger_name.into(),
            timestamp: None,
            level: level.into(),
            module: module.into(),
            line,
            message: message.into(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A validated log entry generated by one of the applications.
///
/// Instances only come out of [`LogRecord::create`] (directly, through
/// `TryFrom<NewLogRecord>` or through deserialization), so every field is
/// known to satisfy its constraints. There are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewLogRecord")]
pub struct LogRecord {
    application: Application,
    logger_name: String,
    timestamp: DateTime<Utc>,
    level: Level,
    module: String,
    line: u16,
    message: String,
}

impl LogRecord {
    /// Validate `new` and build a record from it.
    ///
    /// **Returns**
    /// - `Ok(LogRecord)` when every field satisfies its constraint. A
    ///   missing timestamp is replaced by the current time.
    /// - `Err(ValidationError)` describing the first offending field.
    pub fn create(new: NewLogRecord) -> Result<Self, ValidationError> {
        Self::validate(new).map_err(|err| {
            tracing::debug!(field = err.field(), error = %err, "rejected log record");
            err
        })
    }

    fn validate(new: NewLogRecord) -> Result<Self, ValidationError> {
        let application: Application = new.application.parse()?;
        check_length("logger_name", &new.logger_name, LOGGER_NAME_MAX_LENGTH)?;
        if let Some(timestamp) = new.timestamp {
            if !TIMESTAMP_YEARS.contains(&timestamp.year()) {
                return Err(ValidationError::TimestampOutOfRange(timestamp.year()));
            }
        }
        let level: Level = new.level.parse()?;
        check_length("module", &new.module, MODULE_MAX_LENGTH)?;
        let line = match u16::try_from(new.line) {
            Ok(line) => line,
            Err(_) if new.line < 0 => return Err(ValidationError::NegativeLine(new.line)),
            Err(_) => return Err(ValidationError::LineOutOfRange(new.line)),
        };

        Ok(LogRecord {
            application,
            logger_name: new.logger_name,
            timestamp: new.timestamp.unwrap_or_else(Utc::now),
            level,
            module: new.module,
            line,
            message: new.message,
        })
    }

    pub fn application(&self) -> Application {
        self.application
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Fully qualified path of the module that emitted the line.
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn line(&self) -> u16 {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<NewLogRecord> for LogRecord {
    type Error = ValidationError;

    fn try_from(new: NewLogRecord) -> Result<Self, Self::Error> {
        LogRecord::create(new)
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input() -> NewLogRecord {
        NewLogRecord::new("bot", "main", "info", "bot.core", 42, "Started successfully")
    }

    #[test]
    fn test_every_application_is_accepted() {
        for app in Application::ALL {
            let mut new = input();
            new.application = app.as_str().to_string();
            let record = LogRecord::create(new).unwrap();
            assert_eq!(record.application(), app);
        }
    }

    #[test]
    fn test_every_level_is_accepted() {
        for level in Level::ALL {
            let mut new = input();
            new.level = level.as_str().to_string();
            let record = LogRecord::create(new).unwrap();
            assert_eq!(record.level(), level);
        }
    }

    #[test]
    fn test_unknown_application_is_rejected() {
        for value in ["unknown", "Bot", " bot", "", "website"] {
            let mut new = input();
            new.application = value.to_string();
            assert_eq!(
                LogRecord::create(new),
                Err(ValidationError::UnknownApplication(value.to_string()))
            );
        }
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        for value in ["warn", "INFO", "fatal", "trace", ""] {
            let mut new = input();
            new.level = value.to_string();
            assert_eq!(LogRecord::create(new), Err(ValidationError::UnknownLevel(value.to_string())));
        }
    }

    #[test]
    fn test_line_bounds() {
        for line in [0, 1, 42, 65_535] {
            let mut new = input();
            new.line = line;
            assert_eq!(LogRecord::create(new).unwrap().line() as i64, line);
        }

        let mut new = input();
        new.line = -1;
        assert_eq!(LogRecord::create(new), Err(ValidationError::NegativeLine(-1)));

        let mut new = input();
        new.line = 65_536;
        assert_eq!(LogRecord::create(new), Err(ValidationError::LineOutOfRange(65_536)));
    }

    #[test]
    fn test_length_limits_count_characters() {
        let mut new = input();
        new.logger_name = "é".repeat(LOGGER_NAME_MAX_LENGTH);
        assert!(LogRecord::create(new).is_ok());

        let mut new = input();
        new.logger_name = "a".repeat(LOGGER_NAME_MAX_LENGTH + 1);
        assert_eq!(
            LogRecord::create(new),
            Err(ValidationError::TooLong { field: "logger_name", max: 100, actual: 101 })
        );

        let mut new = input();
        new.module = "m".repeat(MODULE_MAX_LENGTH + 5);
        assert_eq!(
            LogRecord::create(new),
            Err(ValidationError::TooLong { field: "module", max: 100, actual: 105 })
        );
    }

    #[test]
    fn test_message_is_unbounded() {
        let mut new = input();
        new.message = "x".repeat(100_000);
        assert_eq!(LogRecord::create(new).unwrap().message().len(), 100_000);
    }

    #[test]
    fn test_first_violation_wins() {
        let mut new = input();
        new.application = "nope".to_string();
        new.level = "nope".to_string();
        new.line = -5;
        assert_eq!(LogRecord::create(new).unwrap_err().field(), "application");
    }

    #[test]
    fn test_default_timestamp_is_creation_time() {
        let before = Utc::now();
        let record = LogRecord::create(input()).unwrap();
        let after = Utc::now();
        assert!(record.timestamp() >= before && record.timestamp() <= after);
    }

    #[test]
    fn test_explicit_timestamp_is_kept() {
        let ts = Utc.with_ymd_and_hms(2023, 5, 1, 12, 34, 56).unwrap();
        let record = LogRecord::create(input().with_timestamp(ts)).unwrap();
        assert_eq!(record.timestamp(), ts);
    }

    #[test]
    fn test_timestamp_year_bounds() {
        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let record = LogRecord::create(input().with_timestamp(last)).unwrap();
        assert_eq!(record.render(), "9999-12-31 23:59:59 | bot | INFO | Started successfully");

        let first = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert!(LogRecord::create(input().with_timestamp(first)).is_ok());

        let too_late = Utc.with_ymd_and_hms(10_000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            LogRecord::create(input().with_timestamp(too_late)),
            Err(ValidationError::TimestampOutOfRange(10_000))
        );

        let too_early = Utc.with_ymd_and_hms(0, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            LogRecord::create(input().with_timestamp(too_early)),
            Err(ValidationError::TimestampOutOfRange(0))
        );
    }

    #[test]
    fn test_level_ordering_and_abbreviation() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Error < Level::Critical);
        for level in Level::ALL {
            assert_eq!(level.abbreviation(), level.as_str()[..4].to_uppercase());
        }
    }

    #[test]
    fn test_enum_values_fit_stored_length() {
        assert!(Application::ALL.iter().all(|app| app.as_str().len() <= APPLICATION_MAX_LENGTH));
        assert!(Level::ALL.iter().all(|level| level.as_str().len() <= LEVEL_MAX_LENGTH));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Application::Site.label(), "Website");
        assert_eq!(Level::Warning.label(), "Warning");
        assert_eq!(Application::Seasonalbot.to_string(), "seasonalbot");
    }
}
