/// Reason a [`crate::record::NewLogRecord`] was rejected during
/// [`crate::record::LogRecord::create`].
///
/// Only the first violation found is reported; fields are checked in the
/// order they are declared on the record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown application {0:?}, expected one of: bot, seasonalbot, site")]
    UnknownApplication(String),

    #[error("unknown level {0:?}, expected one of: debug, info, warning, error, critical")]
    UnknownLevel(String),

    #[error("{field} is {actual} characters long, at most {max} allowed")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("timestamp year {0} is outside 1..=9999")]
    TimestampOutOfRange(i32),

    #[error("line must not be negative, got {0}")]
    NegativeLine(i64),

    #[error("line {0} does not fit in 16 bits")]
    LineOutOfRange(i64),
}

impl ValidationError {
    /// Name of the record field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::UnknownApplication(_) => "application",
            ValidationError::UnknownLevel(_) => "level",
            ValidationError::TooLong { field, .. } => field,
            ValidationError::TimestampOutOfRange(_) => "timestamp",
            ValidationError::NegativeLine(_) | ValidationError::LineOutOfRange(_) => "line",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::UnknownApplication("x".into()).field(), "application");
        assert_eq!(ValidationError::UnknownLevel("x".into()).field(), "level");
        assert_eq!(ValidationError::NegativeLine(-1).field(), "line");
        assert_eq!(ValidationError::LineOutOfRange(70_000).field(), "line");
        assert_eq!(ValidationError::TimestampOutOfRange(10_000).field(), "timestamp");
        let too_long = ValidationError::TooLong { field: "module", max: 100, actual: 101 };
        assert_eq!(too_long.field(), "module");
    }

    #[test]
    fn test_display_messages() {
        let err = ValidationError::TooLong { field: "logger_name", max: 100, actual: 120 };
        assert_eq!(err.to_string(), "logger_name is 120 characters long, at most 100 allowed");
        assert_eq!(
            ValidationError::NegativeLine(-3).to_string(),
            "line must not be negative, got -3"
        );
    }
}
