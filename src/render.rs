use crate::env::{env_or, LOG_ENTRY_MESSAGE_WIDTH_ENV, LOG_ENTRY_PLACEHOLDER_ENV};
use crate::record::LogRecord;
use std::fmt;

/// Length of `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_WITH_SECONDS_LENGTH: usize = 19;

pub const DEFAULT_MESSAGE_WIDTH: usize = 140;

pub const DEFAULT_PLACEHOLDER: &str = " [...]";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Settings for the one-line summary produced by [`LogRecord::render_with`].
///
/// **Fields**
/// - `message_width`: maximum number of characters of the message segment,
///   placeholder included. Values smaller than the placeholder are raised
///   to its length.
/// - `placeholder`: marker appended when the message had to be shortened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub message_width: usize,
    pub placeholder: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            message_width: DEFAULT_MESSAGE_WIDTH,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl RenderConfig {
    /// Build a config from `LOG_ENTRY_MESSAGE_WIDTH` and
    /// `LOG_ENTRY_PLACEHOLDER`, keeping the default for anything unset or
    /// unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let message_width = std::env::var(LOG_ENTRY_MESSAGE_WIDTH_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(defaults.message_width);
        let placeholder = env_or(LOG_ENTRY_PLACEHOLDER_ENV, &defaults.placeholder);

        Self { message_width, placeholder }
    }

    fn effective_width(&self) -> usize {
        self.message_width.max(self.placeholder.chars().count())
    }
}

/// Shorten `text` to at most `width` characters.
///
/// Runs of whitespace collapse to a single space first. If the result still
/// does not fit, as many whole words as possible are kept and `placeholder`
/// is appended; when not even the first word fits, only the placeholder
/// (without leading whitespace) is returned. Lengths are counted in
/// characters, so multi-byte text is never split inside a character.
/// Only whitespace separates words; hyphenated words are kept whole.
pub fn shorten(text: &str, width: usize, placeholder: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(placeholder.chars().count());
    let mut kept = String::new();
    let mut kept_len = 0;
    for word in collapsed.split(' ') {
        let word_len = word.chars().count();
        let needed = if kept.is_empty() { word_len } else { word_len + 1 };
        if kept_len + needed > budget {
            break;
        }
        if !kept.is_empty() {
            kept.push(' ');
        }
        kept.push_str(word);
        kept_len += needed;
    }

    if kept.is_empty() {
        placeholder.trim_start().to_string()
    } else {
        kept + placeholder
    }
}

impl LogRecord {
    /// Single-line summary used in listings:
    /// `YYYY-MM-DD HH:MM:SS | application | LEVL | message`.
    ///
    /// The message is shortened to 140 characters at a word boundary.
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    pub fn render_with(&self, config: &RenderConfig) -> String {
        format!(
            "{} | {} | {} | {}",
            self.timestamp().format(TIMESTAMP_FORMAT),
            self.application(),
            self.level().abbreviation(),
            shorten(self.message(), config.effective_width(), &config.placeholder),
        )
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
