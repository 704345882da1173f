//! Log events and their text and JSON renderings

use super::codes::Code;
use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use crate::utils::Location;
use chrono::{DateTime, Utc};
use std::fmt;

/// Event level, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    /// Source position the event is about, for scan events
    pub location: Option<Location>,
    /// Key/value pairs in the order they were attached
    pub context: Vec<(&'static str, String)>,
}

impl LogEvent {
    pub fn new(level: LogLevel, code: Code, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            code,
            message: clip_message(message),
            location: None,
            context: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// One JSON object per event. Tabled codes also carry their category
    /// and severity.
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
        });

        if let Some(info) = self.code.info() {
            json["category"] = info.category.as_str().into();
            json["severity"] = info.severity.as_str().into();
        }
        if let Some(location) = self.location {
            json["location"] = serde_json::json!({
                "offset": location.offset,
                "line": location.line,
                "column": location.column,
            });
        }
        if !self.context.is_empty() {
            json["context"] = self
                .context
                .iter()
                .map(|(key, value)| (key.to_string(), serde_json::Value::from(value.as_str())))
                .collect::<serde_json::Map<_, _>>()
                .into();
        }

        json
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level.as_str(),
            self.code,
            self.message
        )?;
        if let Some(location) = self.location {
            write!(f, " @{}:{}", location.line, location.column)?;
        }
        for (key, value) in &self.context {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Cut `message` to at most `MAX_LOG_MESSAGE_LENGTH` characters
fn clip_message(message: &str) -> String {
    match message.char_indices().nth(MAX_LOG_MESSAGE_LENGTH) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_text_rendering() {
        let event = LogEvent::new(
            LogLevel::Debug,
            codes::scan::UNTERMINATED_STRING,
            "String literal runs to end of input",
        )
        .with_location(Location::new(3, 1, 4))
        .with_context("delimiter", '\'');

        let text = event.to_string();
        assert!(text.contains("DEBUG S001 String literal runs to end of input"));
        assert!(text.ends_with(" @1:4 delimiter='"));
    }

    #[test]
    fn test_json_for_tabled_code() {
        let event = LogEvent::new(LogLevel::Error, codes::load::TOO_LARGE, "Cannot load")
            .with_context("path", "big.txt")
            .with_context("bytes", 11_000_000);

        let json = event.to_json();
        assert_eq!(json["level"], "ERROR");
        assert_eq!(json["code"], "L003");
        assert_eq!(json["category"], "load");
        assert_eq!(json["severity"], "high");
        assert_eq!(json["context"]["bytes"], "11000000");
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_json_for_progress_code() {
        let event = LogEvent::new(LogLevel::Info, codes::scan::COMPLETED, "done")
            .with_location(Location::new(7, 2, 3));

        let json = event.to_json();
        assert!(json.get("category").is_none());
        assert_eq!(json["location"]["offset"], 7);
        assert_eq!(json["location"]["line"], 2);
    }

    #[test]
    fn test_long_message_is_clipped_by_chars() {
        let long = "ȫ".repeat(MAX_LOG_MESSAGE_LENGTH + 5);
        let event = LogEvent::new(LogLevel::Info, codes::cli::STARTED, &long);
        assert_eq!(event.message.chars().count(), MAX_LOG_MESSAGE_LENGTH + 3);
        assert!(event.message.ends_with("ȫ..."));

        let exact = "x".repeat(MAX_LOG_MESSAGE_LENGTH);
        assert_eq!(clip_message(&exact), exact);
    }

    #[test]
    fn test_levels_order_by_severity() {
        assert!(LogLevel::Error < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }
}
