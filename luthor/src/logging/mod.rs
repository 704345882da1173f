//! Process-wide logging
//!
//! Events go through one global [`LoggingService`] installed by
//! [`init_global_logging`]. Until then, and for the whole run when console
//! and structured output are both off, the logging macros do nothing.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<LoggingService> = OnceLock::new();

/// Install the global logger described by `preferences`.
/// Fails if a logger is already installed.
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let sink: Arc<dyn Logger> = if preferences.use_structured_logging {
        Arc::new(StructuredLogger)
    } else if preferences.enable_console_logging {
        Arc::new(ConsoleLogger)
    } else {
        return Ok(());
    };

    GLOBAL_LOGGER
        .set(LoggingService::new(sink, preferences.min_log_level))
        .map_err(|_| "global logger already initialized".to_string())
}

pub fn global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_output_installs_nothing() {
        let preferences = LoggingPreferences {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: LogLevel::Debug,
        };
        assert!(init_global_logging(&preferences).is_ok());
        assert!(global_logger().is_none());
    }
}
