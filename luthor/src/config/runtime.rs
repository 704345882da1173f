// RUNTIME PREFERENCES
//
// `Default` is fixed so a library caller gets the same behavior in every
// process. `from_env` overlays the `LUTHOR_*` variables; the CLI is the
// only place that calls it.

use crate::logging::LogLevel;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalPreferences {
    /// Count tokens per type during a scan
    pub collect_metrics: bool,
    /// Log a summary when a scan completes
    pub log_scan_statistics: bool,
    /// Log each unterminated string literal at debug level
    pub log_unterminated_strings: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_metrics: true,
            log_scan_statistics: true,
            log_unterminated_strings: false,
        }
    }
}

impl LexicalPreferences {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            collect_metrics: env_flag(env_vars::LEXICAL_COLLECT_METRICS, defaults.collect_metrics),
            log_scan_statistics: env_flag(
                env_vars::LEXICAL_LOG_SCAN_STATISTICS,
                defaults.log_scan_statistics,
            ),
            log_unterminated_strings: env_flag(
                env_vars::LEXICAL_LOG_UNTERMINATED,
                defaults.log_unterminated_strings,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderPreferences {
    /// Log bytes, chars and elapsed time for each loaded file
    pub log_timing: bool,
    /// Accept zero-byte files (they lex to a lone EOF)
    pub allow_empty_files: bool,
}

impl Default for LoaderPreferences {
    fn default() -> Self {
        Self {
            log_timing: true,
            allow_empty_files: true,
        }
    }
}

impl LoaderPreferences {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_timing: env_flag(env_vars::LOADER_LOG_TIMING, defaults.log_timing),
            allow_empty_files: env_flag(env_vars::LOADER_ALLOW_EMPTY, defaults.allow_empty_files),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingPreferences {
    /// JSON lines instead of text; wins over `enable_console_logging`
    pub use_structured_logging: bool,
    pub enable_console_logging: bool,
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: LogLevel::Info,
        }
    }
}

impl LoggingPreferences {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            use_structured_logging: env_flag(
                env_vars::LOGGING_STRUCTURED,
                defaults.use_structured_logging,
            ),
            enable_console_logging: env_flag(env_vars::LOGGING_CONSOLE, defaults.enable_console_logging),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(defaults.min_log_level),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub loader: LoaderPreferences,
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self {
            loader: LoaderPreferences::from_env(),
            lexical: LexicalPreferences::from_env(),
            logging: LoggingPreferences::from_env(),
        }
    }
}

pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LogLevel::Error),
        "info" => Some(LogLevel::Info),
        "debug" => Some(LogLevel::Debug),
        _ => None,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

pub mod env_vars {
    pub const LOADER_LOG_TIMING: &str = "LUTHOR_LOADER_LOG_TIMING";
    pub const LOADER_ALLOW_EMPTY: &str = "LUTHOR_LOADER_ALLOW_EMPTY";

    pub const LEXICAL_COLLECT_METRICS: &str = "LUTHOR_LEXICAL_COLLECT_METRICS";
    pub const LEXICAL_LOG_SCAN_STATISTICS: &str = "LUTHOR_LEXICAL_LOG_SCAN_STATISTICS";
    pub const LEXICAL_LOG_UNTERMINATED: &str = "LUTHOR_LEXICAL_LOG_UNTERMINATED";

    pub const LOGGING_STRUCTURED: &str = "LUTHOR_LOGGING_STRUCTURED";
    pub const LOGGING_CONSOLE: &str = "LUTHOR_LOGGING_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "LUTHOR_LOGGING_MIN_LEVEL";
}
