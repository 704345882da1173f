//! Log sinks and the level filter in front of them

use super::events::{LogEvent, LogLevel};
use std::sync::Arc;

/// Destination for events that passed the level filter
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

pub struct LoggingService {
    sink: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Events less severe than `min_level` are dropped
    pub fn new(sink: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { sink, min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.enabled(event.level) {
            self.sink.log(&event);
        }
    }
}

/// Human-readable lines on stderr, leaving stdout to token output
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        eprintln!("{}", event);
    }
}

/// One JSON object per line on stderr
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        eprintln!("{}", event.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryLogger {
        events: Mutex<Vec<LogEvent>>,
    }

    impl MemoryLogger {
        fn codes(&self) -> Vec<&'static str> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.code.as_str())
                .collect()
        }
    }

    impl Logger for MemoryLogger {
        fn log(&self, event: &LogEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_service_drops_less_severe_events() {
        let memory = Arc::new(MemoryLogger::default());
        let service = LoggingService::new(memory.clone(), LogLevel::Info);

        service.log_event(LogEvent::new(LogLevel::Debug, codes::scan::STARTED, "hidden"));
        service.log_event(LogEvent::new(LogLevel::Info, codes::scan::COMPLETED, "kept"));
        service.log_event(LogEvent::new(LogLevel::Error, codes::load::NOT_UTF8, "kept"));

        assert_eq!(memory.codes(), vec!["S101", "L005"]);
    }

    #[test]
    fn test_enabled() {
        let service = LoggingService::new(Arc::new(MemoryLogger::default()), LogLevel::Error);
        assert!(service.enabled(LogLevel::Error));
        assert!(!service.enabled(LogLevel::Info));
        assert!(!service.enabled(LogLevel::Debug));
    }
}
