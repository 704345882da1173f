//! `log_error!`, `log_info!` and `log_debug!`
//!
//! Each takes a [`Code`](crate::logging::Code), a message and any number of
//! `"key" => value` pairs where `value` implements `Display`. Context values
//! are only formatted when the global logger would keep the event.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at_level {
    ($level:expr, $code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        if let Some(logger) = $crate::logging::global_logger() {
            if logger.enabled($level) {
                #[allow(unused_mut)]
                let mut event = $crate::logging::LogEvent::new($level, $code, $message);
                $(
                    event = event.with_context($key, $value);
                )*
                logger.log_event(event);
            }
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__log_at_level!($crate::logging::LogLevel::Error, $code, $message $(, $key => $value)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__log_at_level!($crate::logging::LogLevel::Info, $code, $message $(, $key => $value)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__log_at_level!($crate::logging::LogLevel::Debug, $code, $message $(, $key => $value)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::codes;

    #[test]
    fn test_macros_accept_each_shape() {
        let path = std::path::Path::new("a.txt");
        log_error!(codes::load::READ_FAILED, "read failed");
        log_error!(codes::load::READ_FAILED, "read failed", "path" => path.display());
        log_info!(codes::scan::COMPLETED, "done", "tokens" => 3, "lines" => 1u32);
        log_debug!(codes::scan::STARTED, "start", "char" => 'x');
    }
}
