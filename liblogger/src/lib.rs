/*
 * Logging library shared by the handler adapter and handler libraries
 *
 * Exposes:
 * - Logger for initialization and the level entry points
 * - LogConfig, LogLevel and LogType for programmatic configuration
 * - log_debug!, log_info!, log_warn!, log_error! which capture the file,
 *   line and module of the call site
 * - with the `proc_macros` feature, the attribute macros from
 *   liblogger_macros
 */

mod config;
mod outputs;
mod logger;

pub use logger::Logger;
pub use config::{LogConfig, LogLevel, LogType};

#[cfg(feature = "proc_macros")]
pub use liblogger_macros::{log_entry_exit, measure_time};

#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        $crate::Logger::debug($message, None, file!(), line!(), module_path!())
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::debug($message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::Logger::info($message, None, file!(), line!(), module_path!())
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::info($message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_warn {
    ($message:expr) => {
        $crate::Logger::warn($message, None, file!(), line!(), module_path!())
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::warn($message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_error {
    ($message:expr) => {
        $crate::Logger::error($message, None, file!(), line!(), module_path!())
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::error($message, $context, file!(), line!(), module_path!())
    };
}
