//! Format-string convenience macros
//!
//! Each macro takes the logger instance explicitly; there is no global
//! logger. Write errors are discarded; call the underlying method
//! directly when the result matters.

/// Log a notice with `format!` syntax.
#[macro_export]
macro_rules! noticef {
    ($logger:expr, $($arg:tt)*) => {
        { let _ = $logger.noticef(::core::format_args!($($arg)*)); }
    };
}

/// Log a warning with `format!` syntax.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)*) => {
        { let _ = $logger.warnf(::core::format_args!($($arg)*)); }
    };
}

/// Log an error with `format!` syntax.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {
        { let _ = $logger.errorf(::core::format_args!($($arg)*)); }
    };
}

/// Log a debug message with `format!` syntax.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {
        { let _ = $logger.debugf(::core::format_args!($($arg)*)); }
    };
}

/// Log a trace message with `format!` syntax.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)*) => {
        { let _ = $logger.tracef(::core::format_args!($($arg)*)); }
    };
}

/// Log a fatal message with `format!` syntax, then terminate the process.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatalf(::core::format_args!($($arg)*))
    };
}
