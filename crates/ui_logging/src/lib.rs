#![deny(missing_docs)]
//! Shared logging utilities for the page workspace.
//!
//! This crate provides the `ui_*` logging macros used across the codebase,
//! a thread-local page clock that log lines can be stamped with, and a
//! minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current virtual page time in milliseconds.
    static PAGE_CLOCK_MS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the page clock for the current thread.
/// The page runtime calls this every time it advances its virtual time.
pub fn set_page_clock(now_ms: u64) {
    PAGE_CLOCK_MS.with(|v| v.set(now_ms));
}

/// Retrieves the page clock for the current thread.
/// Returns 0 if no runtime has advanced time yet.
pub fn page_clock() -> u64 {
    PAGE_CLOCK_MS.with(|v| v.get())
}

/// Logs at trace level, prefixed with the page clock.
#[macro_export]
macro_rules! ui_trace {
    ($($arg:tt)*) => {{
        log::trace!("[{}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Logs at info level, prefixed with the page clock.
#[macro_export]
macro_rules! ui_info {
    ($($arg:tt)*) => {{
        log::info!("[{}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Logs at debug level, prefixed with the page clock.
#[macro_export]
macro_rules! ui_debug {
    ($($arg:tt)*) => {{
        log::debug!("[{}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Logs at warn level, prefixed with the page clock.
#[macro_export]
macro_rules! ui_warn {
    ($($arg:tt)*) => {{
        log::warn!("[{}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Logs at error level, prefixed with the page clock.
#[macro_export]
macro_rules! ui_error {
    ($($arg:tt)*) => {{
        log::error!("[{}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
