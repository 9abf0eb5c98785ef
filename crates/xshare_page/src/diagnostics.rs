use std::fmt::Display;
use std::time::Instant;

use ui_logging::{ui_debug, ui_error};
use xshare_core::Severity;

use crate::runtime::PageRuntime;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

impl PageRuntime {
    /// Logs `error` under `context` and shows the generic error toast.
    pub fn handle_error(&mut self, context: &str, error: &dyn Display) {
        ui_error!("Error in {context}: {error}");
        self.notify(GENERIC_ERROR_MESSAGE, Severity::Error);
    }
}

/// Runs `f` and logs how long it took.
pub fn measure_performance<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let result = f();
    ui_debug!("{name} took {:.2}ms", started.elapsed().as_secs_f64() * 1000.0);
    result
}
