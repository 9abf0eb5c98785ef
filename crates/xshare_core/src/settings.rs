use std::time::Duration;

use crate::ToastPolicy;

/// Timing and policy knobs the pure core needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSettings {
    pub toast_policy: ToastPolicy,
    /// Auto-dismiss delay for general notifications.
    pub default_toast_timeout: Duration,
    /// Auto-dismiss delay for wizard validation and submission notices.
    pub form_toast_timeout: Duration,
    pub filter_debounce: Duration,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            toast_policy: ToastPolicy::Replace,
            default_toast_timeout: Duration::from_millis(3000),
            form_toast_timeout: Duration::from_millis(5000),
            filter_debounce: Duration::from_millis(300),
        }
    }
}
