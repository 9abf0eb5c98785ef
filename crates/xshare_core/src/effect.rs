use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScheduleToastExpiry {
        id: crate::ToastId,
        after: Duration,
    },
    ScheduleFilter {
        generation: u64,
        after: Duration,
    },
    Persist {
        key: String,
        value: serde_json::Value,
    },
    SubmitForm {
        values: BTreeMap<String, String>,
    },
}
