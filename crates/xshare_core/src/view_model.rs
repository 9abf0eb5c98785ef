use crate::{Severity, Theme, ToastId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub wizard: Option<WizardView>,
    pub toasts: Vec<ToastView>,
    pub card_visibility: Vec<bool>,
    pub theme: Theme,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub current_step: usize,
    pub total_steps: usize,
    pub prev_visible: bool,
    pub next_visible: bool,
    pub submit_visible: bool,
    pub invalid_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
}
