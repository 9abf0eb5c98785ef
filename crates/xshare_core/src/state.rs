use crate::view_model::{AppViewModel, ToastView, WizardView};
use crate::{
    CoreSettings, Effect, FilterState, NotificationRequest, Theme, ToastCenter, WizardState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: CoreSettings,
    clock_ms: u64,
    wizard: Option<WizardState>,
    toasts: ToastCenter,
    filter: FilterState,
    theme: Theme,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(CoreSettings::default())
    }

    pub fn with_settings(settings: CoreSettings) -> Self {
        Self {
            toasts: ToastCenter::new(settings.toast_policy, settings.default_toast_timeout),
            filter: FilterState::new(settings.filter_debounce),
            settings,
            clock_ms: 0,
            wizard: None,
            theme: Theme::default(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            wizard: self.wizard.as_ref().map(wizard_view),
            toasts: self
                .toasts
                .active()
                .iter()
                .map(|toast| ToastView {
                    id: toast.id,
                    message: toast.message.clone(),
                    severity: toast.severity,
                })
                .collect(),
            card_visibility: self.filter.visible().to_vec(),
            theme: self.theme,
            dirty: self.dirty,
        }
    }

    pub fn settings(&self) -> &CoreSettings {
        &self.settings
    }

    pub fn wizard(&self) -> Option<&WizardState> {
        self.wizard.as_ref()
    }

    pub fn toasts(&self) -> &ToastCenter {
        &self.toasts
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_clock(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
    }

    pub(crate) fn set_wizard(&mut self, wizard: Option<WizardState>) {
        self.wizard = wizard;
        self.mark_dirty();
    }

    pub(crate) fn wizard_mut(&mut self) -> Option<&mut WizardState> {
        self.wizard.as_mut()
    }

    pub(crate) fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.mark_dirty();
    }

    pub(crate) fn dismiss_toast(&mut self, id: crate::ToastId) {
        if self.toasts.dismiss(id) {
            self.mark_dirty();
        }
    }

    /// Shows a toast and returns the timer effect that will expire it.
    pub(crate) fn push_notification(&mut self, request: NotificationRequest) -> Effect {
        let toast = self.toasts.push(request, self.clock_ms);
        self.mark_dirty();
        Effect::ScheduleToastExpiry {
            id: toast.id,
            after: toast.timeout,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn wizard_view(wizard: &WizardState) -> WizardView {
    let current_step = wizard.current_step();
    let total_steps = wizard.total_steps();
    WizardView {
        current_step,
        total_steps,
        prev_visible: current_step > 1,
        next_visible: current_step < total_steps,
        submit_visible: current_step == total_steps,
        invalid_fields: wizard.invalid_fields().iter().cloned().collect(),
    }
}
