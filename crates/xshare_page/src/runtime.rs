use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use ui_logging::{ui_debug, ui_info, ui_trace};
use xshare_core::{
    update, AppState, ExperienceCard, Msg, NotificationRequest, Severity, StepSpec, Theme,
    THEME_STORAGE_KEY,
};

use crate::config::UiConfig;
use crate::contract::*;
use crate::dom::{Document, NodeId};
use crate::events::{EventOutcome, PageEvent};
use crate::render::{field_key, ordered_step_panels, render, toast_id};
use crate::storage::{load_from_local_storage, KeyValueStore};
use crate::timers::{TimerQueue, TimerTask};

/// One loaded page: its document, the core state machine, pending timers
/// and the storage backing `localStorage`.
pub struct PageRuntime {
    pub(crate) config: UiConfig,
    pub(crate) document: Document,
    state: AppState,
    pub(crate) timers: TimerQueue,
    pub(crate) store: Box<dyn KeyValueStore>,
    pub(crate) lazy_images: BTreeSet<NodeId>,
    pub(crate) focus_traps: Vec<NodeId>,
    pub(crate) submissions: Vec<BTreeMap<String, String>>,
}

impl PageRuntime {
    pub fn new(document: Document, store: Box<dyn KeyValueStore>, config: UiConfig) -> Self {
        Self {
            state: AppState::with_settings(config.core_settings()),
            config,
            document,
            timers: TimerQueue::new(),
            store,
            lazy_images: BTreeSet::new(),
            focus_traps: Vec::new(),
            submissions: Vec::new(),
        }
    }

    pub fn from_html(markup: &str, store: Box<dyn KeyValueStore>, config: UiConfig) -> Self {
        Self::new(Document::parse_html(markup), store, config)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Form payloads accepted by the wizard, oldest first.
    pub fn submissions(&self) -> &[BTreeMap<String, String>] {
        &self.submissions
    }

    /// Runs one message through the core and applies what comes back.
    pub fn dispatch(&mut self, msg: Msg) {
        ui_trace!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;

        self.run_effects(effects);
        if let Some(view) = view {
            render(&mut self.document, &view);
        }
    }

    /// Shows a toast with the configured default timeout.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.dispatch(Msg::Notify(NotificationRequest::new(message, severity)));
    }

    pub fn notify_for(&mut self, message: impl Into<String>, severity: Severity, timeout: Duration) {
        self.dispatch(Msg::Notify(
            NotificationRequest::new(message, severity).with_timeout(timeout),
        ));
    }

    pub fn handle_event(&mut self, event: PageEvent) -> EventOutcome {
        let mut outcome = EventOutcome::default();
        match event {
            PageEvent::DomContentLoaded => self.initialize(),
            PageEvent::Click {
                target,
                client_x,
                client_y,
            } => self.handle_click(target, client_x, client_y, &mut outcome),
            PageEvent::Input { target, value } => self.handle_input(target, value),
            PageEvent::Change { target, value } => self.handle_change(target, value),
            PageEvent::KeyDown { target, key, shift } => {
                if key == "Tab" && self.handle_tab(target, shift) {
                    outcome.prevent_default();
                }
            }
            PageEvent::MouseEnter { target } => self.show_tooltip(target),
            PageEvent::MouseLeave { target } => self.hide_tooltip(target),
            PageEvent::Intersecting { target } => self.reveal_lazy_image(target),
            PageEvent::Online => self.dispatch(Msg::ConnectivityChanged { online: true }),
            PageEvent::Offline => self.dispatch(Msg::ConnectivityChanged { online: false }),
        }
        outcome
    }

    /// Moves the page clock forward by `ms`, firing every timer that falls
    /// due on the way in deadline order.
    pub fn advance_time(&mut self, ms: u64) {
        let until = self.timers.now_ms().saturating_add(ms);
        while let Some((due, task)) = self.timers.pop_due(until) {
            self.sync_clock(due);
            self.run_timer(task);
        }
        self.timers.set_now(until);
        self.sync_clock(until);
    }

    /// Fires timers until none are left.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.timers.next_due() {
            let step = due.saturating_sub(self.timers.now_ms());
            self.advance_time(step);
        }
    }

    fn sync_clock(&mut self, now_ms: u64) {
        ui_logging::set_page_clock(now_ms);
        if self.state.clock_ms() != now_ms {
            self.dispatch(Msg::Tick { now_ms });
        }
    }

    fn run_timer(&mut self, task: TimerTask) {
        match task {
            TimerTask::ToastExpiry(id) => self.dispatch(Msg::ToastExpired { id }),
            TimerTask::FilterDebounce(generation) => {
                self.dispatch(Msg::FilterTimerFired { generation })
            }
            TimerTask::RemoveNode(node) => self.document.discard(node),
            TimerTask::ResetTransform(node) => {
                self.document.set_style(node, "transform", "scale(1)")
            }
            TimerTask::RestoreButton(node) => self.finish_loading(node),
            TimerTask::AnimationFrame { node, fade } => self.step_fade(node, fade),
        }
    }

    fn initialize(&mut self) {
        ui_info!("Initializing page");
        self.inject_styles();
        self.initialize_theme();
        self.mount_wizard();
        self.mount_experience_cards();
        self.observe_lazy_images();
    }

    fn initialize_theme(&mut self) {
        let theme = load_from_local_storage(self.store.as_ref(), THEME_STORAGE_KEY, Theme::Light);
        ui_debug!("Restored theme {theme}");
        self.dispatch(Msg::ThemeRestored(theme));
    }

    fn mount_wizard(&mut self) {
        let doc = &self.document;
        let panels = ordered_step_panels(doc);
        if panels.is_empty() {
            ui_debug!("No wizard on this page");
            return;
        }
        if panels.iter().enumerate().any(|(index, (step, _))| *step != index + 1) {
            let numbers: Vec<usize> = panels.iter().map(|(step, _)| *step).collect();
            ui_info!("Wizard steps numbered {numbers:?}; counting them 1..={}", numbers.len());
        }

        let mut steps = Vec::with_capacity(panels.len());
        let mut values = Vec::new();
        for (_, panel) in panels {
            let mut required = Vec::new();
            for field in doc.query_within(panel, FORM_FIELD) {
                let Some(key) = field_key(doc, field) else {
                    continue;
                };
                if doc.has_attr(field, "required") {
                    required.push(key.clone());
                }
                values.push((key, doc.value(field)));
            }
            steps.push(StepSpec { required });
        }
        ui_info!("Wizard mounted with {} steps", steps.len());
        self.dispatch(Msg::WizardMounted { steps, values });
    }

    fn mount_experience_cards(&mut self) {
        let doc = &self.document;
        let text_of = |card: NodeId, selector: &str| {
            doc.query_first_within(card, selector)
                .map(|node| doc.text_content(node).trim().to_string())
                .unwrap_or_default()
        };
        let cards: Vec<ExperienceCard> = doc
            .query_selector_all(EXPERIENCE_CARD)
            .into_iter()
            .map(|card| ExperienceCard {
                company: text_of(card, CARD_COMPANY),
                role: text_of(card, CARD_ROLE),
                details: text_of(card, CARD_DETAILS),
            })
            .collect();
        if !cards.is_empty() {
            ui_debug!("Mounted {} experience cards", cards.len());
            self.dispatch(Msg::CardsMounted(cards));
        }
    }

    fn handle_click(&mut self, target: NodeId, x: f64, y: f64, outcome: &mut EventOutcome) {
        if !self.document.is_connected(target) {
            ui_debug!("Click on detached node {:?} ignored", target);
            return;
        }
        if !self.receives_pointer_events(target) {
            ui_debug!("Click on {:?} blocked by pointer-events", target);
            return;
        }

        if let Some(toast) = self.document.closest(target, TOAST) {
            if let Some(id) = toast_id(&self.document, toast) {
                self.dispatch(Msg::ToastClicked { id });
            }
            return;
        }

        self.close_profile_menu_if_outside(target);

        if let Some(button) = self.document.closest(target, BUTTON) {
            self.add_ripple(button, x, y);
            self.start_loading(button);
        }

        let wizard_buttons = format!("#{PREV_BUTTON_ID}, #{NEXT_BUTTON_ID}, #{SUBMIT_BUTTON_ID}");
        let wizard_button = self
            .document
            .closest(target, &wizard_buttons)
            .and_then(|button| self.document.id_of(button))
            .map(str::to_string);
        match wizard_button.as_deref() {
            Some(PREV_BUTTON_ID) => self.dispatch(Msg::PrevClicked),
            Some(NEXT_BUTTON_ID) => self.dispatch(Msg::NextClicked),
            Some(SUBMIT_BUTTON_ID) => {
                outcome.prevent_default();
                self.dispatch(Msg::SubmitClicked);
            }
            _ => {}
        }

        if let Some(element) = self.document.closest(target, ACTION) {
            self.run_action(element, target);
        }

        if let Some(link) = self.document.closest(target, NAV_LINK) {
            let section = self.document.attr(link, "data-section").unwrap_or_default().to_string();
            self.show_section(&section);
            outcome.prevent_default();
        } else if let Some(anchor) = self.document.closest(target, HASH_LINK) {
            self.smooth_scroll(anchor);
            outcome.prevent_default();
        }

        if self.document.get_element_by_id(ASK_QUESTION_MODAL_ID) == Some(target) {
            self.close_modal();
        }
    }

    /// `pointer-events` inherits: the nearest inclusive ancestor that sets
    /// it decides.
    fn receives_pointer_events(&self, target: NodeId) -> bool {
        let mut current = Some(target);
        while let Some(node) = current {
            if let Some(value) = self.document.style(node, "pointer-events") {
                return value.trim() != "none";
            }
            current = self.document.parent(node);
        }
        true
    }

    fn run_action(&mut self, element: NodeId, target: NodeId) {
        let action = self.document.attr(element, "data-action").unwrap_or_default().to_string();
        match action.as_str() {
            "toggle-mobile-menu" => {
                self.toggle_mobile_menu();
            }
            "toggle-profile-menu" => {
                self.toggle_profile_menu();
            }
            "toggle-notifications" => self.toggle_notifications(),
            "toggle-like" => self.toggle_like(element),
            "toggle-save" => self.toggle_save(element),
            "toggle-theme" => self.dispatch(Msg::ThemeToggled),
            "open-modal" => {
                self.open_modal();
            }
            "close-modal" => {
                self.close_modal();
            }
            "select-role" => {
                let role = self
                    .document
                    .attr(element, "data-role")
                    .map(str::to_string)
                    .unwrap_or_else(|| self.document.text_content(element).trim().to_string());
                self.select_role(target, &role);
            }
            other => ui_debug!("Unhandled action {other:?}"),
        }
    }

    fn handle_input(&mut self, target: NodeId, value: String) {
        self.document.set_value(target, &value);
        if self.document.matches_selector(target, SEARCH_INPUT) {
            self.dispatch(Msg::SearchInputChanged(value));
        } else {
            self.edit_wizard_field(target, value);
        }
    }

    fn handle_change(&mut self, target: NodeId, value: String) {
        self.document.set_value(target, &value);
        let filter_index = self
            .document
            .query_selector_all(FILTER_SELECT)
            .iter()
            .position(|select| *select == target);
        match filter_index {
            Some(0) => self.dispatch(Msg::JobTypeSelected(value)),
            Some(1) => self.dispatch(Msg::YearSelected(value)),
            Some(_) => ui_debug!("Extra filter select ignored"),
            None => self.edit_wizard_field(target, value),
        }
    }

    fn edit_wizard_field(&mut self, target: NodeId, value: String) {
        if self.document.closest(target, STEP_PANEL).is_none() {
            return;
        }
        if let Some(name) = field_key(&self.document, target) {
            self.dispatch(Msg::FieldEdited { name, value });
        }
    }
}
