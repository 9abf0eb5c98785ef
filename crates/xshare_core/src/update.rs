use crate::{
    AppState, Effect, Msg, NotificationRequest, Severity, StepOutcome, WizardState,
    THEME_STORAGE_KEY,
};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Tick { now_ms } => {
            state.set_clock(now_ms);
            Vec::new()
        }
        Msg::WizardMounted { steps, values } => {
            let wizard = WizardState::new(steps).map(|mut wizard| {
                for (name, value) in values {
                    wizard.set_field(name, value);
                }
                wizard
            });
            state.set_wizard(wizard);
            Vec::new()
        }
        Msg::FieldEdited { name, value } => {
            let cleared_mark = state.wizard_mut().is_some_and(|wizard| {
                let was_invalid = wizard.invalid_fields().contains(&name);
                wizard.set_field(name, value);
                was_invalid
            });
            if cleared_mark {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NextClicked => {
            let Some(outcome) = state.wizard_mut().map(WizardState::advance) else {
                return (state, Vec::new());
            };
            state.mark_dirty();
            match outcome {
                StepOutcome::Invalid { .. } => vec![required_fields_notice(&mut state)],
                StepOutcome::Moved { .. } | StepOutcome::Stayed => Vec::new(),
            }
        }
        Msg::PrevClicked => {
            if let Some(StepOutcome::Moved { .. }) = state.wizard_mut().map(WizardState::retreat) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The submit button only exists on the last step.
            let submission = state
                .wizard_mut()
                .filter(|wizard| wizard.is_last_step())
                .map(|wizard| (wizard.validate_current_step(), wizard.values().clone()));
            let Some((validation, values)) = submission else {
                return (state, Vec::new());
            };
            state.mark_dirty();
            match validation {
                Ok(()) => {
                    let timeout = state.settings().form_toast_timeout;
                    let toast = state.push_notification(
                        NotificationRequest::new(SUBMITTED_MESSAGE, Severity::Success)
                            .with_timeout(timeout),
                    );
                    vec![Effect::SubmitForm { values }, toast]
                }
                Err(_) => vec![required_fields_notice(&mut state)],
            }
        }
        Msg::Notify(request) => vec![state.push_notification(request)],
        Msg::ToastClicked { id } | Msg::ToastExpired { id } => {
            state.dismiss_toast(id);
            Vec::new()
        }
        Msg::CardsMounted(cards) => {
            state.filter_mut().set_cards(cards);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchInputChanged(text) => {
            let ticket = state.filter_mut().set_search(text);
            vec![Effect::ScheduleFilter {
                generation: ticket.generation,
                after: ticket.delay,
            }]
        }
        Msg::JobTypeSelected(value) => {
            state.filter_mut().set_job_type(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::YearSelected(value) => {
            state.filter_mut().set_year(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FilterTimerFired { generation } => {
            if state.filter_mut().settle(generation) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ThemeRestored(theme) => {
            state.set_theme(theme);
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            let toast = state.push_notification(NotificationRequest::new(
                format!("Switched to {theme} theme"),
                Severity::Info,
            ));
            vec![
                Effect::Persist {
                    key: THEME_STORAGE_KEY.to_string(),
                    value: serde_json::Value::String(theme.as_str().to_string()),
                },
                toast,
            ]
        }
        Msg::ConnectivityChanged { online } => {
            let request = if online {
                NotificationRequest::new("Connection restored", Severity::Success)
            } else {
                NotificationRequest::new("No internet connection", Severity::Warning)
            };
            vec![state.push_notification(request)]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn required_fields_notice(state: &mut AppState) -> Effect {
    let timeout = state.settings().form_toast_timeout;
    state.push_notification(
        NotificationRequest::new(REQUIRED_FIELDS_MESSAGE, Severity::Error).with_timeout(timeout),
    )
}
