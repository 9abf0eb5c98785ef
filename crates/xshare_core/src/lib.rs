//! XShare core: pure page state machine, view model and display helpers.
mod debounce;
mod effect;
mod fade;
mod filter;
mod format;
mod keyboard;
mod msg;
mod notification;
mod search;
mod settings;
mod state;
mod theme;
mod update;
mod validate;
mod view_model;
mod wizard;

pub use debounce::{DebounceTicket, Debouncer};
pub use effect::Effect;
pub use fade::{Fade, FadeDirection, FadeFrame};
pub use filter::{
    filter_experiences, ExperienceCard, FilterCriteria, FilterState, ALL_JOB_TYPES, ALL_YEARS,
};
pub use format::{
    capitalize_first, format_date, format_date_str, format_number, parse_date, truncate_text,
    DateParseError, RelativeDay,
};
pub use keyboard::{focus_trap_target, handle_keyboard_navigation, KeyNavigation};
pub use msg::Msg;
pub use notification::{
    Notification, NotificationRequest, Severity, ToastCenter, ToastId, ToastPolicy,
};
pub use search::{get_nested_property, perform_search};
pub use settings::CoreSettings;
pub use state::AppState;
pub use theme::{Theme, THEME_STORAGE_KEY};
pub use update::{update, REQUIRED_FIELDS_MESSAGE, SUBMITTED_MESSAGE};
pub use validate::{validate_email, validate_password};
pub use view_model::{AppViewModel, ToastView, WizardView};
pub use wizard::{StepOutcome, StepSpec, WizardState};
