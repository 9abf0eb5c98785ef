//! Element ids, classes and selectors the page markup is expected to use.

pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const PROFILE_MENU_ID: &str = "profileMenu";
pub const ASK_QUESTION_MODAL_ID: &str = "askQuestionModal";
pub const PREV_BUTTON_ID: &str = "prevBtn";
pub const NEXT_BUTTON_ID: &str = "nextBtn";
pub const SUBMIT_BUTTON_ID: &str = "submitBtn";

pub const PROFILE_DROPDOWN: &str = ".profile-dropdown";
pub const DASHBOARD_SECTION: &str = ".dashboard-section";
pub const NAV_LINK: &str = ".nav-link[data-section]";
pub const STEP_PANEL: &str = ".form-step[data-step]";
pub const PROGRESS_STEP: &str = ".progress-step[data-step]";
pub const FORM_FIELD: &str = "input, select, textarea";
pub const SEARCH_INPUT: &str = ".search-input";
pub const FILTER_SELECT: &str = ".filter-select";
pub const EXPERIENCE_CARD: &str = ".experience-card";
pub const CARD_COMPANY: &str = "h3";
pub const CARD_ROLE: &str = ".role";
pub const CARD_DETAILS: &str = ".details";
pub const ROLE_OPTION: &str = ".role-option";
pub const TOAST: &str = ".toast";
pub const TOAST_CLOSE: &str = ".toast-close";
pub const BUTTON: &str = ".btn";
pub const HASH_LINK: &str = "a[href^=\"#\"]";
pub const LAZY_IMAGE: &str = "img[data-src]";
pub const TOOLTIP_HOST: &str = "[data-tooltip]";
pub const TOOLTIP: &str = ".tooltip";
pub const FOCUSABLE: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";
/// Elements carrying a `data-action` attribute route clicks to page helpers.
pub const ACTION: &str = "[data-action]";

pub const STYLESHEET_ID: &str = "xshare-ui-styles";

pub const LIKE_IDLE_COLOR: &str = "#64748b";
pub const LIKED_COLOR: &str = "#ef4444";
pub const SAVED_COLOR: &str = "#5b61ff";

pub const UI_STYLESHEET: &str = r#"
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple-animation 0.6s linear;
    pointer-events: none;
}

@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.tooltip {
    position: absolute;
    background: #333;
    color: white;
    padding: 0.5rem 0.75rem;
    border-radius: 0.25rem;
    font-size: 0.875rem;
    z-index: 1000;
    pointer-events: none;
    white-space: nowrap;
}

.tooltip::after {
    content: '';
    position: absolute;
    top: 100%;
    left: 50%;
    margin-left: -5px;
    border-width: 5px;
    border-style: solid;
    border-color: #333 transparent transparent transparent;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}
"#;
