use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use xshare_core::{
    filter_experiences, update, AppState, Effect, ExperienceCard, FilterCriteria, Msg, Theme,
    ALL_JOB_TYPES, ALL_YEARS,
};

fn card(company: &str, role: &str, details: &str) -> ExperienceCard {
    ExperienceCard {
        company: company.to_string(),
        role: role.to_string(),
        details: details.to_string(),
    }
}

fn cards() -> Vec<ExperienceCard> {
    vec![
        card("Acme Corp", "Backend Intern", "Internship · 2023"),
        card("Globex", "Data Analyst", "Full-time · 2024"),
        card("Initech", "ACME Liaison", "Full-time · 2023"),
    ]
}

fn with_cards() -> AppState {
    update(AppState::new(), Msg::CardsMounted(cards())).0
}

#[test]
fn empty_criteria_show_every_card() {
    let criteria = FilterCriteria::from_inputs("", ALL_JOB_TYPES, ALL_YEARS);
    assert_eq!(criteria, FilterCriteria::default());
    assert_eq!(filter_experiences(&criteria, &cards()), vec![true, true, true]);
    assert_eq!(with_cards().view().card_visibility, vec![true, true, true]);
}

#[test]
fn search_is_case_insensitive_over_company_and_role() {
    let criteria = FilterCriteria::from_inputs("acme", ALL_JOB_TYPES, ALL_YEARS);
    assert_eq!(filter_experiences(&criteria, &cards()), vec![true, false, true]);
}

#[test]
fn selects_constrain_details() {
    let criteria = FilterCriteria::from_inputs("", "Full-time", "2023");
    assert_eq!(filter_experiences(&criteria, &cards()), vec![false, false, true]);
}

#[test]
fn search_input_is_debounced_by_generation() {
    let state = with_cards();
    let (state, first) = update(state, Msg::SearchInputChanged("gl".to_string()));
    let (mut state, second) = update(state, Msg::SearchInputChanged("globex".to_string()));
    assert_eq!(
        first,
        vec![Effect::ScheduleFilter {
            generation: 1,
            after: Duration::from_millis(300),
        }]
    );
    assert_eq!(
        second,
        vec![Effect::ScheduleFilter {
            generation: 2,
            after: Duration::from_millis(300),
        }]
    );
    // Nothing filtered until a timer fires.
    assert_eq!(state.view().card_visibility, vec![true, true, true]);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::FilterTimerFired { generation: 1 });
    assert!(!state.consume_dirty());
    assert_eq!(state.view().card_visibility, vec![true, true, true]);

    let (mut state, _) = update(state, Msg::FilterTimerFired { generation: 2 });
    assert!(state.consume_dirty());
    assert_eq!(state.view().card_visibility, vec![false, true, false]);
}

#[test]
fn select_changes_apply_immediately() {
    let (state, effects) = update(with_cards(), Msg::YearSelected("2024".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.view().card_visibility, vec![false, true, false]);

    let (state, _) = update(state, Msg::YearSelected(ALL_YEARS.to_string()));
    let (state, _) = update(state, Msg::JobTypeSelected("Internship".to_string()));
    assert_eq!(state.view().card_visibility, vec![true, false, false]);
}

#[test]
fn toggling_theme_twice_restores_and_persists_final_value() {
    let (state, _) = update(AppState::new(), Msg::ThemeRestored(Theme::Light));
    let (state, first) = update(state, Msg::ThemeToggled);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(
        first[0],
        Effect::Persist {
            key: "theme".to_string(),
            value: json!("dark"),
        }
    );
    assert_eq!(state.view().toasts[0].message, "Switched to dark theme");

    let (state, second) = update(state, Msg::ThemeToggled);
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(
        second[0],
        Effect::Persist {
            key: "theme".to_string(),
            value: json!("light"),
        }
    );
}

#[test]
fn theme_attribute_parsing() {
    assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attr(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_attr(None), Theme::Light);
}
