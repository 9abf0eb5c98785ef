use std::time::Duration;

use pretty_assertions::assert_eq;
use xshare_core::{
    update, AppState, CoreSettings, Effect, Msg, NotificationRequest, Severity, ToastCenter,
    ToastPolicy,
};

fn notify(state: AppState, message: &str, severity: Severity) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::Notify(NotificationRequest::new(message, severity)),
    )
}

#[test]
fn unknown_severity_tag_falls_back_to_info() {
    assert_eq!(Severity::from_tag("error"), Severity::Error);
    assert_eq!(Severity::from_tag(" Success "), Severity::Success);
    assert_eq!(Severity::from_tag("fatal"), Severity::Info);
    assert_eq!(Severity::from_tag("fatal").color(), Severity::Info.color());
}

#[test]
fn replace_policy_keeps_only_latest_toast() {
    let (state, _) = notify(AppState::new(), "first", Severity::Info);
    let (state, effects) = notify(state, "second", Severity::Warning);

    let toasts = state.view().toasts;
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "second");
    assert_eq!(
        effects,
        vec![Effect::ScheduleToastExpiry {
            id: toasts[0].id,
            after: Duration::from_millis(3000),
        }]
    );
}

#[test]
fn stack_policy_keeps_every_toast() {
    let settings = CoreSettings {
        toast_policy: ToastPolicy::Stack,
        ..CoreSettings::default()
    };
    let (state, _) = notify(AppState::with_settings(settings), "first", Severity::Info);
    let (state, _) = notify(state, "second", Severity::Success);

    let messages: Vec<_> = state.view().toasts.into_iter().map(|t| t.message).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn explicit_timeout_overrides_default() {
    let request = NotificationRequest::new("slow", Severity::Info)
        .with_timeout(Duration::from_millis(5000));
    let (_state, effects) = update(AppState::new(), Msg::Notify(request));
    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleToastExpiry { after, .. }] if *after == Duration::from_millis(5000)
    ));
}

#[test]
fn expiry_and_click_remove_toast_once() {
    let (state, _) = notify(AppState::new(), "bye", Severity::Info);
    let id = state.view().toasts[0].id;

    let (mut state, _) = update(state, Msg::ToastClicked { id });
    assert!(state.view().toasts.is_empty());
    assert!(state.consume_dirty());

    // Timer fires after the user already closed it.
    let (mut state, effects) = update(state, Msg::ToastExpired { id });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn toast_records_page_clock() {
    let mut center = ToastCenter::default();
    let toast = center.push(NotificationRequest::new("hi", Severity::Info), 1234);
    assert_eq!(toast.created_at_ms, 1234);
    assert_eq!(toast.timeout, Duration::from_millis(3000));

    let (state, _) = update(AppState::new(), Msg::Tick { now_ms: 900 });
    let (state, _) = notify(state, "later", Severity::Info);
    assert_eq!(state.toasts().active()[0].created_at_ms, 900);
}

#[test]
fn connectivity_changes_notify() {
    let (state, _) = update(AppState::new(), Msg::ConnectivityChanged { online: false });
    assert_eq!(state.view().toasts[0].message, "No internet connection");
    assert_eq!(state.view().toasts[0].severity, Severity::Warning);

    let (state, _) = update(state, Msg::ConnectivityChanged { online: true });
    assert_eq!(state.view().toasts[0].message, "Connection restored");
    assert_eq!(state.view().toasts[0].severity, Severity::Success);
}
