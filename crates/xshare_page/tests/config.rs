use std::fs;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use xshare_core::{Severity, ToastPolicy};
use xshare_page::{ConfigError, MemoryStore, PageRuntime, TimerQueue, TimerTask, UiConfig};

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = UiConfig::load(&temp.path().join("xshare.ron")).unwrap();
    assert_eq!(config, UiConfig::default());

    let settings = config.core_settings();
    assert_eq!(settings.toast_policy, ToastPolicy::Replace);
    assert_eq!(settings.default_toast_timeout, Duration::from_millis(3000));
    assert_eq!(settings.form_toast_timeout, Duration::from_millis(5000));
    assert_eq!(settings.filter_debounce, Duration::from_millis(300));
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("xshare.ron");
    fs::write(
        &path,
        "(toast: (policy: Stack, default_timeout_ms: 1500), animation: (fade_ms: 120))",
    )
    .unwrap();

    let config = UiConfig::load(&path).unwrap();
    assert_eq!(config.toast.policy, ToastPolicy::Stack);
    assert_eq!(config.toast.default_timeout_ms, 1500);
    assert_eq!(config.toast.form_timeout_ms, 5000);
    assert_eq!(config.animation.fade_ms, 120);
    assert_eq!(config.animation.ripple_ms, 600);
    assert_eq!(config.filter.debounce_ms, 300);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let result = UiConfig::from_ron_str("(toast: (policy: Sideways))");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn unreadable_path_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let result = UiConfig::load(temp.path());
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn stack_policy_keeps_older_toasts() {
    let config = UiConfig::from_ron_str("(toast: (policy: Stack))").unwrap();
    let mut page = PageRuntime::from_html(
        "<html><body></body></html>",
        Box::new(MemoryStore::new()),
        config,
    );
    page.notify("First", Severity::Info);
    page.advance_time(1000);
    page.notify("Second", Severity::Warning);

    let doc = page.document();
    let toasts = doc.query_selector_all(".toast");
    assert_eq!(toasts.len(), 2);
    assert_eq!(doc.style(toasts[0], "top"), Some("20px"));
    assert_eq!(doc.style(toasts[1], "top"), Some("90px"));
    assert!(doc.has_class(toasts[1], "toast-warning"));

    // The first toast expires on its own 3 s timer.
    page.advance_time(2000);
    let doc = page.document();
    let remaining: Vec<String> = doc
        .query_selector_all(".toast-message")
        .into_iter()
        .map(|node| doc.text_content(node))
        .collect();
    assert_eq!(remaining, vec!["Second".to_string()]);
}

#[test]
fn oversized_timeout_saturates_the_deadline() {
    let config =
        UiConfig::from_ron_str("(toast: (default_timeout_ms: 18446744073709551615))").unwrap();
    let mut page = PageRuntime::from_html(
        "<html><body></body></html>",
        Box::new(MemoryStore::new()),
        config,
    );
    page.advance_time(5);
    page.notify("Pinned", Severity::Info);
    assert_eq!(page.pending_timers(), 1);

    page.advance_time(60_000);
    assert_eq!(page.document().query_selector_all(".toast").len(), 1);
}

#[test]
fn timer_queue_clamps_deadlines_at_the_end_of_the_clock() {
    let mut queue = TimerQueue::new();
    queue.set_now(10);
    queue.schedule(Duration::MAX, TimerTask::FilterDebounce(1));
    queue.schedule(Duration::from_millis(u64::MAX), TimerTask::FilterDebounce(2));
    assert_eq!(queue.next_due(), Some(u64::MAX));
    assert_eq!(queue.pop_due(u64::MAX), Some((u64::MAX, TimerTask::FilterDebounce(1))));
    assert_eq!(queue.pop_due(u64::MAX), Some((u64::MAX, TimerTask::FilterDebounce(2))));
}

#[test]
fn replaced_toasts_reuse_document_nodes() {
    let mut page = PageRuntime::from_html(
        "<html><body></body></html>",
        Box::new(MemoryStore::new()),
        UiConfig::default(),
    );
    page.notify("First", Severity::Info);
    let after_first = page.document().allocated_nodes();
    for n in 0..20 {
        page.notify(format!("Update {n}"), Severity::Info);
    }

    let doc = page.document();
    assert_eq!(doc.allocated_nodes(), after_first);
    let messages: Vec<String> = doc
        .query_selector_all(".toast > .toast-message")
        .into_iter()
        .map(|node| doc.text_content(node))
        .collect();
    assert_eq!(messages, vec!["Update 19".to_string()]);
}
