use std::time::Duration;

use chrono::{DateTime, Duration as Days, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use xshare_core::{
    capitalize_first, focus_trap_target, format_date, format_date_str, format_number,
    get_nested_property, handle_keyboard_navigation, perform_search, truncate_text,
    validate_email, validate_password, Fade, KeyNavigation, RelativeDay,
};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-30T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn format_number_compacts_thousands_and_millions() {
    assert_eq!(format_number(1500), "1.5K");
    assert_eq!(format_number(2_500_000), "2.5M");
    assert_eq!(format_number(42), "42");
    assert_eq!(format_number(1000), "1.0K");
    assert_eq!(format_number(999), "999");
}

#[test]
fn format_number_rounds_exact_halves_up() {
    assert_eq!(format_number(1250), "1.3K");
    assert_eq!(format_number(2250), "2.3K");
    assert_eq!(format_number(1_250_000), "1.3M");
    assert_eq!(format_number(9_750), "9.8K");
    // 1.15 and 1.05 are not exact in binary, so they round from below/above.
    assert_eq!(format_number(1150), "1.1K");
    assert_eq!(format_number(1050), "1.1K");
}

#[test]
fn relative_dates_fall_into_ascending_buckets() {
    let now = now();
    let cases = [
        (Days::zero(), RelativeDay::JustNow),
        (Days::hours(3), RelativeDay::Today),
        (Days::hours(30), RelativeDay::Yesterday),
        (Days::days(4), RelativeDay::DaysAgo(3)),
        (Days::days(14), RelativeDay::WeeksAgo(2)),
        (Days::days(90), RelativeDay::MonthsAgo(3)),
        (Days::days(800), RelativeDay::YearsAgo(3)),
    ];
    for (age, expected) in cases {
        assert_eq!(RelativeDay::between(now - age, now), expected, "age {age:?}");
    }
    assert_eq!(format_date(now - Days::days(4), now), "3 days ago");
}

#[test]
fn format_date_accepts_plain_dates_and_rejects_garbage() {
    assert_eq!(format_date_str("2024-06-29", now()).unwrap(), "Yesterday");
    assert_eq!(
        format_date_str("2024-06-30T08:00:00Z", now()).unwrap(),
        "Today"
    );
    assert!(format_date_str("last tuesday", now()).is_err());
}

#[test]
fn truncate_and_capitalize() {
    assert_eq!(truncate_text("short", 10), "short");
    assert_eq!(truncate_text("hello world again", 6), "hello...");
    assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
    assert_eq!(capitalize_first("xshare"), "Xshare");
    assert_eq!(capitalize_first(""), "");
}

#[test]
fn email_and_password_patterns() {
    assert!(validate_email("ada@example.com"));
    assert!(!validate_email("ada@example"));
    assert!(!validate_email("ada @example.com"));
    assert!(!validate_email("a@b@c.com"));

    assert!(validate_password("abc12345"));
    assert!(validate_password("P@ssw0rd!"));
    assert!(!validate_password("abcdefgh"));
    assert!(!validate_password("12345678"));
    assert!(!validate_password("ab1"));
    assert!(!validate_password("abc 12345"));
}

#[test]
fn nested_lookup_and_search() {
    let items = vec![
        json!({"title": "Acme interview", "author": {"name": "Ada"}, "tags": ["backend"]}),
        json!({"title": "Globex offer", "author": {"name": "Grace"}, "tags": ["Data", "SQL"]}),
        json!({"title": 7, "author": null, "tags": []}),
    ];
    assert_eq!(
        get_nested_property(&items[0], "author.name"),
        Some(&json!("Ada"))
    );
    assert_eq!(get_nested_property(&items[1], "tags.1"), Some(&json!("SQL")));
    assert_eq!(get_nested_property(&items[2], "author.name"), None);

    let hits = perform_search("sql", &items, &["title", "tags"]);
    assert_eq!(hits, vec![&items[1]]);
    let hits = perform_search("ADA", &items, &["author.name"]);
    assert_eq!(hits, vec![&items[0]]);
    assert_eq!(perform_search("  ", &items, &["title"]).len(), 3);
}

#[test]
fn keyboard_navigation_clamps_and_selects() {
    assert_eq!(
        handle_keyboard_navigation("ArrowDown", 3, None),
        KeyNavigation {
            index: Some(0),
            selected: None,
            prevent_default: true,
        }
    );
    assert_eq!(handle_keyboard_navigation("ArrowDown", 3, Some(2)).index, Some(2));
    assert_eq!(handle_keyboard_navigation("ArrowUp", 3, Some(0)).index, Some(0));
    assert_eq!(handle_keyboard_navigation("ArrowUp", 3, Some(2)).index, Some(1));
    assert_eq!(handle_keyboard_navigation("Enter", 3, Some(1)).selected, Some(1));
    assert_eq!(handle_keyboard_navigation("Enter", 3, None).selected, None);
    assert_eq!(handle_keyboard_navigation("Escape", 3, Some(1)).index, None);
    let other = handle_keyboard_navigation("a", 3, Some(1));
    assert_eq!(other.index, Some(1));
    assert!(!other.prevent_default);
    assert_eq!(handle_keyboard_navigation("ArrowDown", 0, None).index, None);
}

#[test]
fn focus_trap_wraps_at_the_edges() {
    assert_eq!(focus_trap_target(3, Some(2), false), Some(0));
    assert_eq!(focus_trap_target(3, Some(0), true), Some(2));
    assert_eq!(focus_trap_target(3, Some(1), false), None);
    assert_eq!(focus_trap_target(0, None, false), None);
}

#[test]
fn fades_progress_to_completion() {
    let fade_in = Fade::fade_in(100, Duration::from_millis(300));
    assert_eq!(fade_in.frame(100).opacity, 0.0);
    assert!((fade_in.frame(250).opacity - 0.5).abs() < 1e-9);
    assert!(fade_in.frame(400).finished);
    assert_eq!(fade_in.frame(1000).opacity, 1.0);

    let fade_out = Fade::fade_out(0, Duration::from_millis(200), 0.8);
    assert!((fade_out.frame(100).opacity - 0.4).abs() < 1e-9);
    let done = fade_out.frame(200);
    assert!(done.finished);
    assert_eq!(done.opacity, 0.0);

    assert!(Fade::fade_in(0, Duration::ZERO).frame(0).finished);
}
