use std::sync::Once;

use pretty_assertions::assert_eq;
use xshare_core::Theme;
use xshare_page::{
    load_from_local_storage, KeyValueStore, MemoryStore, PageEvent, PageRuntime, UiConfig,
};

const EXPERIENCE_PAGE: &str = r#"
<html>
<body>
  <input class="search-input" type="text">
  <select class="filter-select">
    <option selected>All Job Types</option>
    <option>Full-time</option>
    <option>Internship</option>
  </select>
  <select class="filter-select">
    <option selected>All Years</option>
    <option>2023</option>
    <option>2021</option>
  </select>
  <div class="experience-card">
    <h3>Acme Corp</h3>
    <p class="role">Backend Engineer</p>
    <p class="details">Full-time, 2023</p>
  </div>
  <div class="experience-card">
    <h3>Globex</h3>
    <p class="role">Design Intern</p>
    <p class="details">Internship, 2021</p>
  </div>
  <button class="btn" data-action="toggle-theme">Theme</button>
</body>
</html>
"#;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

fn loaded_with(store: MemoryStore) -> PageRuntime {
    init_logging();
    let mut page = PageRuntime::from_html(EXPERIENCE_PAGE, Box::new(store), UiConfig::default());
    page.handle_event(PageEvent::DomContentLoaded);
    page
}

fn card_display(page: &PageRuntime) -> Vec<Option<String>> {
    let doc = page.document();
    doc.query_selector_all(".experience-card")
        .into_iter()
        .map(|card| doc.style(card, "display").map(str::to_string))
        .collect()
}

fn shown(flags: &[bool]) -> Vec<Option<String>> {
    flags
        .iter()
        .map(|visible| Some(if *visible { "block" } else { "none" }.to_string()))
        .collect()
}

fn type_search(page: &mut PageRuntime, text: &str) {
    let Some(target) = page.document().query_selector(".search-input") else {
        panic!("search input missing");
    };
    page.handle_event(PageEvent::Input {
        target,
        value: text.to_string(),
    });
}

fn select(page: &mut PageRuntime, index: usize, value: &str) {
    let target = page.document().query_selector_all(".filter-select")[index];
    page.handle_event(PageEvent::Change {
        target,
        value: value.to_string(),
    });
}

#[test]
fn all_cards_visible_after_load() {
    let page = loaded_with(MemoryStore::new());
    assert_eq!(card_display(&page), shown(&[true, true]));
}

#[test]
fn search_waits_for_the_debounce_delay() {
    let mut page = loaded_with(MemoryStore::new());
    type_search(&mut page, "acme");

    page.advance_time(299);
    assert_eq!(card_display(&page), shown(&[true, true]));
    page.advance_time(1);
    assert_eq!(card_display(&page), shown(&[true, false]));
}

#[test]
fn only_the_last_keystroke_filters() {
    let mut page = loaded_with(MemoryStore::new());
    type_search(&mut page, "a");
    page.advance_time(200);
    type_search(&mut page, "ac");
    page.advance_time(200);
    type_search(&mut page, "glob");

    // The first two timers have fired by now and must not have applied "a"/"ac".
    page.advance_time(299);
    assert_eq!(card_display(&page), shown(&[true, true]));
    page.advance_time(1);
    assert_eq!(card_display(&page), shown(&[false, true]));
}

#[test]
fn search_is_case_insensitive_on_role() {
    let mut page = loaded_with(MemoryStore::new());
    type_search(&mut page, "  DESIGN ");
    page.run_until_idle();
    assert_eq!(card_display(&page), shown(&[false, true]));
}

#[test]
fn selects_filter_immediately() {
    let mut page = loaded_with(MemoryStore::new());
    select(&mut page, 0, "Full-time");
    assert_eq!(card_display(&page), shown(&[true, false]));

    select(&mut page, 0, "All Job Types");
    select(&mut page, 1, "2021");
    assert_eq!(card_display(&page), shown(&[false, true]));
}

#[test]
fn theme_defaults_to_light() {
    let page = loaded_with(MemoryStore::new());
    let root = page.document().document_element();
    assert_eq!(page.document().attr(root, "data-theme"), Some("light"));
    assert_eq!(page.state().theme(), Theme::Light);
}

#[test]
fn stored_theme_is_restored() {
    let mut store = MemoryStore::new();
    store.set_item("theme", "\"dark\"").expect("seed store");
    let page = loaded_with(store);
    let root = page.document().document_element();
    assert_eq!(page.document().attr(root, "data-theme"), Some("dark"));
}

#[test]
fn unreadable_theme_falls_back_to_light() {
    let mut store = MemoryStore::new();
    store.set_item("theme", "dark").expect("seed store");
    let page = loaded_with(store);
    assert_eq!(page.state().theme(), Theme::Light);
}

#[test]
fn toggling_twice_persists_each_step() {
    let mut page = loaded_with(MemoryStore::new());
    let Some(button) = page.document().query_selector("[data-action=\"toggle-theme\"]") else {
        panic!("theme button missing");
    };

    page.handle_event(PageEvent::click(button));
    assert_eq!(page.state().theme(), Theme::Dark);
    assert_eq!(
        load_from_local_storage(page.store(), "theme", String::new()),
        "dark"
    );

    page.handle_event(PageEvent::click(button));
    let root = page.document().document_element();
    assert_eq!(page.document().attr(root, "data-theme"), Some("light"));
    assert_eq!(
        load_from_local_storage(page.store(), "theme", String::new()),
        "light"
    );
}

#[test]
fn theme_toast_replaces_the_previous_one() {
    let mut page = loaded_with(MemoryStore::new());
    let Some(button) = page.document().query_selector("[data-action=\"toggle-theme\"]") else {
        panic!("theme button missing");
    };
    page.handle_event(PageEvent::click(button));
    page.handle_event(PageEvent::click(button));

    let doc = page.document();
    let messages: Vec<String> = doc
        .query_selector_all(".toast-message")
        .into_iter()
        .map(|node| doc.text_content(node))
        .collect();
    assert_eq!(messages, vec!["Switched to light theme".to_string()]);
}
