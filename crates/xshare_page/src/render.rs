use std::collections::BTreeMap;

use ui_logging::ui_warn;
use xshare_core::{AppViewModel, ToastId, ToastView, WizardView};

use crate::contract::*;
use crate::dom::{Document, NodeId};

const TOAST_TOP_PX: usize = 20;
const TOAST_SPACING_PX: usize = 70;

/// Syncs the document with the view model. Safe to call repeatedly.
pub fn render(doc: &mut Document, view: &AppViewModel) {
    let root = doc.document_element();
    doc.set_attr(root, "data-theme", view.theme.as_str());

    if let Some(wizard) = &view.wizard {
        render_wizard(doc, wizard);
    }
    render_cards(doc, &view.card_visibility);
    render_toasts(doc, &view.toasts);
}

fn render_wizard(doc: &mut Document, wizard: &WizardView) {
    let ordered = ordered_step_panels(doc);
    let position_of_step = |step: usize| {
        ordered
            .iter()
            .position(|(number, _)| *number == step)
            .map(|index| index + 1)
    };

    for panel in doc.query_selector_all(STEP_PANEL) {
        let position = ordered
            .iter()
            .position(|(_, node)| *node == panel)
            .map(|index| index + 1);
        let active = position == Some(wizard.current_step);
        doc.set_style(panel, "display", if active { "block" } else { "none" });
        doc.set_class_if(panel, "active", active);
        for field in doc.query_within(panel, FORM_FIELD) {
            if let Some(key) = field_key(doc, field) {
                let invalid = wizard.invalid_fields.contains(&key);
                doc.set_class_if(field, "error", invalid);
            }
        }
    }

    for marker in doc.query_selector_all(PROGRESS_STEP) {
        let step = step_number(doc, marker).and_then(position_of_step);
        doc.set_class_if(marker, "active", step == Some(wizard.current_step));
        doc.set_class_if(
            marker,
            "completed",
            step.is_some_and(|step| step < wizard.current_step),
        );
    }

    set_button_visible(doc, PREV_BUTTON_ID, wizard.prev_visible);
    set_button_visible(doc, NEXT_BUTTON_ID, wizard.next_visible);
    set_button_visible(doc, SUBMIT_BUTTON_ID, wizard.submit_visible);
}

fn set_button_visible(doc: &mut Document, id: &str, visible: bool) {
    if let Some(button) = doc.get_element_by_id(id) {
        doc.set_style(button, "display", if visible { "inline-block" } else { "none" });
    }
}

fn render_cards(doc: &mut Document, visibility: &[bool]) {
    let cards = doc.query_selector_all(EXPERIENCE_CARD);
    for (card, visible) in cards.into_iter().zip(visibility) {
        doc.set_style(card, "display", if *visible { "block" } else { "none" });
    }
}

fn render_toasts(doc: &mut Document, toasts: &[ToastView]) {
    let mut present: BTreeMap<ToastId, NodeId> = BTreeMap::new();
    for node in doc.query_selector_all(TOAST) {
        match toast_id(doc, node) {
            Some(id) if toasts.iter().any(|toast| toast.id == id) => {
                present.insert(id, node);
            }
            _ => doc.discard(node),
        }
    }

    for (index, toast) in toasts.iter().enumerate() {
        let node = match present.get(&toast.id) {
            Some(node) => *node,
            None => create_toast(doc, toast),
        };
        let top = TOAST_TOP_PX + index * TOAST_SPACING_PX;
        doc.set_style(node, "top", &format!("{top}px"));
    }
}

fn create_toast(doc: &mut Document, toast: &ToastView) -> NodeId {
    let node = doc.create_element("div");
    doc.set_attr(node, "class", &format!("toast toast-{}", toast.severity.tag()));
    doc.set_attr(node, "data-toast-id", &toast.id.to_string());
    doc.set_attr(node, "role", "alert");
    doc.set_style(node, "position", "fixed");
    doc.set_style(node, "right", "20px");
    doc.set_style(node, "background", toast.severity.color());
    doc.set_style(node, "color", "white");
    doc.set_style(node, "padding", "12px 16px");
    doc.set_style(node, "border-radius", "8px");
    doc.set_style(node, "z-index", "1000");

    let message = doc.create_element("span");
    doc.set_attr(message, "class", "toast-message");
    doc.set_text_content(message, &toast.message);

    let close = doc.create_element("button");
    doc.set_attr(close, "class", "toast-close");
    doc.set_attr(close, "aria-label", "Close");
    doc.set_text_content(close, "\u{d7}");

    let body = doc.body();
    for (parent, child) in [(node, message), (node, close), (body, node)] {
        if let Err(err) = doc.append_child(parent, child) {
            ui_warn!("Failed to build toast {}: {err}", toast.id);
        }
    }
    node
}

/// Toast id carried by a toast element.
pub(crate) fn toast_id(doc: &Document, node: NodeId) -> Option<ToastId> {
    doc.attr(node, "data-toast-id")?.parse().ok()
}

fn step_number(doc: &Document, node: NodeId) -> Option<usize> {
    doc.attr(node, "data-step")?.trim().parse().ok()
}

/// Numbered step panels sorted by `data-step`. The wizard counts steps by
/// position in this list, so numbering may start anywhere and skip values.
pub(crate) fn ordered_step_panels(doc: &Document) -> Vec<(usize, NodeId)> {
    let mut panels: Vec<(usize, NodeId)> = doc
        .query_selector_all(STEP_PANEL)
        .into_iter()
        .filter_map(|panel| step_number(doc, panel).map(|step| (step, panel)))
        .collect();
    panels.sort_by_key(|(step, _)| *step);
    panels
}

/// Key a form control is tracked under: its `name`, else its `id`.
pub(crate) fn field_key(doc: &Document, node: NodeId) -> Option<String> {
    doc.attr(node, "name")
        .or_else(|| doc.id_of(node))
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}
