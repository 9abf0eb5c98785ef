use std::time::Duration;

use ui_logging::{ui_debug, ui_warn};
use xshare_core::{focus_trap_target, handle_keyboard_navigation, KeyNavigation};

use crate::contract::FOCUSABLE;
use crate::dom::NodeId;
use crate::runtime::PageRuntime;
use crate::timers::TimerTask;

const HIGHLIGHT_CLASS: &str = "highlighted";

impl PageRuntime {
    /// Adds a polite live region carrying `message`; it is removed once the
    /// announcement delay passes.
    pub fn announce_to_screen_reader(&mut self, message: &str) {
        let region = self.document.create_element("div");
        self.document.set_attr(region, "aria-live", "polite");
        self.document.set_attr(region, "aria-atomic", "true");
        self.document.set_attr(region, "class", "sr-only");
        self.document.set_text_content(region, message);
        let body = self.document.body();
        if let Err(err) = self.document.append_child(body, region) {
            ui_warn!("Announcement dropped: {err}");
            return;
        }
        let after = Duration::from_millis(self.config.animation.announcement_ms);
        self.timers.schedule(after, TimerTask::RemoveNode(region));
    }

    /// Keeps Tab and Shift+Tab cycling inside `container` and focuses its
    /// first focusable element. Returns false when there is nothing to focus.
    pub fn trap_focus(&mut self, container: NodeId) -> bool {
        let Some(first) = self.document.query_first_within(container, FOCUSABLE) else {
            ui_debug!("Focus trap on {:?} has nothing focusable", container);
            return false;
        };
        if !self.focus_traps.contains(&container) {
            self.focus_traps.push(container);
        }
        self.document.focus(first);
        true
    }

    pub fn release_focus(&mut self, container: NodeId) {
        self.focus_traps.retain(|trap| *trap != container);
    }

    /// Wraps focus at the ends of the innermost trap holding `target`.
    /// Returns true when the default Tab move was replaced.
    pub(crate) fn handle_tab(&mut self, target: NodeId, shift: bool) -> bool {
        let Some(container) = self
            .focus_traps
            .iter()
            .rev()
            .copied()
            .find(|trap| self.document.contains(*trap, target))
        else {
            return false;
        };
        let focusable = self.document.query_within(container, FOCUSABLE);
        let active = self
            .document
            .active_element()
            .and_then(|active| focusable.iter().position(|node| *node == active));
        match focus_trap_target(focusable.len(), active, shift) {
            Some(index) => {
                self.document.focus(focusable[index]);
                true
            }
            None => false,
        }
    }

    /// Moves the `highlighted` class across `items` for arrow keys, focuses
    /// the chosen item on Enter and clears the highlight on Escape.
    pub fn navigate_list(&mut self, items: &[NodeId], key: &str) -> KeyNavigation {
        let current = items
            .iter()
            .position(|item| self.document.has_class(*item, HIGHLIGHT_CLASS));
        let navigation = handle_keyboard_navigation(key, items.len(), current);
        for (index, item) in items.iter().enumerate() {
            self.document
                .set_class_if(*item, HIGHLIGHT_CLASS, navigation.index == Some(index));
        }
        if let Some(selected) = navigation.selected.and_then(|index| items.get(index)) {
            self.document.focus(*selected);
        }
        navigation
    }
}
