use std::time::Duration;

use ui_logging::{ui_debug, ui_info};
use xshare_core::Severity;

use crate::contract::*;
use crate::dom::NodeId;
use crate::runtime::PageRuntime;
use crate::storage::{save_to_local_storage, SELECTED_ROLE_KEY};
use crate::timers::TimerTask;

impl PageRuntime {
    /// Returns false when the page has no mobile menu.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        let Some(menu) = self.document.get_element_by_id(MOBILE_MENU_ID) else {
            ui_debug!("No #{MOBILE_MENU_ID}; toggle ignored");
            return false;
        };
        self.document.toggle_class(menu, "active");
        true
    }

    pub fn toggle_profile_menu(&mut self) -> bool {
        let Some(menu) = self.document.get_element_by_id(PROFILE_MENU_ID) else {
            ui_debug!("No #{PROFILE_MENU_ID}; toggle ignored");
            return false;
        };
        let shown = self.document.style(menu, "display") == Some("block");
        self.document
            .set_style(menu, "display", if shown { "none" } else { "block" });
        true
    }

    pub(crate) fn close_profile_menu_if_outside(&mut self, target: NodeId) {
        let Some(dropdown) = self.document.query_selector(PROFILE_DROPDOWN) else {
            return;
        };
        let Some(menu) = self.document.get_element_by_id(PROFILE_MENU_ID) else {
            return;
        };
        if !self.document.contains(dropdown, target) {
            self.document.set_style(menu, "display", "none");
        }
    }

    pub fn toggle_notifications(&self) {
        ui_info!("Notifications panel toggled");
    }

    pub fn toggle_like(&mut self, button: NodeId) {
        let liked = self.document.toggle_class(button, "liked");
        if let Some(count) = self.document.query_first_within(button, "span") {
            let current: u64 = self
                .document
                .text_content(count)
                .trim()
                .parse()
                .unwrap_or(0);
            let next = if liked {
                current + 1
            } else {
                current.saturating_sub(1)
            };
            self.document.set_text_content(count, &next.to_string());
        }
        let color = if liked { LIKED_COLOR } else { LIKE_IDLE_COLOR };
        self.document.set_style(button, "color", color);
        self.pulse(button);
    }

    pub fn toggle_save(&mut self, button: NodeId) {
        let saved = self.document.toggle_class(button, "saved");
        let color = if saved { SAVED_COLOR } else { LIKE_IDLE_COLOR };
        self.document.set_style(button, "color", color);
        self.pulse(button);
        if saved {
            self.notify("Added to saved items", Severity::Success);
        } else {
            self.notify("Removed from saved items", Severity::Info);
        }
    }

    fn pulse(&mut self, button: NodeId) {
        self.document.set_style(button, "transform", "scale(1.1)");
        let after = Duration::from_millis(self.config.animation.pulse_ms);
        self.timers.schedule(after, TimerTask::ResetTransform(button));
    }

    /// Shows the dashboard section with id `section` and hides the others.
    /// Returns false when no such section exists.
    pub fn show_section(&mut self, section: &str) -> bool {
        let Some(target) = self.document.get_element_by_id(section) else {
            ui_debug!("No section #{section}");
            return false;
        };
        for other in self.document.query_selector_all(DASHBOARD_SECTION) {
            self.document.set_style(other, "display", "none");
        }
        self.document.set_style(target, "display", "block");

        for link in self.document.query_selector_all(NAV_LINK) {
            let current = self.document.attr(link, "data-section") == Some(section);
            self.document.set_class_if(link, "active", current);
        }
        true
    }

    pub fn open_modal(&mut self) -> bool {
        self.set_modal_display("flex")
    }

    pub fn close_modal(&mut self) -> bool {
        self.set_modal_display("none")
    }

    fn set_modal_display(&mut self, display: &str) -> bool {
        let Some(modal) = self.document.get_element_by_id(ASK_QUESTION_MODAL_ID) else {
            ui_debug!("No #{ASK_QUESTION_MODAL_ID} on this page");
            return false;
        };
        self.document.set_style(modal, "display", display);
        true
    }

    /// Marks the `.role-option` containing `trigger` as selected and stores
    /// the role.
    pub fn select_role(&mut self, trigger: NodeId, role: &str) {
        for option in self.document.query_selector_all(ROLE_OPTION) {
            self.document.remove_class(option, "selected");
        }
        match self.document.closest(trigger, ROLE_OPTION) {
            Some(option) => self.document.add_class(option, "selected"),
            None => ui_debug!("Role trigger is not inside {ROLE_OPTION}"),
        }
        save_to_local_storage(self.store.as_mut(), SELECTED_ROLE_KEY, &role);
        ui_info!("Selected role {role:?}");
    }
}
