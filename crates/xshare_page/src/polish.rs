use std::time::Duration;

use ui_logging::{ui_debug, ui_warn};

use crate::contract::*;
use crate::dom::NodeId;
use crate::runtime::PageRuntime;
use crate::timers::TimerTask;

impl PageRuntime {
    /// Adds the ripple/tooltip/sr-only stylesheet to `<head>` once.
    pub fn inject_styles(&mut self) {
        if self.document.get_element_by_id(STYLESHEET_ID).is_some() {
            return;
        }
        let style = self.document.create_element("style");
        self.document.set_attr(style, "id", STYLESHEET_ID);
        self.document.set_text_content(style, UI_STYLESHEET);
        let head = self.document.head();
        if let Err(err) = self.document.append_child(head, style) {
            ui_warn!("Could not inject stylesheet: {err}");
        }
    }

    /// Dims a submit or `.loading-btn` button and blocks clicks until the
    /// loading delay has passed.
    pub(crate) fn start_loading(&mut self, button: NodeId) {
        let doc = &self.document;
        let eligible =
            doc.attr(button, "type") == Some("submit") || doc.has_class(button, "loading-btn");
        if !eligible {
            return;
        }
        self.document.set_style(button, "opacity", "0.7");
        self.document.set_style(button, "pointer-events", "none");
        let after = Duration::from_millis(self.config.animation.loading_button_ms);
        self.timers.schedule(after, TimerTask::RestoreButton(button));
    }

    pub(crate) fn finish_loading(&mut self, button: NodeId) {
        self.document.set_style(button, "opacity", "1");
        self.document.set_style(button, "pointer-events", "auto");
    }

    /// Spawns a `span.ripple` centred on the click point.
    pub(crate) fn add_ripple(&mut self, button: NodeId, client_x: f64, client_y: f64) {
        let rect = self.document.rect(button);
        let size = rect.width.max(rect.height);
        let x = client_x - rect.left - size / 2.0;
        let y = client_y - rect.top - size / 2.0;

        let ripple = self.document.create_element("span");
        self.document.set_attr(ripple, "class", "ripple");
        self.document.set_style(ripple, "width", &format!("{size}px"));
        self.document.set_style(ripple, "height", &format!("{size}px"));
        self.document.set_style(ripple, "left", &format!("{x}px"));
        self.document.set_style(ripple, "top", &format!("{y}px"));
        if let Err(err) = self.document.append_child(button, ripple) {
            ui_warn!("Ripple not attached: {err}");
            return;
        }
        let after = Duration::from_millis(self.config.animation.ripple_ms);
        self.timers.schedule(after, TimerTask::RemoveNode(ripple));
    }

    pub fn show_tooltip(&mut self, host: NodeId) {
        if !self.document.matches_selector(host, TOOLTIP_HOST) {
            return;
        }
        let text = self.document.attr(host, "data-tooltip").unwrap_or_default().to_string();
        let tooltip = self.document.create_element("div");
        self.document.set_attr(tooltip, "class", "tooltip");
        self.document.set_text_content(tooltip, &text);
        let body = self.document.body();
        if let Err(err) = self.document.append_child(body, tooltip) {
            ui_warn!("Tooltip not attached: {err}");
            return;
        }

        let anchor = self.document.rect(host);
        let own = self.document.rect(tooltip);
        let left = anchor.left + anchor.width / 2.0 - own.width / 2.0;
        let top = anchor.top - own.height - 8.0;
        self.document.set_style(tooltip, "left", &format!("{left}px"));
        self.document.set_style(tooltip, "top", &format!("{top}px"));
    }

    /// Removes the first tooltip on the page, if any.
    pub fn hide_tooltip(&mut self, host: NodeId) {
        if !self.document.matches_selector(host, TOOLTIP_HOST) {
            return;
        }
        if let Some(tooltip) = self.document.query_selector(TOOLTIP) {
            self.document.discard(tooltip);
        }
    }

    /// Scrolls to the element an in-page anchor points at. Returns false
    /// when the anchor has no target.
    pub fn smooth_scroll(&mut self, anchor: NodeId) -> bool {
        let href = self.document.attr(anchor, "href").unwrap_or_default().to_string();
        let Some(target_id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return false;
        };
        match self.document.get_element_by_id(target_id) {
            Some(target) => {
                self.document.scroll_into_view(target);
                true
            }
            None => {
                ui_debug!("Anchor target #{target_id} not found");
                false
            }
        }
    }

    pub fn observe_lazy_images(&mut self) {
        let images = self.document.query_selector_all(LAZY_IMAGE);
        ui_debug!("Observing {} lazy images", images.len());
        self.lazy_images.extend(images);
    }

    /// Swaps `data-src` into `src` the first time an observed image
    /// intersects, then stops observing it.
    pub fn reveal_lazy_image(&mut self, image: NodeId) {
        if !self.lazy_images.remove(&image) {
            return;
        }
        let Some(source) = self.document.attr(image, "data-src").map(str::to_string) else {
            return;
        };
        self.document.set_attr(image, "src", &source);
        self.document.remove_attr(image, "data-src");
    }

    pub fn observed_images(&self) -> usize {
        self.lazy_images.len()
    }
}
