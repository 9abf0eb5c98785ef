use std::time::Duration;

use ui_logging::ui_trace;
use xshare_core::{Fade, FadeDirection};

use crate::dom::NodeId;
use crate::runtime::PageRuntime;
use crate::timers::TimerTask;

impl PageRuntime {
    /// Shows `node` at opacity 0 and raises it to 1 over `duration`
    /// (the configured fade time when `None`).
    pub fn fade_in(&mut self, node: NodeId, duration: Option<Duration>) {
        let fade = Fade::fade_in(self.now_ms(), duration.unwrap_or(self.fade_duration()));
        self.document.set_style(node, "opacity", "0");
        self.document.set_style(node, "display", "block");
        self.schedule_frame(node, fade);
    }

    /// Lowers opacity from its current value to 0, then hides `node`.
    pub fn fade_out(&mut self, node: NodeId, duration: Option<Duration>) {
        let start_opacity = self
            .document
            .style(node, "opacity")
            .and_then(|opacity| opacity.trim().parse().ok())
            .unwrap_or(1.0);
        let fade = Fade::fade_out(
            self.now_ms(),
            duration.unwrap_or(self.fade_duration()),
            start_opacity,
        );
        self.schedule_frame(node, fade);
    }

    pub(crate) fn step_fade(&mut self, node: NodeId, fade: Fade) {
        if !self.document.is_connected(node) {
            ui_trace!("Fade on detached {:?} stopped", node);
            return;
        }
        let frame = fade.frame(self.now_ms());
        self.document
            .set_style(node, "opacity", &format!("{}", frame.opacity));
        if !frame.finished {
            self.schedule_frame(node, fade);
        } else if fade.direction == FadeDirection::Out {
            self.document.set_style(node, "display", "none");
        }
    }

    fn schedule_frame(&mut self, node: NodeId, fade: Fade) {
        let interval = self.config.animation.frame_interval_ms.max(1);
        self.timers.schedule(
            Duration::from_millis(interval),
            TimerTask::AnimationFrame { node, fade },
        );
    }

    fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.config.animation.fade_ms)
    }
}
