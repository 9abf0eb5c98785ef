use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Opacity at one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    pub opacity: f64,
    pub finished: bool,
}

/// A time-based opacity transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub direction: FadeDirection,
    pub started_at_ms: u64,
    pub duration: Duration,
    pub start_opacity: f64,
}

impl Fade {
    pub fn fade_in(now_ms: u64, duration: Duration) -> Self {
        Self {
            direction: FadeDirection::In,
            started_at_ms: now_ms,
            duration,
            start_opacity: 0.0,
        }
    }

    pub fn fade_out(now_ms: u64, duration: Duration, start_opacity: f64) -> Self {
        Self {
            direction: FadeDirection::Out,
            started_at_ms: now_ms,
            duration,
            start_opacity: start_opacity.clamp(0.0, 1.0),
        }
    }

    /// Elapsed fraction clamped to `0.0..=1.0`. A zero duration is done at once.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let duration_ms = self.duration.as_millis() as f64;
        if duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_at_ms) as f64;
        (elapsed / duration_ms).min(1.0)
    }

    pub fn frame(&self, now_ms: u64) -> FadeFrame {
        let progress = self.progress(now_ms);
        let opacity = match self.direction {
            FadeDirection::In => progress,
            FadeDirection::Out => self.start_opacity * (1.0 - progress),
        };
        FadeFrame {
            opacity,
            finished: progress >= 1.0,
        }
    }
}
