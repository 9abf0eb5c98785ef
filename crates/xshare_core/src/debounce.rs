use std::time::Duration;

/// Trailing-edge debounce bookkeeping.
///
/// Every trigger bumps a generation and hands back a ticket; the caller
/// schedules a timer for the ticket. When a timer fires, only the latest
/// generation settles. Earlier timers are simply ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    pub generation: u64,
    pub delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn trigger(&mut self) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        DebounceTicket {
            generation: self.generation,
            delay: self.delay,
        }
    }

    /// Returns true exactly once, for the timer of the latest trigger.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
