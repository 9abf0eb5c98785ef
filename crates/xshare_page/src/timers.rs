use std::collections::BTreeMap;
use std::time::Duration;

use xshare_core::{Fade, ToastId};

use crate::dom::NodeId;

/// Work deferred to a later point on the page clock.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerTask {
    ToastExpiry(ToastId),
    FilterDebounce(u64),
    /// Drop a transient element (ripple, screen-reader announcement).
    RemoveNode(NodeId),
    /// End the scale pulse of a like/save button.
    ResetTransform(NodeId),
    /// Re-enable a button that was put in its loading state.
    RestoreButton(NodeId),
    AnimationFrame { node: NodeId, fade: Fade },
}

/// Timers ordered by deadline, ties broken by scheduling order.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u64,
    pending: BTreeMap<(u64, u64), TimerTask>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Delays past the end of the clock saturate at `u64::MAX`.
    pub fn schedule(&mut self, after: Duration, task: TimerTask) {
        let after_ms = u64::try_from(after.as_millis()).unwrap_or(u64::MAX);
        let due = self.now_ms.saturating_add(after_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((due, seq), task);
    }

    /// Pops the earliest timer due at or before `until_ms` and moves the
    /// clock to its deadline.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(u64, TimerTask)> {
        let (&(due, seq), _) = self.pending.first_key_value()?;
        if due > until_ms {
            return None;
        }
        let task = self.pending.remove(&(due, seq))?;
        self.now_ms = self.now_ms.max(due);
        Some((due, task))
    }

    /// Moves the clock forward without firing anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn next_due(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &TimerTask> {
        self.pending.values()
    }
}
