use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parses a severity tag. Unknown tags fall back to `Info`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Banner background colour.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",
            Severity::Success => "#10b981",
            Severity::Warning => "#f59e0b",
            Severity::Error => "#ef4444",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What happens to already visible toasts when a new one arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToastPolicy {
    /// Remove every visible toast before showing the new one.
    #[default]
    Replace,
    /// Keep older toasts; they expire on their own timers.
    Stack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message: String,
    pub severity: Severity,
    /// `None` uses the default toast timeout.
    pub timeout: Option<Duration>,
}

impl NotificationRequest {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub created_at_ms: u64,
    pub timeout: Duration,
}

/// The set of toasts currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastCenter {
    policy: ToastPolicy,
    default_timeout: Duration,
    next_id: ToastId,
    active: Vec<Notification>,
}

impl ToastCenter {
    pub fn new(policy: ToastPolicy, default_timeout: Duration) -> Self {
        Self {
            policy,
            default_timeout,
            next_id: 1,
            active: Vec::new(),
        }
    }

    /// Adds a toast and returns a copy of it. Under `ToastPolicy::Replace`
    /// every previously active toast is dropped first.
    pub fn push(&mut self, request: NotificationRequest, now_ms: u64) -> Notification {
        if self.policy == ToastPolicy::Replace {
            self.active.clear();
        }
        let id = self.next_id;
        self.next_id += 1;
        let notification = Notification {
            id,
            message: request.message,
            severity: request.severity,
            created_at_ms: now_ms,
            timeout: request.timeout.unwrap_or(self.default_timeout),
        };
        self.active.push(notification.clone());
        notification
    }

    /// Removes a toast. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.active.len();
        self.active.retain(|toast| toast.id != id);
        self.active.len() != before
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn policy(&self) -> ToastPolicy {
        self.policy
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(ToastPolicy::default(), Duration::from_millis(3000))
    }
}
