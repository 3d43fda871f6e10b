//! # Notification Center
//!
//! Transient success/error toasts.
//!
//! Toasts auto-dismiss after a fixed TTL and can also be dismissed
//! manually. The sweep is driven by the host's tick (it passes the
//! current instant) so tests control time explicitly — there is no
//! background timer.

use std::time::{Duration, Instant};

use serde::Serialize;
use ts_rs::TS;
use tracing::debug;

/// How long a toast stays up before auto-dismissal.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One live toast.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    created: Instant,
}

/// The queue of live toasts, newest last.
#[derive(Debug, Clone)]
pub struct Notifier {
    toasts: Vec<Notification>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Notifier::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Notifier {
            toasts: Vec::new(),
            ttl: NOTIFICATION_TTL,
        }
    }

    #[cfg(test)]
    fn with_ttl(ttl: Duration) -> Self {
        Notifier {
            toasts: Vec::new(),
            ttl,
        }
    }

    /// Raises a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    /// Raises an error toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        debug!(?kind, %message, "notification raised");
        self.toasts.push(Notification {
            kind,
            message,
            created: Instant::now(),
        });
    }

    /// Drops every toast older than the TTL.
    pub fn sweep(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.duration_since(t.created) < ttl);
    }

    /// Manually dismisses one toast by position.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    /// Live toasts, oldest first.
    pub fn active(&self) -> &[Notification] {
        &self.toasts
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
