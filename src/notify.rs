//! User-facing notifications
//!
//! Toast-style, fire-and-forget messages. The core never renders anything
//! itself; presentation is injected through the `Notifier` trait so tests
//! can record exactly what was surfaced.

use std::sync::{Arc, Mutex};

use serde::Serialize;

/// Visual flavor of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single transient message shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Notification presenter
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default presenter that routes notifications into the log output
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!("{}: {}", notification.title, notification.description);
            }
            NotificationKind::Error => {
                tracing::warn!("{}: {}", notification.title, notification.description);
            }
        }
    }
}

/// Presenter that records every notification, for assertions in tests
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_captures_in_order() {
        let notifier = RecordingNotifier::new();

        notifier.notify(Notification::success("Saved", "All good"));
        notifier.notify(Notification::error("Failed", "Not so good"));

        let seen = notifier.notifications();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, "Saved");
        assert_eq!(seen[0].kind, NotificationKind::Success);
        assert_eq!(seen[1].kind, NotificationKind::Error);
    }
}
