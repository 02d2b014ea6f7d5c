use std::sync::Mutex;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-facing message emitted by an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Sink for success and error notifications (toasts, stderr lines, logs).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification {
            kind: NotificationKind::Success,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.notify(Notification {
            kind: NotificationKind::Error,
            message: message.to_string(),
        });
    }
}

/// Notifier that keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        crate::lock(&self.seen).clone()
    }

    #[must_use]
    pub fn count(&self, kind: NotificationKind) -> usize {
        crate::lock(&self.seen)
            .iter()
            .filter(|notification| notification.kind == kind)
            .count()
    }

    /// Message of the most recent notification.
    #[must_use]
    pub fn last_message(&self) -> Option<String> {
        crate::lock(&self.seen)
            .last()
            .map(|notification| notification.message.clone())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        crate::lock(&self.seen).push(notification);
    }
}
