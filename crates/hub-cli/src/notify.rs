use hub_session::{Notification, NotificationKind, Notifier};

/// Prints notifications to stderr, one line each.
///
/// Errors are always shown; successes are dropped under `--quiet`.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    quiet: bool,
}

impl TerminalNotifier {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn line(&self, notification: &Notification) -> Option<String> {
        match notification.kind {
            NotificationKind::Success if self.quiet => None,
            NotificationKind::Success => Some(format!("ok: {}", notification.message)),
            NotificationKind::Error => Some(format!("error: {}", notification.message)),
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        if let Some(line) = self.line(&notification) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use hub_session::{Notification, NotificationKind};

    use super::TerminalNotifier;

    fn notification(kind: NotificationKind) -> Notification {
        Notification {
            kind,
            message: "Technology added".into(),
        }
    }

    #[test]
    fn prefixes_by_kind() {
        let notifier = TerminalNotifier::new(false);
        assert_eq!(
            notifier.line(&notification(NotificationKind::Success)).as_deref(),
            Some("ok: Technology added")
        );
        assert_eq!(
            notifier.line(&notification(NotificationKind::Error)).as_deref(),
            Some("error: Technology added")
        );
    }

    #[test]
    fn quiet_keeps_errors_only() {
        let notifier = TerminalNotifier::new(true);
        assert!(notifier.line(&notification(NotificationKind::Success)).is_none());
        assert!(notifier.line(&notification(NotificationKind::Error)).is_some());
    }
}
