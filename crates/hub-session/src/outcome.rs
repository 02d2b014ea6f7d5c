/// Views the presentation layer may be asked to show after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Login / landing page.
    Landing,
    /// The authenticated user's dashboard.
    Dashboard,
}

/// Result of a session or inventory operation.
///
/// Failures have already been reported through the notifier by the time the
/// caller sees them; the message is repeated here for callers that want it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success { value: T, redirect: Option<View> },
    Failure { message: String },
}

impl<T> Outcome<T> {
    pub(crate) const fn success(value: T) -> Self {
        Self::Success {
            value,
            redirect: None,
        }
    }

    pub(crate) const fn redirect(value: T, view: View) -> Self {
        Self::Success {
            value,
            redirect: Some(view),
        }
    }

    pub(crate) const fn failure(message: String) -> Self {
        Self::Failure { message }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The view requested on success, if any.
    #[must_use]
    pub const fn requested_view(&self) -> Option<View> {
        match self {
            Self::Success { redirect, .. } => *redirect,
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}
