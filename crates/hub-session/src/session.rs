use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use hub_api::TechHubApi;
use hub_auth::SessionStore;
use hub_core::{LoginForm, RegisterForm, User};

use crate::notify::Notifier;
use crate::outcome::{Outcome, View};

/// Authentication state held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Startup restore has not run yet.
    #[default]
    Uninitialized,
    /// No session: never logged in, logged out, or the persisted token was rejected.
    Anonymous,
    Authenticated { user: Box<User>, token: String },
}

/// What happened during silent re-authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restore {
    /// Nothing persisted; no request made.
    NoToken,
    /// The persisted token resolved to this profile. Stay on the current view.
    Restored(Box<User>),
    /// The persisted token could not be verified and the session was cleared.
    ///
    /// `rejected` is true when the server refused the token itself (401),
    /// false for any other failure.
    LoggedOut { message: String, rejected: bool },
    /// Restore already ran for this manager.
    AlreadyInitialized,
}

impl Restore {
    #[must_use]
    pub const fn requested_view(&self) -> Option<View> {
        match self {
            Self::LoggedOut { .. } => Some(View::Landing),
            Self::NoToken | Self::Restored(_) | Self::AlreadyInitialized => None,
        }
    }
}

/// Handle to the authenticated-user session.
pub struct SessionManager<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    api: Arc<A>,
    store: SessionStore,
    notifier: Arc<dyn Notifier>,
    state: Mutex<AuthState>,
    global_loading: AtomicBool,
    restore_started: AtomicBool,
}

impl<A> Clone for SessionManager<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: TechHubApi> SessionManager<A> {
    pub fn new(api: Arc<A>, store: SessionStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                store,
                notifier,
                state: Mutex::new(AuthState::Uninitialized),
                global_loading: AtomicBool::new(false),
                restore_started: AtomicBool::new(false),
            }),
        }
    }

    pub(crate) fn api(&self) -> &A {
        &self.inner.api
    }

    pub(crate) fn notifier(&self) -> &dyn Notifier {
        self.inner.notifier.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        crate::lock(&self.inner.state).clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        match &*crate::lock(&self.inner.state) {
            AuthState::Authenticated { user, .. } => Some(User::clone(user)),
            AuthState::Uninitialized | AuthState::Anonymous => None,
        }
    }

    /// Bearer token of the current session.
    ///
    /// This is the only token source the inventory reads; the persisted copy
    /// is consulted once, by [`Self::restore`].
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match &*crate::lock(&self.inner.state) {
            AuthState::Authenticated { token, .. } => Some(token.clone()),
            AuthState::Uninitialized | AuthState::Anonymous => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(
            *crate::lock(&self.inner.state),
            AuthState::Authenticated { .. }
        )
    }

    #[must_use]
    pub fn global_loading(&self) -> bool {
        self.inner.global_loading.load(Ordering::SeqCst)
    }

    pub fn set_global_loading(&self, on: bool) {
        self.inner.global_loading.store(on, Ordering::SeqCst);
    }

    /// Silent re-authentication from the persisted token.
    ///
    /// Runs at most once per manager; later calls return
    /// [`Restore::AlreadyInitialized`] without touching the network.
    pub async fn restore(&self) -> Restore {
        if self.inner.restore_started.swap(true, Ordering::SeqCst) {
            return Restore::AlreadyInitialized;
        }

        let Some(token) = self.inner.store.token() else {
            self.set_state_if_uninitialized(AuthState::Anonymous);
            return Restore::NoToken;
        };

        self.set_global_loading(true);
        let result = self.inner.api.profile(&token).await;
        let restore = match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "session restored");
                *crate::lock(&self.inner.state) = AuthState::Authenticated {
                    user: Box::new(user.clone()),
                    token,
                };
                Restore::Restored(Box::new(user))
            }
            Err(error) => {
                let rejected = error.is_unauthorized();
                if rejected {
                    tracing::info!("persisted token rejected; logging out");
                } else {
                    tracing::warn!(%error, "could not verify persisted session; logging out");
                }
                self.logout();
                Restore::LoggedOut {
                    message: error.user_message(),
                    rejected,
                }
            }
        };
        self.set_global_loading(false);
        restore
    }

    /// Exchange credentials for a session.
    ///
    /// On success the user and token are adopted, persisted, and the dashboard
    /// is requested. On failure nothing changes and an error is notified.
    pub async fn login(
        &self,
        credentials: &LoginForm,
        mut loading: impl FnMut(bool) + Send,
    ) -> Outcome<User> {
        loading(true);
        let outcome = match self.inner.api.create_session(credentials).await {
            Ok(grant) => {
                if let Err(error) = self.inner.store.persist(&grant.token, &grant.user.id) {
                    tracing::warn!(%error, "failed to persist session; it will not survive restart");
                }
                tracing::info!(user_id = %grant.user.id, "logged in");
                *crate::lock(&self.inner.state) = AuthState::Authenticated {
                    user: Box::new(grant.user.clone()),
                    token: grant.token,
                };
                Outcome::redirect(grant.user, View::Dashboard)
            }
            Err(error) => {
                tracing::warn!(%error, "login failed");
                let message = error.user_message();
                self.notifier().error(&message);
                Outcome::failure(message)
            }
        };
        loading(false);
        outcome
    }

    /// Create an account. Does not log in.
    pub async fn register(
        &self,
        form: &RegisterForm,
        mut loading: impl FnMut(bool) + Send,
    ) -> Outcome<User> {
        loading(true);
        let outcome = match self.inner.api.register(form).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "account registered");
                self.notifier().success("Account created");
                Outcome::redirect(user, View::Landing)
            }
            Err(error) => {
                tracing::warn!(%error, "registration failed");
                let message = error.user_message();
                self.notifier().error(&message);
                Outcome::failure(message)
            }
        };
        loading(false);
        outcome
    }

    /// Clear the persisted token and user id and forget the user.
    ///
    /// Idempotent. Always requests the landing view.
    pub fn logout(&self) -> View {
        if let Err(error) = self.inner.store.clear() {
            tracing::warn!(%error, "failed to clear persisted session");
        }
        *crate::lock(&self.inner.state) = AuthState::Anonymous;
        tracing::debug!("session cleared");
        View::Landing
    }

    fn set_state_if_uninitialized(&self, next: AuthState) {
        let mut state = crate::lock(&self.inner.state);
        if *state == AuthState::Uninitialized {
            *state = next;
        }
    }
}
