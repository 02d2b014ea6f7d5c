use std::sync::Arc;

use crate::error::AuthError;
use crate::token_store::KeyValueStore;
use crate::{TOKEN_KEY, USER_ID_KEY};

/// Typed view over the persisted session entries.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl SessionStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.get(TOKEN_KEY)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.inner.get(USER_ID_KEY)
    }

    /// Which tier currently holds the token.
    #[must_use]
    pub fn token_source(&self) -> Option<&'static str> {
        self.inner.source_of(TOKEN_KEY)
    }

    /// Persist the token and the id of the user it belongs to.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if either entry cannot be written.
    pub fn persist(&self, token: &str, user_id: &str) -> Result<(), AuthError> {
        self.inner.set(TOKEN_KEY, token)?;
        self.inner.set(USER_ID_KEY, user_id)
    }

    /// Remove both entries. Safe to call when nothing is stored.
    ///
    /// Both removals are attempted even if the first fails.
    ///
    /// # Errors
    ///
    /// Returns the first removal error.
    pub fn clear(&self) -> Result<(), AuthError> {
        let user_id = self.inner.remove(USER_ID_KEY);
        let token = self.inner.remove(TOKEN_KEY);
        user_id.and(token)
    }
}
