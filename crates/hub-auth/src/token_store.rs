use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::TOKEN_KEY;
use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "techhub-cli";
const SESSION_FILE_NAME: &str = "session.json";
const TOKEN_ENV_VAR: &str = "TECHHUB_AUTH__TOKEN";

/// Durable key-value storage for session values.
///
/// Reads never fail: an unreadable or missing entry is absent. Removing a
/// missing key succeeds.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns `AuthError` if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError` if an existing value cannot be removed.
    fn remove(&self, key: &str) -> Result<(), AuthError>;

    /// Name of the tier that currently holds `key` (for status display).
    fn source_of(&self, key: &str) -> Option<&'static str>;
}

// --- Keyring ---

/// OS keychain backend. Each key is a separate credential under one service.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    /// Service name defaults to `"techhub-cli"`. Override via
    /// `TECHHUB_KEYRING_SERVICE` to keep tests away from real credentials.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: std::env::var("TECHHUB_KEYRING_SERVICE")
                .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string()),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&self.service, key).map_err(|e| AuthError::KeyringError(e.to_string()))
    }
}

impl KeyValueStore for KeyringStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entry(key)
            .ok()?
            .get_password()
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }

    fn source_of(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(|_| "keyring")
    }
}

// --- File ---

/// JSON object file (`session.json`) holding every key.
///
/// The directory is created `0700` and the file written `0600` on unix.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE_NAME),
        }
    }

    /// File store under `~/.techhub`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the home directory is unknown.
    pub fn in_home() -> Result<Self, AuthError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(".techhub")))
            .ok_or_else(|| {
                AuthError::TokenStoreError(
                    "home directory not found — cannot store credentials".into(),
                )
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&content).unwrap_or_else(|error| {
            tracing::warn!(%error, path = %self.path.display(), "ignoring unreadable session file");
            BTreeMap::new()
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), AuthError> {
        if map.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(|e| {
                    AuthError::TokenStoreError(format!(
                        "failed to delete {}: {e}",
                        self.path.display()
                    ))
                })?;
            }
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let body = serde_json::to_string_pretty(map)
            .map_err(|e| AuthError::TokenStoreError(format!("encode session file: {e}")))?;
        fs::write(&self.path, body).map_err(|e| {
            AuthError::TokenStoreError(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map()
            .remove(key)
            .filter(|value| !value.trim().is_empty())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let mut map = self.read_map();
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }

    fn source_of(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(|_| "file")
    }
}

// --- System (keyring → env → file) ---

/// Default backend: keyring first, falling back to the file on keyring failure.
///
/// Reads of the token key also consult `TECHHUB_AUTH__TOKEN` between the two
/// tiers, for CI and headless use.
#[derive(Debug, Clone)]
pub struct SystemStore {
    keyring: KeyringStore,
    file: FileStore,
}

impl SystemStore {
    #[must_use]
    pub const fn new(keyring: KeyringStore, file: FileStore) -> Self {
        Self { keyring, file }
    }

    fn env_token(key: &str) -> Option<String> {
        if key != TOKEN_KEY {
            return None;
        }
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.is_empty())
    }
}

impl KeyValueStore for SystemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.keyring
            .get(key)
            .or_else(|| Self::env_token(key))
            .or_else(|| self.file.get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        match self.keyring.set(key, value) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, key, "keyring store failed; falling back to file");
                self.file.set(key, value)
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        // Keyring may be unavailable; the file tier still has to be cleared.
        if let Err(error) = self.keyring.remove(key) {
            tracing::debug!(%error, key, "keyring delete failed");
        }
        self.file.remove(key)
    }

    fn source_of(&self, key: &str) -> Option<&'static str> {
        if self.keyring.get(key).is_some() {
            return Some("keyring");
        }
        if Self::env_token(key).is_some() {
            return Some("env");
        }
        self.file.source_of(key)
    }
}

// --- Memory ---

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }

    fn source_of(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(|_| "memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::USER_ID_KEY;

    #[test]
    fn file_store_set_get_remove_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path());

        store.set(TOKEN_KEY, "jwt_abc123").expect("set token");
        store.set(USER_ID_KEY, "u-1").expect("set user id");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt_abc123"));
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("u-1"));

        store.remove(TOKEN_KEY).expect("remove token");
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.path().exists(), "user id still stored");

        store.remove(USER_ID_KEY).expect("remove user id");
        assert!(!store.path().exists(), "empty store deletes the file");
    }

    #[cfg(unix)]
    #[test]
    fn file_store_writes_owner_only_file() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path().join("nested"));
        store.set(TOKEN_KEY, "jwt").expect("set");

        let mode = fs::metadata(store.path())
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "session file should be 0600");
    }

    #[test]
    fn file_store_remove_missing_key_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path());
        assert!(store.remove(TOKEN_KEY).is_ok());
        assert!(store.remove(TOKEN_KEY).is_ok());
    }

    #[test]
    fn file_store_ignores_blank_values() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path());
        store.set(TOKEN_KEY, "   ").expect("set");
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn file_store_treats_corrupt_file_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path());
        fs::write(store.path(), "{not json").expect("write");
        assert!(store.get(TOKEN_KEY).is_none());
        store.set(TOKEN_KEY, "fresh").expect("overwrite corrupt file");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("fresh"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "t")]);
        assert_eq!(store.source_of(TOKEN_KEY), Some("memory"));
        store.remove(TOKEN_KEY).expect("remove");
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.source_of(TOKEN_KEY).is_none());
    }
}
