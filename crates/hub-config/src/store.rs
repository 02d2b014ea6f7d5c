//! Session persistence settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the session token and user id are kept between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// OS keychain, falling back to the credentials file.
    #[default]
    Auto,
    /// OS keychain only.
    Keyring,
    /// Credentials file only.
    File,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Directory holding `session.json`. Defaults to `~/.techhub`.
    #[serde(default)]
    pub dir: String,
}

impl StoreConfig {
    /// Resolve the directory for the file backend.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            dirs::home_dir().map(|home| home.join(".techhub"))
        } else {
            Some(PathBuf::from(self.dir.trim()))
        }
    }
}
