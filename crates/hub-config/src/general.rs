//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_dashboard_after_login() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Render the dashboard after a successful login.
    #[serde(default = "default_dashboard_after_login")]
    pub dashboard_after_login: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            dashboard_after_login: default_dashboard_after_login(),
        }
    }
}
