//! Proficiency status for a technology.
//!
//! The API speaks fixed Portuguese labels; the enum keeps them in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Proficiency level of a technology on a user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechStatus {
    #[serde(rename = "Iniciante")]
    Beginner,
    #[serde(rename = "Intermediário")]
    Intermediate,
    #[serde(rename = "Avançado")]
    Advanced,
}

impl TechStatus {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Return the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Iniciante",
            Self::Intermediate => "Intermediário",
            Self::Advanced => "Avançado",
        }
    }
}

impl fmt::Display for TechStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TechStatus {
    type Err = CoreError;

    /// Accepts the wire labels verbatim or the English names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(status) = Self::ALL.into_iter().find(|status| status.as_str() == trimmed) {
            return Ok(status);
        }
        match trimmed.to_lowercase().as_str() {
            "iniciante" | "beginner" => Ok(Self::Beginner),
            "intermediário" | "intermediario" | "intermediate" => Ok(Self::Intermediate),
            "avançado" | "avancado" | "advanced" => Ok(Self::Advanced),
            _ => Err(CoreError::Validation(format!(
                "unknown tech status '{trimmed}' (expected one of: Iniciante, Intermediário, Avançado)"
            ))),
        }
    }
}
