use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::TechStatus;

/// A single skill on a user's profile.
///
/// Server responses may carry extra fields (e.g. the owning `user` on create);
/// they are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tech {
    pub id: String,
    pub title: String,
    pub status: TechStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The authenticated user's identity and profile.
///
/// Registration responses omit `techs` and `works`; both default to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub course_module: String,
    pub bio: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub works: Vec<String>,
    #[serde(default)]
    pub techs: Vec<Tech>,
}

/// Body returned by session creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionGrant {
    pub user: User,
    pub token: String,
}
