//! # hub-auth
//!
//! Durable storage for the session token and the current user id.
//!
//! Both values live in a key-value store under fixed keys ([`TOKEN_KEY`],
//! [`USER_ID_KEY`]). Backends: OS keychain (`keyring`) with file fallback, a
//! `0600` credentials file, and an in-memory map for tests. [`SessionStore`]
//! is the typed facade the session layer talks to.

pub mod error;
pub mod expiry;
pub mod session_store;
pub mod token_store;

pub use error::AuthError;
pub use expiry::decode_expiry;
pub use session_store::SessionStore;
pub use token_store::{FileStore, KeyValueStore, KeyringStore, MemoryStore, SystemStore};

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "@TOKEN";

/// Key under which the authenticated user's id is persisted.
pub const USER_ID_KEY: &str = "@USERID";
