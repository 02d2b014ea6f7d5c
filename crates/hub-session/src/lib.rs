//! # hub-session
//!
//! The two state holders of the TechHub client:
//!
//! - [`SessionManager`] owns the authenticated user and token, restores a
//!   persisted session once at startup, and runs login, registration and
//!   logout.
//! - [`TechInventoryManager`] owns the local copy of the user's technologies,
//!   mirrors successful add/edit/remove calls into it, and tracks which dialog
//!   is open and which tech is selected.
//!
//! Both are cheap cloneable handles meant to be built once and passed to
//! whatever needs them. Operations never return errors: they emit a
//! notification, run their cleanup, and report an [`Outcome`] the presentation
//! layer can use to decide where to go next.

mod error;
mod inventory;
mod loading;
mod notify;
mod outcome;
mod session;

pub use error::SessionError;
pub use inventory::TechInventoryManager;
pub use loading::LoadingFlag;
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier};
pub use outcome::{Outcome, View};
pub use session::{AuthState, Restore, SessionManager};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
