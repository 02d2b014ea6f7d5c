//! Session lifecycle: login, registration, logout, and startup restore.

mod common;

use common::{Harness, PASSWORD, TOKEN, credentials, tech, user};
use hub_auth::{MemoryStore, SessionStore, TOKEN_KEY, USER_ID_KEY};
use hub_core::{RegisterForm, TechStatus};
use hub_session::{AuthState, LoadingFlag, NotificationKind, Restore, View};
use pretty_assertions::assert_eq;

fn register_form(email: &str) -> RegisterForm {
    RegisterForm {
        name: "Grace".into(),
        email: email.into(),
        password: PASSWORD.into(),
        confirm_password: PASSWORD.into(),
        bio: "bio".into(),
        contact: "contact".into(),
        course_module: "Primeiro módulo".into(),
    }
}

fn seeded_store(token: &str) -> SessionStore {
    SessionStore::new(MemoryStore::with_entries([
        (TOKEN_KEY, token),
        (USER_ID_KEY, "u-1"),
    ]))
}

#[tokio::test]
async fn login_with_valid_credentials_populates_session() {
    let h = Harness::new(user(vec![]));
    let loading = LoadingFlag::new();
    let mut transitions = Vec::new();
    let mut record = loading.setter();

    let outcome = h
        .session
        .login(&credentials(PASSWORD), |on| {
            transitions.push(on);
            record(on);
        })
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.requested_view(), Some(View::Dashboard));
    assert_eq!(transitions, vec![true, false]);
    assert!(!loading.get());
    assert_eq!(h.session.user().map(|u| u.id), Some("u-1".to_string()));
    assert_eq!(h.session.token().as_deref(), Some(TOKEN));
    assert_eq!(h.store.token().as_deref(), Some(TOKEN));
    assert_eq!(h.store.user_id().as_deref(), Some("u-1"));
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn login_with_invalid_credentials_leaves_session_absent() {
    let h = Harness::new(user(vec![]));
    let loading = LoadingFlag::new();

    let outcome = h
        .session
        .login(&credentials("wrong"), loading.setter())
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.requested_view(), None);
    assert!(!loading.get());
    assert!(h.session.user().is_none());
    assert!(h.store.token().is_none());
    assert_eq!(h.notifier.count(NotificationKind::Error), 1);
    assert_eq!(
        h.notifier.last_message().as_deref(),
        Some("Incorrect email / password combination")
    );
}

#[tokio::test]
async fn failed_login_keeps_existing_session() {
    let h = Harness::logged_in(user(vec![])).await;
    let outcome = h.session.login(&credentials("wrong"), |_| {}).await;
    assert!(!outcome.is_success());
    assert_eq!(h.session.token().as_deref(), Some(TOKEN));
    assert_eq!(h.store.token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn register_notifies_and_does_not_log_in() {
    let h = Harness::new(user(vec![]));
    let loading = LoadingFlag::new();

    let outcome = h
        .session
        .register(&register_form("grace@example.com"), loading.setter())
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.requested_view(), Some(View::Landing));
    assert!(!loading.get());
    assert!(!h.session.is_authenticated());
    assert!(h.store.token().is_none());
    assert_eq!(h.notifier.count(NotificationKind::Success), 1);
}

#[tokio::test]
async fn register_failure_notifies_error() {
    let h = Harness::new(user(vec![]));
    let outcome = h
        .session
        .register(&register_form("ada@example.com"), |_| {})
        .await;

    assert_eq!(outcome.failure_message(), Some("Email already exists"));
    assert_eq!(h.notifier.count(NotificationKind::Error), 1);
    assert_eq!(h.notifier.count(NotificationKind::Success), 0);
}

#[tokio::test]
async fn restore_with_valid_token_adopts_profile_once() {
    let profile = user(vec![tech("t-1", "Rust", TechStatus::Advanced)]);
    let h = Harness::with_store(profile.clone(), seeded_store(TOKEN));

    let first = h.session.restore().await;
    assert_eq!(first, Restore::Restored(Box::new(profile.clone())));
    assert_eq!(first.requested_view(), None);
    assert_eq!(h.session.user(), Some(profile));
    assert!(!h.session.global_loading());

    let second = h.session.restore().await;
    assert_eq!(second, Restore::AlreadyInitialized);

    // Clones share the guard.
    let clone = h.session.clone();
    assert_eq!(clone.restore().await, Restore::AlreadyInitialized);
    assert_eq!(h.api.count("profile"), 1);
}

#[tokio::test]
async fn restore_with_rejected_token_logs_out() {
    let h = Harness::with_store(user(vec![]), seeded_store("jwt-expired"));

    let restore = h.session.restore().await;

    assert_eq!(
        restore,
        Restore::LoggedOut {
            message: "Invalid token".into(),
            rejected: true,
        }
    );
    assert_eq!(restore.requested_view(), Some(View::Landing));
    assert!(h.session.user().is_none());
    assert_eq!(h.session.state(), AuthState::Anonymous);
    assert!(h.store.token().is_none());
    assert!(h.store.user_id().is_none());
    assert!(!h.session.global_loading());
}

#[tokio::test]
async fn restore_transport_failure_is_treated_like_rejection() {
    let h = Harness::with_store(user(vec![]), seeded_store(TOKEN));
    h.api.fail("profile", 503, "Service Unavailable");

    let restore = h.session.restore().await;

    assert_eq!(
        restore,
        Restore::LoggedOut {
            message: "Service Unavailable".into(),
            rejected: false,
        }
    );
    assert!(h.store.token().is_none());
    assert_eq!(restore.requested_view(), Some(View::Landing));
}

#[tokio::test]
async fn restore_without_token_makes_no_request() {
    let h = Harness::new(user(vec![]));

    assert_eq!(h.session.state(), AuthState::Uninitialized);
    assert_eq!(h.session.restore().await, Restore::NoToken);
    assert_eq!(h.session.state(), AuthState::Anonymous);
    assert!(h.api.calls().is_empty());
    assert!(!h.session.global_loading());
}

#[tokio::test]
async fn logout_twice_is_idempotent() {
    let h = Harness::logged_in(user(vec![])).await;

    assert_eq!(h.session.logout(), View::Landing);
    let after_first = (h.session.state(), h.store.token(), h.store.user_id());

    assert_eq!(h.session.logout(), View::Landing);
    let after_second = (h.session.state(), h.store.token(), h.store.user_id());

    assert_eq!(after_first, after_second);
    assert_eq!(after_second.0, AuthState::Anonymous);
    assert!(after_second.1.is_none());
}

#[tokio::test]
async fn global_loading_is_settable() {
    let h = Harness::new(user(vec![]));
    h.session.set_global_loading(true);
    assert!(h.session.global_loading());
    h.session.set_global_loading(false);
    assert!(!h.session.global_loading());
}
