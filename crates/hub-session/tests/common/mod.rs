//! In-memory `TechHubApi` and fixtures shared by the session tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use hub_api::{ApiError, TechHubApi};
use hub_auth::{MemoryStore, SessionStore};
use hub_core::{
    AddTechForm, EditTechForm, LoginForm, RegisterForm, SessionGrant, Tech, TechStatus, User,
};
use hub_session::{RecordingNotifier, SessionManager};

pub const PASSWORD: &str = "Secret#123";
pub const TOKEN: &str = "jwt-valid";

pub fn tech(id: &str, title: &str, status: TechStatus) -> Tech {
    let at = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();
    Tech {
        id: id.into(),
        title: title.into(),
        status,
        created_at: at,
        updated_at: at,
    }
}

pub fn user(techs: Vec<Tech>) -> User {
    let at = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();
    User {
        id: "u-1".into(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
        course_module: "Primeiro módulo".into(),
        bio: "bio".into(),
        contact: "contact".into(),
        created_at: at,
        updated_at: at,
        avatar_url: None,
        works: Vec::new(),
        techs,
    }
}

pub fn credentials(password: &str) -> LoginForm {
    LoginForm {
        email: "ada@example.com".into(),
        password: password.into(),
    }
}

/// Scripted API: one known user, one valid token.
pub struct FakeApi {
    user: User,
    calls: Mutex<Vec<&'static str>>,
    failures: Mutex<HashMap<&'static str, (u16, String)>>,
    delays: Mutex<HashMap<String, Duration>>,
    next_id: AtomicUsize,
}

impl FakeApi {
    pub fn new(user: User) -> Self {
        Self {
            user,
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    /// Make `operation` answer with an API error.
    pub fn fail(&self, operation: &'static str, status: u16, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(operation, (status, message.to_string()));
    }

    /// Delay every request that targets `tech_id`.
    pub fn delay(&self, tech_id: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(tech_id.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls().iter().filter(|call| **call == operation).count()
    }

    fn enter(&self, operation: &'static str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(operation);
        match self.failures.lock().unwrap().get(operation) {
            Some((status, message)) => Err(ApiError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn authorize(token: &str) -> Result<(), ApiError> {
        if token == TOKEN {
            Ok(())
        } else {
            Err(ApiError::Api {
                status: 401,
                message: "Invalid token".into(),
            })
        }
    }

    async fn wait_for(&self, tech_id: &str) {
        let delay = self.delays.lock().unwrap().get(tech_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl TechHubApi for FakeApi {
    async fn register(&self, form: &RegisterForm) -> Result<User, ApiError> {
        self.enter("register")?;
        if form.email == self.user.email {
            return Err(ApiError::Api {
                status: 409,
                message: "Email already exists".into(),
            });
        }
        Ok(User {
            id: "u-new".into(),
            name: form.name.clone(),
            email: form.email.clone(),
            techs: Vec::new(),
            ..self.user.clone()
        })
    }

    async fn create_session(&self, credentials: &LoginForm) -> Result<SessionGrant, ApiError> {
        self.enter("create_session")?;
        if credentials.email != self.user.email || credentials.password != PASSWORD {
            return Err(ApiError::Api {
                status: 401,
                message: "Incorrect email / password combination".into(),
            });
        }
        Ok(SessionGrant {
            user: self.user.clone(),
            token: TOKEN.into(),
        })
    }

    async fn profile(&self, token: &str) -> Result<User, ApiError> {
        self.enter("profile")?;
        Self::authorize(token)?;
        Ok(self.user.clone())
    }

    async fn create_tech(&self, token: &str, form: &AddTechForm) -> Result<Tech, ApiError> {
        self.enter("create_tech")?;
        Self::authorize(token)?;
        let id = format!("t-new-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        Ok(tech(&id, &form.title, form.status))
    }

    async fn update_tech(
        &self,
        token: &str,
        tech_id: &str,
        form: &EditTechForm,
    ) -> Result<Tech, ApiError> {
        self.enter("update_tech")?;
        Self::authorize(token)?;
        self.wait_for(tech_id).await;
        Ok(tech(tech_id, "from-server", form.status))
    }

    async fn delete_tech(&self, token: &str, tech_id: &str) -> Result<(), ApiError> {
        self.enter("delete_tech")?;
        Self::authorize(token)?;
        self.wait_for(tech_id).await;
        Ok(())
    }
}

/// Everything a test needs to drive a session.
pub struct Harness {
    pub api: Arc<FakeApi>,
    pub store: SessionStore,
    pub notifier: Arc<RecordingNotifier>,
    pub session: SessionManager<FakeApi>,
}

impl Harness {
    pub fn new(user: User) -> Self {
        Self::with_store(user, SessionStore::new(MemoryStore::new()))
    }

    pub fn with_store(user: User, store: SessionStore) -> Self {
        let api = Arc::new(FakeApi::new(user));
        let notifier = Arc::new(RecordingNotifier::new());
        let session = SessionManager::new(Arc::clone(&api), store.clone(), notifier.clone());
        Self {
            api,
            store,
            notifier,
            session,
        }
    }

    /// Harness already logged in.
    pub async fn logged_in(user: User) -> Self {
        let harness = Self::new(user);
        let outcome = harness
            .session
            .login(&credentials(PASSWORD), |_| {})
            .await;
        assert!(outcome.is_success(), "login should succeed: {outcome:?}");
        harness
    }
}
