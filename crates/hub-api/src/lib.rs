//! # hub-api
//!
//! HTTP client for the TechHub REST API.
//!
//! | Operation | Method + path | Auth |
//! |---|---|---|
//! | register | `POST /users` | none |
//! | create session | `POST /sessions` | none |
//! | load profile | `GET /profile` | bearer |
//! | add tech | `POST /users/techs` | bearer |
//! | edit tech | `PUT /users/techs/{id}` | bearer |
//! | remove tech | `DELETE /users/techs/{id}` | bearer |
//!
//! [`TechHubApi`] is the seam the session layer is generic over; [`ApiClient`]
//! is the `reqwest` implementation.

mod error;
mod http;

use std::future::Future;
use std::time::Duration;

pub use error::ApiError;
pub use http::extract_message;

use hub_config::ApiConfig;
use hub_core::{AddTechForm, EditTechForm, LoginForm, RegisterForm, SessionGrant, Tech, User};

use crate::http::check_response;

/// Remote operations consumed by the session and tech inventory managers.
pub trait TechHubApi: Send + Sync + 'static {
    fn register(&self, form: &RegisterForm) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn create_session(
        &self,
        credentials: &LoginForm,
    ) -> impl Future<Output = Result<SessionGrant, ApiError>> + Send;

    fn profile(&self, token: &str) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn create_tech(
        &self,
        token: &str,
        form: &AddTechForm,
    ) -> impl Future<Output = Result<Tech, ApiError>> + Send;

    fn update_tech(
        &self,
        token: &str,
        tech_id: &str,
        form: &EditTechForm,
    ) -> impl Future<Output = Result<Tech, ApiError>> + Send;

    fn delete_tech(
        &self,
        token: &str,
        tech_id: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// `reqwest`-backed API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn tech_url(&self, tech_id: &str) -> String {
        self.url(&format!("/users/techs/{}", urlencoding::encode(tech_id)))
    }
}

impl TechHubApi for ApiClient {
    async fn register(&self, form: &RegisterForm) -> Result<User, ApiError> {
        tracing::debug!(email = %form.email, "POST /users");
        let resp = self.http.post(self.url("/users")).json(form).send().await?;
        Ok(check_response(resp).await?.json().await?)
    }

    async fn create_session(&self, credentials: &LoginForm) -> Result<SessionGrant, ApiError> {
        tracing::debug!(email = %credentials.email, "POST /sessions");
        let resp = self
            .http
            .post(self.url("/sessions"))
            .json(credentials)
            .send()
            .await?;
        let grant: SessionGrant = check_response(resp).await?.json().await?;
        if grant.token.is_empty() {
            return Err(ApiError::Parse("session response carried an empty token".into()));
        }
        Ok(grant)
    }

    async fn profile(&self, token: &str) -> Result<User, ApiError> {
        tracing::debug!("GET /profile");
        let resp = self
            .http
            .get(self.url("/profile"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    async fn create_tech(&self, token: &str, form: &AddTechForm) -> Result<Tech, ApiError> {
        tracing::debug!(title = %form.title, "POST /users/techs");
        let resp = self
            .http
            .post(self.url("/users/techs"))
            .bearer_auth(token)
            .json(form)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    async fn update_tech(
        &self,
        token: &str,
        tech_id: &str,
        form: &EditTechForm,
    ) -> Result<Tech, ApiError> {
        tracing::debug!(tech_id, status = %form.status, "PUT /users/techs/{{id}}");
        let resp = self
            .http
            .put(self.tech_url(tech_id))
            .bearer_auth(token)
            .json(form)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    async fn delete_tech(&self, token: &str, tech_id: &str) -> Result<(), ApiError> {
        tracing::debug!(tech_id, "DELETE /users/techs/{{id}}");
        let resp = self
            .http
            .delete(self.tech_url(tech_id))
            .bearer_auth(token)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
