use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    token_source: Option<&'static str>,
    expires_at: Option<String>,
    expired: Option<bool>,
    note: Option<&'static str>,
}

/// Report what is stored locally. Makes no network call.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = status(
        ctx.store.token().as_deref(),
        ctx.store.user_id(),
        ctx.store.token_source(),
        Utc::now(),
    );
    output(&response, flags.format)
}

fn status(
    token: Option<&str>,
    user_id: Option<String>,
    token_source: Option<&'static str>,
    now: DateTime<Utc>,
) -> AuthStatusResponse {
    let expiry = token.and_then(|token| match hub_auth::decode_expiry(token) {
        Ok(expiry) => Some(expiry),
        Err(error) => {
            tracing::debug!(%error, "stored token has no readable expiry");
            None
        }
    });

    AuthStatusResponse {
        authenticated: token.is_some() && expiry.is_none_or(|expiry| expiry > now),
        user_id,
        token_source,
        expires_at: expiry.map(|expiry| expiry.to_rfc3339()),
        expired: expiry.map(|expiry| expiry <= now),
        note: (token_source == Some("env"))
            .then_some("token comes from TECHHUB_AUTH__TOKEN; `techhub auth logout` does not clear it"),
    }
}
