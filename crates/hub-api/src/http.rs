//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so the endpoint methods stay focused on
//! request construction and response mapping.

use serde::Deserialize;

use crate::error::ApiError;

/// Error body shape: `message` is a single string or a list of validation
/// messages.
#[derive(Deserialize)]
struct ErrorBody {
    message: ErrorMessage,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise [`ApiError::Api`] with
/// the message extracted from the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "api returned error status");
    Err(ApiError::Api {
        status: status.as_u16(),
        message: extract_message(&body),
    })
}

/// Pull the human-readable message out of an error body.
///
/// Falls back to the trimmed raw body when it is not the expected JSON shape.
pub fn extract_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: ErrorMessage::One(message),
        }) => message,
        Ok(ErrorBody {
            message: ErrorMessage::Many(messages),
        }) => messages.join("; "),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn extracts_single_message() {
        let body = r#"{"status":"error","message":"Incorrect email / password combination"}"#;
        assert_eq!(
            extract_message(body),
            "Incorrect email / password combination"
        );
    }

    #[test]
    fn joins_message_list() {
        let body = r#"{"status":"error","message":["email is required","password is required"]}"#;
        assert_eq!(
            extract_message(body),
            "email is required; password is required"
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(extract_message("  Bad Gateway \n"), "Bad Gateway");
    }

    #[tokio::test]
    async fn check_response_maps_error_status() {
        let resp = mock_response(401, r#"{"status":"error","message":"Invalid token"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_passes_success() {
        let resp = mock_response(204, "");
        assert!(check_response(resp).await.is_ok());
    }
}
