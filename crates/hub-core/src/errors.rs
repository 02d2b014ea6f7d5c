//! Cross-cutting error types for TechHub.
//!
//! Domain-specific errors (`ApiError`, `AuthError`, `SessionError`) live in
//! their own crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any TechHub crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A form failed field-level validation.
    #[error("Invalid form: {0}")]
    InvalidForm(crate::forms::ValidationErrors),
}
