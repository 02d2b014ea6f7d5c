//! Form payloads sent to the API and their field validation.
//!
//! Validation runs before any network call. Each form reports every failing
//! field at once so the caller can render errors next to the inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::TechStatus;
use crate::errors::CoreError;

const MIN_PASSWORD_LEN: usize = 8;

/// A validation failure on one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All validation failures for a form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// First error reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }

    fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidForm(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Credentials for session creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidForm`] listing every failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::default();
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.push("password", "password is required");
        }
        errors.into_result()
    }
}

/// Payload for user registration.
///
/// `confirm_password` is checked locally and never sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing, default)]
    pub confirm_password: String,
    pub bio: String,
    pub contact: String,
    pub course_module: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidForm`] listing every failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::default();
        check_required(&mut errors, "name", &self.name);
        check_email(&mut errors, &self.email);
        check_password_strength(&mut errors, &self.password);
        if self.confirm_password != self.password {
            errors.push("confirm_password", "passwords do not match");
        }
        check_required(&mut errors, "bio", &self.bio);
        check_required(&mut errors, "contact", &self.contact);
        check_required(&mut errors, "course_module", &self.course_module);
        errors.into_result()
    }
}

/// Payload for adding a technology.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTechForm {
    pub title: String,
    pub status: TechStatus,
}

impl AddTechForm {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidForm`] if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::default();
        check_required(&mut errors, "title", &self.title);
        errors.into_result()
    }

    /// Build the form from raw input, reporting a blank title and an unknown
    /// status label together.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidForm`] listing every failing field.
    pub fn parse(title: &str, status: &str) -> Result<Self, CoreError> {
        let mut errors = ValidationErrors::default();
        check_required(&mut errors, "title", title);
        let status = parse_status(&mut errors, status);
        match status {
            Some(status) if errors.is_empty() => Ok(Self {
                title: title.trim().to_string(),
                status,
            }),
            _ => Err(CoreError::InvalidForm(errors)),
        }
    }
}

/// Payload for editing a technology. Only the status can change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditTechForm {
    pub status: TechStatus,
}

impl EditTechForm {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidForm`] if the status label is unknown.
    pub fn parse(status: &str) -> Result<Self, CoreError> {
        let mut errors = ValidationErrors::default();
        let status = parse_status(&mut errors, status);
        match status {
            Some(status) => Ok(Self { status }),
            None => Err(CoreError::InvalidForm(errors)),
        }
    }
}

fn parse_status(errors: &mut ValidationErrors, raw: &str) -> Option<TechStatus> {
    match raw.parse::<TechStatus>() {
        Ok(status) => Some(status),
        Err(CoreError::Validation(message)) => {
            errors.push("status", message);
            None
        }
        Err(other) => {
            errors.push("status", other.to_string());
            None
        }
    }
}

fn check_required(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{field} is required"));
    }
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.push("email", "email is required");
        return;
    }
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && domain.contains('.')
            && !domain.contains('@')
    });
    if !valid {
        errors.push("email", "email must be a valid address");
    }
}

fn check_password_strength(errors: &mut ValidationErrors, password: &str) {
    if password.is_empty() {
        errors.push("password", "password is required");
        return;
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(
            "password",
            format!("password must have at least {MIN_PASSWORD_LEN} characters"),
        );
    } else if !password.chars().any(char::is_uppercase) {
        errors.push("password", "password must contain an uppercase letter");
    } else if !password.chars().any(char::is_lowercase) {
        errors.push("password", "password must contain a lowercase letter");
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("password", "password must contain a digit");
    } else if password.chars().all(char::is_alphanumeric) {
        errors.push("password", "password must contain a special character");
    }
}
