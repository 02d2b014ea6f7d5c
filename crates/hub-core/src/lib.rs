//! # hub-core
//!
//! Core types shared across all TechHub crates:
//! - Entity structs for the user profile and its technologies
//! - The fixed proficiency labels used on the wire
//! - Form payloads sent to the API, with upstream field validation
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod forms;

pub use entities::{SessionGrant, Tech, User};
pub use enums::TechStatus;
pub use errors::CoreError;
pub use forms::{AddTechForm, EditTechForm, FieldError, LoginForm, RegisterForm, ValidationErrors};
