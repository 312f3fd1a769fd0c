//! Domain layer - The user record and its validation rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod email;
pub mod error;
pub mod user;

pub use constants::*;
pub use email::is_email_valid;
pub use error::{DomainError, DomainResult};
pub use user::User;
