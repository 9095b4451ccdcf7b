//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with contacts and the directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The contact has no phone equal to the given value
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DirectoryError {
    /// Whether this is one of the "not found" kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::PhoneNotFound(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
