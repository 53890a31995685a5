//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Validation failures carry the name of the offending query parameter so the
//! API layer can report it back to the caller. A missing trade is a distinct
//! [`ApplicationError::NotFound`], never an empty success.

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::traits::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A request parameter failed its type or range constraint.
    #[error("invalid value for '{parameter}': {message}")]
    Validation {
        /// Wire name of the offending parameter.
        parameter: String,
        /// What was wrong with it.
        message: String,
    },

    /// The requested resource does not exist.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind, e.g. `Trade`.
        resource: &'static str,
        /// Identifier that was looked up.
        id: String,
    },

    /// Domain error.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    /// Creates a validation error for a named parameter.
    #[must_use]
    pub fn validation(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Creates a not-found error for a trade ID.
    #[must_use]
    pub fn trade_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: "Trade",
            id: id.into(),
        }
    }

    /// Returns the offending parameter name for validation errors.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::Validation { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
