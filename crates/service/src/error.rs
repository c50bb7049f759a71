//! Typed error enum for the service layer.
//!
//! Every failure the service raises is classified into exactly one
//! [`FailureKind`]; the HTTP layer maps kinds to status codes and never has to
//! inspect individual variants.

use std::fmt;

use employee_registry_storage::StorageError;
use thiserror::Error;

/// How an employee lookup was keyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(i64),
    Email(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "ID: {id}"),
            Self::Email(email) => write!(f, "email: {email}"),
        }
    }
}

/// Service-layer error for employee operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No employee matched the lookup.
    #[error("Employee not found with {0}")]
    NotFound(Lookup),

    /// Email is empty or does not match the address pattern.
    #[error("The email address '{email}' is not valid")]
    InvalidEmail { email: String },

    /// Another employee already uses this email.
    #[error("An employee with email {email} already exists")]
    DuplicateEmail { email: String },

    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

/// Closed classification of service failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    InvalidEmail,
    /// Uniqueness or another request-level rule was violated.
    BusinessRule,
    /// Anything else; details must not reach the client.
    Unclassified,
}

impl ServiceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound(_) => FailureKind::NotFound,
            Self::InvalidEmail { .. } => FailureKind::InvalidEmail,
            Self::DuplicateEmail { .. } => FailureKind::BusinessRule,
            Self::Storage(e) if e.is_duplicate() => FailureKind::BusinessRule,
            Self::Storage(_) => FailureKind::Unclassified,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        match self {
            Self::DuplicateEmail { .. } => true,
            Self::Storage(e) => e.is_duplicate(),
            _ => false,
        }
    }

    pub(crate) fn not_found_id(id: i64) -> Self {
        Self::NotFound(Lookup::Id(id))
    }
}
