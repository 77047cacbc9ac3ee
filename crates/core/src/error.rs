//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Constructing and cloning entities never fails; errors only arise at the
/// edges (parsing identifiers, downcasting opaque clones).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An opaque clone was downcast to a type it does not hold.
    #[error("type mismatch: clone is not a {expected}")]
    TypeMismatch { expected: &'static str },
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn type_mismatch<T: ?Sized>() -> Self {
        Self::TypeMismatch {
            expected: core::any::type_name::<T>(),
        }
    }
}
