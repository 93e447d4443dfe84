//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation (e.g. malformed input, non-positive qty).
    #[error("validation failed on {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A referenced entity is absent or soft-deleted.
    #[error("{0} not found")]
    NotFound(String),

    /// A unique constraint was violated (item name, inventory per item).
    #[error("{0} already registered")]
    Duplicate(String),

    /// Withdrawal against an item with no inventory record.
    #[error("stock is out cannot perform withdrawal")]
    OutOfStock,

    /// Withdrawal would drive stock below zero.
    #[error("insufficient amount of stock")]
    InsufficientStock,

    /// Lock acquisition timed out or the lock state is unusable.
    #[error("busy: {0}")]
    Busy(String),

    /// Storage-level conflict (e.g. stale row, duplicate id).
    #[error("conflict: {0}")]
    Conflict(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }

    pub fn duplicate(what: impl Into<String>) -> Self {
        Self::Duplicate(what.into())
    }

    pub fn busy(what: impl Into<String>) -> Self {
        Self::Busy(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
