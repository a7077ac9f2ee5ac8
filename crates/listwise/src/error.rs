//! Error types for the listwise crate.
//!
//! Evaluation itself is infallible; these errors surface only from the
//! opt-in diagnostics ([`ListQuery::check_fields`]) and from parsing.
//!
//! [`ListQuery::check_fields`]: crate::ListQuery::check_fields

use thiserror::Error;

/// Errors reported by query diagnostics and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A query component names fields the record type does not have.
    #[error("unknown fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    /// A sort direction string was neither `asc` nor `desc`.
    #[error("invalid sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidDirection(String),
}

/// Result type for listwise operations.
pub type Result<T> = std::result::Result<T, QueryError>;
