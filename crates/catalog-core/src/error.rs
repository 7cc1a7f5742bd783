//! Store-level error types.

use thiserror::Error;

/// Faults raised by a content store.
///
/// The content service treats every variant as absence of a result; the
/// distinction only matters for logging.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
