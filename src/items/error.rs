use thiserror::Error;

use crate::database::manager::DatabaseError;

/// Per-request, recoverable failures surfaced by the item pipeline.
///
/// Store faults pass through transparently; the pipeline never wraps,
/// retries, or reinterprets them.
#[derive(Debug, Error)]
pub enum ItemError {
    /// Malformed or incomplete caller input.
    #[error("{0}")]
    Validation(String),

    /// The referenced item is unusable for this caller: missing, or owned by
    /// someone else. The two cases carry the same message on purpose.
    #[error("{0}")]
    Api(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
