//! Error type for the persistence contract.
//!
//! Every store failure is terminal for the request that hit it — there are
//! no retries — so a single variant carrying the backend's message is all
//! the handlers need. "Record not found" is not an error: the store
//! operations return `Option` for that.

use thiserror::Error;

/// Failure surfaced by a [`TodoStore`](crate::store::TodoStore) operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database rejected or failed the operation.
    #[error("database error: {0}")]
    Backend(String),
}
