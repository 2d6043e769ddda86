//! Persistence contract between the handlers and the document store.
//!
//! # Design
//! One method per database operation the service performs; every handler
//! makes exactly one call. Absence is `Ok(None)`, never an error, so the
//! HTTP layer can map it to 404 while real backend failures become 400.
//! Methods are declared as `impl Future + Send` so handlers stay generic
//! over the store without boxing.

use std::future::Future;

use bson::oid::ObjectId;

use crate::error::StoreError;
use crate::types::{CreateTodo, Todo, TodoUpdate};

/// The four id-keyed operations plus insert that the service depends on.
///
/// Implementations must give single-document atomicity per call; the service
/// layers no coordination of its own on top.
pub trait TodoStore: Clone + Send + Sync + 'static {
    /// Persists a new record with a generated id, `completed = false` and a
    /// null completion timestamp.
    fn insert(&self, new: CreateTodo) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    /// Returns every stored record.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send;

    /// Returns the record with the given id, if any.
    fn find_by_id(
        &self,
        id: ObjectId,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    /// Removes and returns the record with the given id, if any.
    fn delete_by_id(
        &self,
        id: ObjectId,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    /// Applies `update` to the record with the given id and returns the
    /// post-update record, if any. `text` is only written when present;
    /// `completed` and `completed_at` are always written.
    fn update_by_id(
        &self,
        id: ObjectId,
        update: TodoUpdate,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;
}
