//! Domain core for the todo service.
//!
//! # Overview
//! Everything that works without an HTTP stack lives here: the `Todo` record
//! and its request/response DTOs, the completion-normalization rule applied
//! to partial updates, and the `TodoStore` persistence contract with an
//! in-memory implementation.
//!
//! # Design
//! - `TodoPatch` is an explicit allow-list: only `text` and `completed` are
//!   accepted from an update payload, so a client can never supply its own
//!   `completedAt`.
//! - `TodoStore` is the seam between handlers and the document database.
//!   Handlers are generic over it; tests run against `MemoryStore`, the
//!   server binary runs against MongoDB.
//! - Ids are document-store ObjectIds carried as 24-char hex strings on the
//!   JSON surface.

pub mod error;
pub mod memory;
pub mod store;
pub mod types;

pub use bson::oid::ObjectId;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::TodoStore;
pub use types::{CreateTodo, Todo, TodoItem, TodoList, TodoPatch, TodoUpdate};
