//! Domain DTOs for the todo API.
//!
//! # Design
//! The JSON surface is fixed by the existing clients: `completedAt` is always
//! present on a `Todo` (null while open), single-record responses arrive
//! wrapped as `{"todo": ...}` and the list as `{"todos": [...]}`. The update
//! payload is an explicit allow-list struct so unknown keys are dropped at
//! the deserialization boundary rather than filtered by hand later.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// A single todo record as stored and as returned by the API.
///
/// `id` is the 24-char hex form of the store's ObjectId.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Millisecond epoch timestamp of the completing update; null while open.
    pub completed_at: Option<i64>,
}

/// Request payload for creating a new todo. Only `text` is client-supplied;
/// `completed`/`completedAt` take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateTodo {
    pub text: String,
}

/// Partial-update payload. Exactly `text` and `completed` are accepted;
/// any other key in the request body is ignored, so a client can never
/// smuggle in its own `completedAt`.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TodoPatch {
    pub text: Option<String>,
    /// A non-boolean value here is treated the same as an absent one.
    #[serde(default, deserialize_with = "lenient_bool")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<bool>))]
    pub completed: Option<bool>,
}

/// The full field set persisted by an update, produced by
/// [`TodoPatch::into_update`]. `completed` and `completed_at` are always
/// written; `text` only when the patch carried one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoUpdate {
    pub text: Option<String>,
    pub completed: bool,
    pub completed_at: Option<i64>,
}

impl TodoPatch {
    /// Normalizes the patch into the fields to persist.
    ///
    /// The completion timestamp is server-authoritative: flipping `completed`
    /// to true stamps the current time, anything else forces the todo back to
    /// open and clears the timestamp. A reopened todo must not keep a stale
    /// `completedAt`, and a re-completed one gets a fresh stamp rather than
    /// the one from a prior update.
    pub fn into_update(self) -> TodoUpdate {
        if self.completed == Some(true) {
            TodoUpdate {
                text: self.text,
                completed: true,
                completed_at: Some(Utc::now().timestamp_millis()),
            }
        } else {
            TodoUpdate {
                text: self.text,
                completed: false,
                completed_at: None,
            }
        }
    }
}

/// `{"todo": ...}` envelope used by the single-record endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TodoItem {
    pub todo: Todo,
}

/// `{"todos": [...]}` envelope returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}
