//! In-memory [`TodoStore`] used by tests and local development.
//!
//! Mirrors the document database's semantics closely enough for the HTTP
//! surface to be exercised without a running instance: generated ObjectIds,
//! delete returns the removed record, update returns the post-update record.

use std::{collections::HashMap, sync::Arc};

use bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::{CreateTodo, Todo, TodoUpdate};

/// Shared in-process todo map. Cloning shares the underlying storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<HashMap<ObjectId, Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn insert(&self, new: CreateTodo) -> Result<Todo, StoreError> {
        let id = ObjectId::new();
        let todo = Todo {
            id: id.to_hex(),
            text: new.text,
            completed: false,
            completed_at: None,
        };
        self.todos.write().await.insert(id, todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        Ok(todos.remove(&id))
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        update: TodoUpdate,
    ) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        let Some(todo) = todos.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(text) = update.text {
            todo.text = text;
        }
        todo.completed = update.completed;
        todo.completed_at = update.completed_at;
        Ok(Some(todo.clone()))
    }
}
