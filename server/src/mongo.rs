//! MongoDB-backed [`TodoStore`] over a `todos` collection.
//!
//! One driver call per trait operation; single-document atomicity comes
//! from the database. Documents carry a native ObjectId `_id` which is
//! flattened to its hex form at the domain boundary.

use futures::TryStreamExt;
use mongodb::{bson::doc, options::ReturnDocument, Client, Collection};
use serde::{Deserialize, Serialize};
use todos_core::{CreateTodo, ObjectId, StoreError, Todo, TodoStore, TodoUpdate};

#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    text: String,
    completed: bool,
    #[serde(rename = "completedAt")]
    completed_at: Option<i64>,
}

impl From<TodoDocument> for Todo {
    fn from(record: TodoDocument) -> Self {
        Todo {
            id: record.id.to_hex(),
            text: record.text,
            completed: record.completed,
            completed_at: record.completed_at,
        }
    }
}

/// Handle on the `todos` collection. Cloning is cheap and shares the
/// underlying connection pool.
#[derive(Clone)]
pub struct MongoStore {
    todos: Collection<TodoDocument>,
}

impl MongoStore {
    /// Connects using the given connection string. The database name comes
    /// from the connection string, falling back to `todos`.
    pub async fn connect(uri: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database("todos"));
        tracing::info!(db = %db.name(), "connected to mongodb");
        Ok(Self {
            todos: db.collection("todos"),
        })
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

impl TodoStore for MongoStore {
    async fn insert(&self, new: CreateTodo) -> Result<Todo, StoreError> {
        let record = TodoDocument {
            id: ObjectId::new(),
            text: new.text,
            completed: false,
            completed_at: None,
        };
        self.todos.insert_one(&record).await.map_err(backend)?;
        Ok(record.into())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let records: Vec<TodoDocument> = self
            .todos
            .find(doc! {})
            .await
            .map_err(backend)?
            .try_collect()
            .await
            .map_err(backend)?;
        Ok(records.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Todo>, StoreError> {
        let record = self
            .todos
            .find_one(doc! { "_id": id })
            .await
            .map_err(backend)?;
        Ok(record.map(Todo::from))
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<Option<Todo>, StoreError> {
        let record = self
            .todos
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(backend)?;
        Ok(record.map(Todo::from))
    }

    async fn update_by_id(&self, id: ObjectId, update: TodoUpdate) -> Result<Option<Todo>, StoreError> {
        let mut set = doc! {
            "completed": update.completed,
            "completedAt": update.completed_at,
        };
        if let Some(text) = update.text {
            set.insert("text", text);
        }
        let record = self
            .todos
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(backend)?;
        Ok(record.map(Todo::from))
    }
}
