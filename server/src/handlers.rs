//! Resource handlers for the `/todos` routes.
//!
//! Each handler is identifier validation → completion rule (update path
//! only) → one store call → response mapping. Absence and malformed ids
//! both surface as 404; store failures as 400 via [`ApiError`].

use axum::{
    extract::{Path, State},
    Json,
};
use todos_core::{CreateTodo, ObjectId, Todo, TodoItem, TodoList, TodoPatch, TodoStore};

use crate::error::ApiError;

/// Shape-checks a path identifier. A malformed id is reported as not-found
/// rather than a client error; probing clients depend on the two being
/// indistinguishable.
fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = CreateTodo,
    responses(
        (status = 200, description = "The created todo", body = Todo),
        (status = 400, description = "Persistence failure")
    )
)]
#[tracing::instrument(name = "create_todo", skip_all)]
pub async fn create_todo<S: TodoStore>(
    State(store): State<S>,
    Json(body): Json<CreateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.insert(body).await?;
    tracing::debug!(id = %todo.id, "created todo");
    Ok(Json(todo))
}

#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses(
        (status = 200, description = "All todos", body = TodoList),
        (status = 400, description = "Persistence failure")
    )
)]
#[tracing::instrument(name = "list_todos", skip_all)]
pub async fn list_todos<S: TodoStore>(State(store): State<S>) -> Result<Json<TodoList>, ApiError> {
    let todos = store.find_all().await?;
    Ok(Json(TodoList { todos }))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "A single todo", body = TodoItem),
        (status = 404, description = "Unknown or malformed identifier"),
        (status = 400, description = "Persistence failure")
    )
)]
#[tracing::instrument(name = "get_todo", skip_all)]
pub async fn get_todo<S: TodoStore>(
    State(store): State<S>,
    Path(id): Path<String>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&id)?;
    let todo = store.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(TodoItem { todo }))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "The deleted todo", body = TodoItem),
        (status = 404, description = "Unknown or malformed identifier"),
        (status = 400, description = "Persistence failure")
    )
)]
#[tracing::instrument(name = "delete_todo", skip_all)]
pub async fn delete_todo<S: TodoStore>(
    State(store): State<S>,
    Path(id): Path<String>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&id)?;
    let todo = store.delete_by_id(id).await?.ok_or(ApiError::NotFound)?;
    tracing::debug!(id = %todo.id, "deleted todo");
    Ok(Json(TodoItem { todo }))
}

#[utoipa::path(
    patch,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "Todo identifier")),
    request_body = TodoPatch,
    responses(
        (status = 200, description = "The todo after the update", body = TodoItem),
        (status = 404, description = "Unknown or malformed identifier"),
        (status = 400, description = "Persistence failure")
    )
)]
#[tracing::instrument(name = "update_todo", skip_all)]
pub async fn update_todo<S: TodoStore>(
    State(store): State<S>,
    Path(id): Path<String>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&id)?;
    let update = patch.into_update();
    let todo = store.update_by_id(id, update).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(TodoItem { todo }))
}
