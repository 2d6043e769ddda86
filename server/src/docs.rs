//! OpenAPI document for the todo API, served at `/swagger.json`.
//!
//! Built once from the `#[utoipa::path]` annotations on the handlers; the
//! endpoint itself is read-only and stateless.

use std::sync::LazyLock;

use axum::Json;
use todos_core::{CreateTodo, Todo, TodoItem, TodoList, TodoPatch};
use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo REST API",
        description = "RESTful API with Swagger",
        version = "1.0.0"
    ),
    paths(
        handlers::create_todo,
        handlers::list_todos,
        handlers::get_todo,
        handlers::delete_todo,
        handlers::update_todo,
    ),
    components(schemas(Todo, CreateTodo, TodoPatch, TodoItem, TodoList)),
    tags((name = "todos", description = "Todo management"))
)]
struct ApiDoc;

static SPEC: LazyLock<utoipa::openapi::OpenApi> = LazyLock::new(ApiDoc::openapi);

pub async fn swagger_json() -> Json<utoipa::openapi::OpenApi> {
    Json(SPEC.clone())
}
