//! HTTP surface for the todo service.
//!
//! # Overview
//! Five resource routes over a single `todos` collection, an OpenAPI
//! document at `/swagger.json`, a static-file root, and permissive CORS on
//! everything. Each handler performs exactly one store call and maps the
//! result to a status code; all interesting domain logic lives in
//! `todos-core`.
//!
//! # Design
//! `app` is generic over the [`TodoStore`] so the integration tests drive
//! the full router against `MemoryStore` while the binary wires in
//! [`mongo::MongoStore`].

pub mod config;
pub mod cors;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod mongo;

use std::path::Path;

use axum::{middleware, routing::get, Router};
use todos_core::TodoStore;
use tower_http::services::ServeDir;

/// Builds the full router over the given store. `static_dir` is served for
/// any path no route claims.
pub fn app<S: TodoStore>(store: S, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo::<S>)
                .delete(handlers::delete_todo::<S>)
                .patch(handlers::update_todo::<S>),
        )
        .route("/swagger.json", get(docs::swagger_json))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(cors::permissive_cors))
        .with_state(store)
}
