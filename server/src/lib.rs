//! In-memory todo list HTTP API.
//!
//! Serves create/list/get/update/delete under `/api/v1/todos` from a single
//! [`TodoStore`] held in router state.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody, ServerError, ServerResult, StoreError};
pub use routes::{build_router, CreateTodo, UpdateTodo, API_BASE};
pub use server::TodoServer;
pub use store::{Todo, TodoStore};

/// Router over a fresh, empty store with CORS enabled.
pub fn app() -> Router {
    build_router(Arc::new(TodoStore::new()), true)
}

/// Serve [`app`] on an already bound listener.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
