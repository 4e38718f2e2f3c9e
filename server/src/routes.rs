use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::store::{Todo, TodoStore};

pub const API_BASE: &str = "/api/v1";

/// Body of `POST /todos`. A missing or null `content` is an empty todo.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

/// Body of `PUT /todos/{id}`. Both fields are written; missing or null ones
/// take their defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub done: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

type Store = State<Arc<TodoStore>>;

/// Build the router with every todo endpoint nested under `/api/v1`.
pub fn build_router(store: Arc<TodoStore>, cors: bool) -> Router {
    let todos = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(store);

    let mut router = Router::new()
        .nest(API_BASE, todos)
        .layer(TraceLayer::new_for_http());
    if cors {
        router = router.layer(CorsLayer::permissive());
    }
    router
}

/// Decode a JSON body whatever its `Content-Type`. A literal `null` body
/// decodes to the default value.
fn decode<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    match serde_json::from_slice::<Option<T>>(body) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(err) => {
            tracing::warn!(error = %err, "rejected request body");
            Err(err.into())
        }
    }
}

async fn list_todos(State(store): Store) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn get_todo(State(store): Store, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    let todo = store.get(&id).await.inspect_err(|_| {
        tracing::debug!(%id, "todo not found");
    })?;
    Ok(Json(todo))
}

async fn create_todo(
    State(store): Store,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input: CreateTodo = decode(&body)?;
    let todo = store.create(input.content).await;
    tracing::info!(id = %todo.id, "created todo");
    Ok(Json(todo))
}

async fn update_todo(
    State(store): Store,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let input: UpdateTodo = decode(&body)?;
    store
        .update(&id, input.content, input.done)
        .await
        .inspect_err(|_| tracing::debug!(%id, "update of unknown todo"))?;
    tracing::info!(%id, done = input.done, "updated todo");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(State(store): Store, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    store
        .delete(&id)
        .await
        .inspect_err(|_| tracing::debug!(%id, "delete of unknown todo"))?;
    tracing::info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
