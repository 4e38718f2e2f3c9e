//! In-memory todo storage.
//!
//! # Design
//! `TodoStore` owns a single `Vec<Todo>` behind a `tokio::sync::RwLock`.
//! List and Get take the read guard; Create, Update and Delete take the
//! write guard, so every operation observes and leaves a consistent vector.
//! Lookups are linear scans over insertion order.
//!
//! Delete uses `Vec::swap_remove`: the last element moves into the removed
//! slot, so the order of the remaining todos is not preserved. Clients that
//! list after a delete will see this.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;

/// A single todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub content: String,
    pub done: bool,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
}

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, not-done todo and return it.
    pub async fn create(&self, content: String) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            content,
            done: false,
            created_at: chrono::Utc::now().timestamp(),
        };
        self.todos.write().await.push(todo.clone());
        todo
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        let todos = self.todos.read().await;
        todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Overwrite `content` and `done`; `id` and `created_at` never change.
    pub async fn update(&self, id: &str, content: String, done: bool) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todo.content = content;
        todo.done = done;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        let idx = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todos.swap_remove(idx);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}
