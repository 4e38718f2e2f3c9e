//! Wire types for the `/api/v1` todo API.
//!
//! Defined independently of the server crate; the integration test catches
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub content: String,
    pub done: bool,
    pub created_at: i64,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub content: String,
}

/// Request payload for updating a todo. Both fields replace the stored
/// values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    pub content: String,
    pub done: bool,
}

/// `{"message": ...}` envelope the server sends with non-404 errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: String,
}
