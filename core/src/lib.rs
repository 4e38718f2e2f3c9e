//! Synchronous client core for the todo list API served under `/api/v1`.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, so the core stays deterministic and testable.
//!
//! - `TodoClient` is stateless: it holds only the API base URL.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response).

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, ErrorMessage, Todo, UpdateTodo};
