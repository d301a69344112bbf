//! Domain DTOs for the todo API.
//!
//! These mirror the server's schema but are defined independently; the
//! integration tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item. The id is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i32,
    pub text: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodoPayload {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodoPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}
