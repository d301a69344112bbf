//! Client-side todo list state.
//!
//! `TodoStore` owns the only mutable state on the client: the snapshot of
//! todos as of the last successful list call. Every mutation goes to the
//! server first and is followed by a full refetch that replaces the
//! snapshot wholesale. When any call fails the error is returned and the
//! previous snapshot stays in place.

use crate::api::TodoApi;
use crate::error::Result;
use crate::types::{NewTodoPayload, Todo};

/// What `TodoStore::submit` did with a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    Created,
    /// The payload had empty text; no request was made.
    Skipped,
}

#[derive(Debug)]
pub struct TodoStore<A> {
    api: A,
    todos: Vec<Todo>,
}

impl<A: TodoApi> TodoStore<A> {
    /// Creates a store with an empty snapshot. Call [`mount`](Self::mount)
    /// to load the server's list.
    pub fn new(api: A) -> Self {
        Self {
            api,
            todos: Vec::new(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn mount(&mut self) -> Result<()> {
        self.refresh()
    }

    /// Replaces the snapshot with the server's current list.
    pub fn refresh(&mut self) -> Result<()> {
        let todos = self.api.list()?;
        tracing::debug!(count = todos.len(), "refreshed todo list");
        self.todos = todos;
        Ok(())
    }

    pub fn submit(&mut self, payload: NewTodoPayload) -> Result<Submit> {
        if payload.text.is_empty() {
            tracing::debug!("ignoring submit with empty text");
            return Ok(Submit::Skipped);
        }
        let created = self.api.create(&payload)?;
        tracing::info!(id = created.id, "created todo");
        self.refresh()?;
        Ok(Submit::Created)
    }

    pub fn update(&mut self, todo: &Todo) -> Result<()> {
        self.api.update(todo)?;
        tracing::info!(id = todo.id, "updated todo");
        self.refresh()
    }

    pub fn delete(&mut self, id: i32) -> Result<()> {
        self.api.delete(id)?;
        tracing::info!(id, "deleted todo");
        self.refresh()
    }
}
