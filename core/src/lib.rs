//! Client core for the todo service.
//!
//! # Overview
//! - [`TodoClient`] builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network.
//! - [`TodoApi`] is the list/create/update/delete surface;
//!   [`HttpTodoApi`] implements it on top of `TodoClient` and a
//!   [`Transport`] supplied by the caller.
//! - [`TodoStore`] holds the client's snapshot of the list and refetches it
//!   in full after every mutation.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use api::{HttpTodoApi, TodoApi, Transport};
pub use client::TodoClient;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{Submit, TodoStore};
pub use types::{NewTodoPayload, Todo};
