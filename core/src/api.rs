//! The four API wrapper functions the store talks to.
//!
//! `TodoApi` is the seam the store is generic over, so tests can swap in a
//! recording fake. `HttpTodoApi` is the real implementation: it builds a
//! request with `TodoClient`, hands it to a `Transport`, and parses whatever
//! comes back. No retry and no timeout.

use crate::client::TodoClient;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{NewTodoPayload, Todo};

pub trait TodoApi {
    fn list(&self) -> Result<Vec<Todo>>;
    fn create(&self, payload: &NewTodoPayload) -> Result<Todo>;
    fn update(&self, todo: &Todo) -> Result<Todo>;
    fn delete(&self, id: i32) -> Result<()>;
}

/// Executes an `HttpRequest` against the network.
///
/// Implementations must return non-2xx responses as `Ok`; only failures to
/// get a response at all become `ApiError::Transport`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpTodoApi<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> HttpTodoApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }
}

impl<T: Transport> TodoApi for HttpTodoApi<T> {
    fn list(&self) -> Result<Vec<Todo>> {
        let response = self.send(self.client.build_list_todos())?;
        self.client.parse_list_todos(response)
    }

    fn create(&self, payload: &NewTodoPayload) -> Result<Todo> {
        let request = self.client.build_create_todo(payload)?;
        self.client.parse_create_todo(self.send(request)?)
    }

    fn update(&self, todo: &Todo) -> Result<Todo> {
        let request = self.client.build_update_todo(todo)?;
        self.client.parse_update_todo(self.send(request)?)
    }

    fn delete(&self, id: i32) -> Result<()> {
        let response = self.send(self.client.build_delete_todo(id))?;
        self.client.parse_delete_todo(response)
    }
}
