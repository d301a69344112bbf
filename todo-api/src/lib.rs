//! In-memory todo API server.
//!
//! Serves the REST endpoints the client crate talks to. Ids are assigned
//! sequentially from 1 and the list endpoint returns the newest todo first.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Longest todo text the server accepts, in characters.
pub const MAX_TEXT_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub text: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update. Unknown fields (the client sends the whole todo,
/// including `id`) are ignored.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Default)]
pub struct Todos {
    last_id: i32,
    items: BTreeMap<i32, Todo>,
}

impl Todos {
    /// Returns `None` once the id space is used up.
    fn insert(&mut self, text: String, completed: bool) -> Option<Todo> {
        self.last_id = self.last_id.checked_add(1)?;
        let todo = Todo {
            id: self.last_id,
            text,
            completed,
        };
        self.items.insert(todo.id, todo.clone());
        Some(todo)
    }
}

pub type Db = Arc<RwLock<Todos>>;

pub fn app() -> Router {
    router(Db::default())
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(find_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn validate_text(text: &str) -> Result<(), StatusCode> {
    let len = text.chars().count();
    if len == 0 || len > MAX_TEXT_LEN {
        tracing::debug!(len, "rejecting todo text");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    Ok(())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.items.values().rev().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    validate_text(&input.text)?;
    let todo = db
        .write()
        .await
        .insert(input.text, input.completed)
        .ok_or_else(|| {
            tracing::error!("todo ids exhausted");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn find_todo(State(db): State<Db>, Path(id): Path<i32>) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos
        .items
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    if let Some(text) = &input.text {
        validate_text(text)?;
    }
    let mut todos = db.write().await;
    let todo = todos.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(text) = input.text {
        todo.text = text;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    tracing::debug!(id, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i32>) -> StatusCode {
    let mut todos = db.write().await;
    match todos.items.remove(&id) {
        Some(_) => {
            tracing::debug!(id, "deleted todo");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 7,
            text: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "text": "Test", "completed": false}));
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"text":"No completed field"}"#).unwrap();
        assert_eq!(input.text, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_text() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_ignores_id_field() {
        let input: UpdateTodo =
            serde_json::from_str(r#"{"id":3,"text":"x","completed":true}"#).unwrap();
        assert_eq!(input.text.as_deref(), Some("x"));
        assert_eq!(input.completed, Some(true));
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut todos = Todos::default();
        assert_eq!(todos.insert("a".into(), false).unwrap().id, 1);
        assert_eq!(todos.insert("b".into(), true).unwrap().id, 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut todos = Todos::default();
        todos.insert("a".into(), false);
        todos.items.remove(&1);
        assert_eq!(todos.insert("b".into(), false).unwrap().id, 2);
    }

    #[test]
    fn insert_stops_at_max_id() {
        let mut todos = Todos {
            last_id: i32::MAX - 1,
            ..Default::default()
        };
        assert_eq!(todos.insert("last".into(), false).unwrap().id, i32::MAX);
        assert!(todos.insert("one too many".into(), false).is_none());
        assert_eq!(todos.items.len(), 1);
    }

    #[tokio::test]
    async fn create_returns_500_when_ids_run_out() {
        use tower::ServiceExt;

        let db = Db::new(RwLock::new(Todos {
            last_id: i32::MAX,
            ..Default::default()
        }));
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/todos")
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(r#"{"text":"overflow"}"#.to_string())
            .unwrap();

        let resp = router(db.clone()).oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(db.read().await.items.is_empty());
    }

    #[test]
    fn text_length_limits() {
        assert_eq!(validate_text(""), Err(StatusCode::UNPROCESSABLE_ENTITY));
        assert!(validate_text("a").is_ok());
        assert!(validate_text(&"あ".repeat(MAX_TEXT_LEN)).is_ok());
        assert_eq!(
            validate_text(&"a".repeat(MAX_TEXT_LEN + 1)),
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        );
    }
}
