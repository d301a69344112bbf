//! The form and the list.
//!
//! The form turns one line of user input into an [`Intent`]; the list
//! renders the current snapshot. Neither talks to the API: intents are
//! handed back to the app loop, which dispatches them to the store.

use std::borrow::Cow;
use std::fmt::Write;

use thiserror::Error;
use todo_core::{NewTodoPayload, Todo};

pub const HELP: &str = "\
commands:
  add <text>         create a todo
  done <id>          mark a todo completed
  undo <id>          mark a todo not completed
  toggle <id>        flip a todo's completed flag
  edit <id> <text>   replace a todo's text
  rm <id>            delete a todo
  list               refetch the list
  help               show this help
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Create(NewTodoPayload),
    Update(Todo),
    Delete(i32),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown command `{0}`, try `help`")]
    UnknownCommand(String),

    #[error("`{0}` needs a todo id")]
    MissingId(String),

    #[error("`{0}` is not a todo id")]
    InvalidId(String),

    #[error("no todo with id {0} in the list")]
    UnknownTodo(i32),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// Update intents carry the whole todo, looked up in `todos` and edited.
/// `add` with no text still yields a `Create` with an empty payload; the
/// store is what decides to skip it.
pub fn parse_intent(line: &str, todos: &[Todo]) -> Result<Option<Intent>, FormError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, rest) = split_word(line);

    let intent = match command {
        "add" => Intent::Create(NewTodoPayload::new(rest)),
        "done" => Intent::Update(Todo {
            completed: true,
            ..lookup(command, rest, todos)?
        }),
        "undo" => Intent::Update(Todo {
            completed: false,
            ..lookup(command, rest, todos)?
        }),
        "toggle" => {
            let todo = lookup(command, rest, todos)?;
            Intent::Update(Todo {
                completed: !todo.completed,
                ..todo
            })
        }
        "edit" => {
            let (id, text) = split_word(rest);
            Intent::Update(Todo {
                text: text.to_string(),
                ..lookup(command, id, todos)?
            })
        }
        "rm" | "delete" => Intent::Delete(parse_id(command, rest)?),
        "list" | "ls" => Intent::Refresh,
        "help" | "?" => Intent::Help,
        "quit" | "exit" | "q" => Intent::Quit,
        other => return Err(FormError::UnknownCommand(other.to_string())),
    };
    Ok(Some(intent))
}

/// Renders the snapshot, one todo per line. Control characters in the text
/// are printed escaped so a todo can never span more than its own line.
pub fn render_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "(no todos)\n".to_string();
    }
    let width = todos
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for todo in todos {
        let mark = if todo.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {:>width$}  {}", todo.id, escape_controls(&todo.text));
    }
    out
}

fn escape_controls(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

fn parse_id(command: &str, raw: &str) -> Result<i32, FormError> {
    if raw.is_empty() {
        return Err(FormError::MissingId(command.to_string()));
    }
    raw.parse().map_err(|_| FormError::InvalidId(raw.to_string()))
}

fn lookup(command: &str, raw: &str, todos: &[Todo]) -> Result<Todo, FormError> {
    let id = parse_id(command, raw)?;
    todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .ok_or(FormError::UnknownTodo(id))
}
