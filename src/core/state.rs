//! Plain data behind the todo screen.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a [`TodoRecord`] at creation.
///
/// Ids are unique within one [`AppController`](super::AppController) and
/// strictly increasing in creation order. They are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry in the list. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    id: TodoId,
    body: String,
    date: String,
}

impl TodoRecord {
    pub(crate) fn new(id: TodoId, body: String, date: String) -> Self {
        Self { id, body, date }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Formatted creation date, as produced by the clock.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// The whole application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Owner of the list; shown in the heading.
    pub name: String,
    /// Entries in insertion order (removals keep the relative order).
    pub todos: Vec<TodoRecord>,
    /// Purely presentational flag toggled by "What the heck?".
    pub should_annoy: bool,
}

impl AppState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
            should_annoy: false,
        }
    }

    /// Heading text, e.g. `Kevin's Todo List`.
    pub fn heading(&self) -> String {
        format!("{}'s Todo List", self.name)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("Kevin")
    }
}
