//! Owner of the [`AppState`] and the only place it is mutated.
//!
//! Every operation is a plain state transition: list operations are
//! order dependent, while the name and the annoy flag are independent of
//! them and of each other. The TUI re-renders after each handled event, so
//! every mutation here is followed by a fresh projection of the state.

use super::clock::{Clock, SystemClock};
use super::error::{Result, TodoError};
use super::state::{AppState, TodoId, TodoRecord};

pub struct AppController {
    state: AppState,
    clock: Box<dyn Clock>,
    next_id: u64,
}

impl AppController {
    pub fn new(name: impl Into<String>, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::new(name),
            clock,
            next_id: 0,
        }
    }

    /// Controller stamping dates with the local clock and default format.
    pub fn with_system_clock(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(SystemClock::default()))
    }

    // ── Reads ───────────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn todos(&self) -> &[TodoRecord] {
        &self.state.todos
    }

    pub fn should_annoy(&self) -> bool {
        self.state.should_annoy
    }

    pub fn heading(&self) -> String {
        self.state.heading()
    }

    // ── Mutations ───────────────────────────────────────────────────────

    /// Append a record with `text` as its body. Empty text is accepted.
    ///
    /// The clock is consulted exactly once per call.
    pub fn add_todo(&mut self, text: impl Into<String>) -> &TodoRecord {
        let id = TodoId(self.next_id);
        self.next_id += 1;

        let record = TodoRecord::new(id, text.into(), self.clock.now_string());
        tracing::debug!(id = %id, body = record.body(), date = record.date(), "todo added");

        self.state.todos.push(record);
        &self.state.todos[self.state.todos.len() - 1]
    }

    /// Remove the record at ordinal `index` and return it.
    ///
    /// Indices are positions in the current list, so they shift after each
    /// removal. Out-of-range requests leave the list untouched.
    pub fn remove_todo(&mut self, index: usize) -> Result<TodoRecord> {
        let len = self.state.todos.len();
        if index >= len {
            tracing::warn!(index, len, "rejected out-of-range todo removal");
            return Err(TodoError::IndexOutOfRange { index, len });
        }

        let removed = self.state.todos.remove(index);
        tracing::debug!(index, id = %removed.id(), "todo removed");
        Ok(removed)
    }

    /// Remove the record carrying `id`, wherever it currently sits.
    pub fn remove_todo_by_id(&mut self, id: TodoId) -> Result<TodoRecord> {
        let index = self
            .state
            .todos
            .iter()
            .position(|t| t.id() == id)
            .ok_or(TodoError::UnknownId(id))?;
        self.remove_todo(index)
    }

    /// Replace the owner's name unconditionally, including with `""`.
    pub fn change_name(&mut self, new_name: impl Into<String>) {
        self.state.name = new_name.into();
        tracing::debug!(name = %self.state.name, "name changed");
    }

    /// Flip the presentational flag and return its new value.
    pub fn toggle_annoy(&mut self) -> bool {
        self.state.should_annoy = !self.state.should_annoy;
        tracing::debug!(should_annoy = self.state.should_annoy, "annoy toggled");
        self.state.should_annoy
    }
}

impl std::fmt::Debug for AppController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppController")
            .field("state", &self.state)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
