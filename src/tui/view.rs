//! Display tree for the todo screen.
//!
//! [`RootView::project`] is a pure function of [`AppState`]; the painters in
//! `app.rs` and `views/` only ever read from the projected tree. Row
//! ordinals are recomputed on every projection, so a removal trigger always
//! targets the row's current position.

use crate::core::{AppState, TodoId};

use super::events::Action;

pub const NAME_FIELD_TITLE: &str = "Change your name:";
pub const ADD_FIELD_TITLE: &str = "Add Todo:";
pub const TOGGLE_LABEL: &str = "What the heck?";
pub const REMOVE_LABEL: &str = "Remove";

/// Presentational variant of the root container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Plain,
    Annoying,
}

impl Presentation {
    pub fn from_flag(should_annoy: bool) -> Self {
        if should_annoy {
            Presentation::Annoying
        } else {
            Presentation::Plain
        }
    }

    /// Class name of the root container (`""` or `"annoying"`).
    pub fn class_name(self) -> &'static str {
        match self {
            Presentation::Plain => "",
            Presentation::Annoying => "annoying",
        }
    }
}

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub ordinal: usize,
    pub id: TodoId,
    pub date: String,
    pub body: String,
}

impl TodoRow {
    /// Action fired by this row's removal trigger.
    pub fn remove_action(&self) -> Action {
        Action::RemoveTodo(self.ordinal)
    }
}

/// Which operation a text field's save callback feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    ChangeName,
    AddTodo,
}

/// A labeled text field node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNode {
    pub title: &'static str,
    pub target: FieldTarget,
}

impl FieldNode {
    /// Action fired when the field is submitted with `text`.
    pub fn submit_action(&self, text: String) -> Action {
        match self.target {
            FieldTarget::ChangeName => Action::ChangeName(text),
            FieldTarget::AddTodo => Action::AddTodo(text),
        }
    }
}

/// A button node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonNode {
    pub label: &'static str,
    pub action: Action,
}

/// The whole screen as a tree of typed nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootView {
    pub variant: Presentation,
    pub heading: String,
    pub rows: Vec<TodoRow>,
    pub name_field: FieldNode,
    pub add_field: FieldNode,
    /// Sits outside the styled root container.
    pub toggle: ButtonNode,
}

impl RootView {
    pub fn project(state: &AppState) -> Self {
        let rows = state
            .todos
            .iter()
            .enumerate()
            .map(|(ordinal, todo)| TodoRow {
                ordinal,
                id: todo.id(),
                date: todo.date().to_string(),
                body: todo.body().to_string(),
            })
            .collect();

        Self {
            variant: Presentation::from_flag(state.should_annoy),
            heading: state.heading(),
            rows,
            name_field: FieldNode {
                title: NAME_FIELD_TITLE,
                target: FieldTarget::ChangeName,
            },
            add_field: FieldNode {
                title: ADD_FIELD_TITLE,
                target: FieldTarget::AddTodo,
            },
            toggle: ButtonNode {
                label: TOGGLE_LABEL,
                action: Action::ToggleAnnoy,
            },
        }
    }
}
