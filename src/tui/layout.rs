//! Screen layout: root container, toggle button and status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of a bordered single-line text field.
pub const FIELD_HEIGHT: u16 = 3;
/// Minimum rows kept for the entries list.
pub const MIN_ENTRIES_HEIGHT: u16 = 1;

/// Computed top-level regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// The styled root container (heading, entries, fields).
    pub root: Rect,
    /// "What the heck?" button, outside the root container.
    pub toggle: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

/// Regions inside the root container's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootLayout {
    pub heading: Rect,
    pub entries: Rect,
    pub name_field: Rect,
    pub add_field: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let [root, toggle, status] = Layout::vertical([
            Constraint::Min(1),    // Root container
            Constraint::Length(1), // Toggle button
            Constraint::Length(1), // Status bar
        ])
        .areas(area);

        AppLayout { root, toggle, status }
    }
}

impl RootLayout {
    /// Split the inner area of the root container.
    pub fn compute(inner: Rect) -> Self {
        let [heading, _, entries, name_field, add_field] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(MIN_ENTRIES_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
        ])
        .areas(inner);

        RootLayout {
            heading,
            entries,
            name_field,
            add_field,
        }
    }
}
