//! Entries list: one removable row per todo, in list order.
//!
//! The selection is an ordinal into the rows of the current projection.
//! Removing a row fires `Action::RemoveTodo` with that row's ordinal, then
//! the selection is clamped against the next projection.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::super::theme;
use crate::tui::events::Action;
use crate::tui::view::{Presentation, TodoRow, REMOVE_LABEL};

#[derive(Debug, Default)]
pub struct TodoListView {
    selected: usize,
}

impl TodoListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Map a key press to an action against `rows`. `None` if not handled.
    pub fn handle_input(&mut self, event: &Event, rows: &[TodoRow]) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Action::SelectNext),
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Action::SelectPrev),
            (
                KeyModifiers::NONE,
                KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete | KeyCode::Enter,
            ) => rows.get(self.selected).map(TodoRow::remove_action),
            _ => None,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        rows: &[TodoRow],
        variant: Presentation,
        focused: bool,
    ) {
        if rows.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("No todos yet. Press ", theme::dim()),
                    Span::styled("a", theme::highlight()),
                    Span::styled(" to add one.", theme::dim()),
                ])),
                area,
            );
            return;
        }

        let date_width = rows.iter().map(|r| r.date.chars().count()).max().unwrap_or(0);

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let is_selected = focused && row.ordinal == self.selected;
                ListItem::new(row_line(row, date_width, is_selected, variant))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.selected));
        let list = List::new(items).highlight_symbol(if focused { "▸ " } else { "  " });
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn row_line(row: &TodoRow, date_width: usize, selected: bool, variant: Presentation) -> Line<'static> {
    let (date_style, body_style) = match variant {
        Presentation::Plain => (theme::muted(), Style::default().fg(theme::TEXT)),
        Presentation::Annoying => (theme::root_style(variant), theme::root_style(variant)),
    };

    Line::from(vec![
        Span::styled(format!("{:<date_width$}", row.date), date_style),
        Span::raw("  "),
        Span::styled(row.body.clone(), body_style),
        Span::raw("  "),
        Span::styled(format!("[{REMOVE_LABEL}]"), theme::button(selected)),
    ])
}
