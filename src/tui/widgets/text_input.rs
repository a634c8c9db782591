//! Reusable labeled text field with a local draft.
//!
//! The draft lives in the field, not in the app state. Submitting hands the
//! draft to the caller's save callback and then clears it, whatever the
//! draft was; an empty draft is submitted like any other.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::input_buffer::InputBuffer;
use crate::tui::theme;

/// Label of the field's submit trigger.
const SUBMIT_LABEL: &str = "[Submit]";

/// What a key press did to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    /// The draft or cursor changed.
    Edited,
    /// Enter was pressed; the caller should `submit`.
    Submit,
    /// Key not handled by the field.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct TextInputField {
    title: &'static str,
    draft: InputBuffer,
}

impl TextInputField {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            draft: InputBuffer::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn draft(&self) -> &str {
        self.draft.text()
    }

    /// Replace the draft. No validation.
    pub fn update_draft(&mut self, new_text: impl Into<String>) {
        self.draft.set_text(new_text);
    }

    /// Pass the draft to `save`, then reset it to empty.
    pub fn submit<F: FnOnce(String)>(&mut self, save: F) {
        let text = self.draft.take();
        save(text);
    }

    pub fn handle_input(&mut self, event: &Event) -> FieldInput {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return FieldInput::Ignored;
        };

        match (*modifiers, *code) {
            (_, KeyCode::Enter) => FieldInput::Submit,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.draft.insert_char(c);
                FieldInput::Edited
            }
            (_, KeyCode::Backspace) => {
                self.draft.backspace();
                FieldInput::Edited
            }
            (_, KeyCode::Delete) => {
                self.draft.delete();
                FieldInput::Edited
            }
            (_, KeyCode::Left) => {
                self.draft.move_left();
                FieldInput::Edited
            }
            (_, KeyCode::Right) => {
                self.draft.move_right();
                FieldInput::Edited
            }
            (_, KeyCode::Home) => {
                self.draft.move_home();
                FieldInput::Edited
            }
            (_, KeyCode::End) => {
                self.draft.move_end();
                FieldInput::Edited
            }
            _ => FieldInput::Ignored,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = if focused {
            theme::block_focused(self.title)
        } else {
            theme::block_default(self.title)
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [text_area, button_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(SUBMIT_LABEL.len() as u16 + 1),
        ])
        .areas(inner);

        let width = text_area.width as usize;
        let (visible, cursor_col) =
            visible_window(self.draft.text(), self.draft.cursor_column(), width);
        let content = if visible.is_empty() && !focused {
            Span::styled("…", theme::dim())
        } else {
            Span::raw(visible)
        };
        frame.render_widget(Paragraph::new(content), text_area);
        frame.render_widget(
            Paragraph::new(Span::styled(SUBMIT_LABEL, theme::button(focused)))
                .alignment(Alignment::Right),
            button_area,
        );

        if focused && width > 0 {
            frame.set_cursor_position((text_area.x + cursor_col as u16, text_area.y));
        }
    }
}

/// Slice of `text` that fits in `width` columns with the cursor in view.
///
/// Scrolls just far enough that the cursor sits on the last column once
/// the text overflows. Returns the visible text and the cursor column
/// inside it.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let offset = cursor.saturating_sub(width - 1);
    let visible = text.chars().skip(offset).take(width).collect();
    (visible, cursor - offset)
}
