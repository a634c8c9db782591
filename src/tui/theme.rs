//! Teal & Coral color theme, plus the "annoying" variant of the root
//! container.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::view::Presentation;

// ── Primary palette ─────────────────────────────────────────────────────────

/// Teal: primary accent and section headers.
pub const PRIMARY: Color = Color::Rgb(0x00, 0x80, 0x80);
/// Light teal: focused borders.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x00, 0x96, 0x88);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Coral: buttons and selected rows.
pub const ACCENT: Color = Color::Rgb(0xFF, 0x7F, 0x50);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Charcoal: text on badges.
pub const BG_BASE: Color = Color::Rgb(0x0A, 0x19, 0x19);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
/// Muted text for dates.
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Dim text for hints and placeholders.
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Success notifications.
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
/// Rejected requests.
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
/// Info notifications.
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Annoying variant ────────────────────────────────────────────────────────

/// Hot magenta border for the annoying root container.
pub const ANNOY_BORDER: Color = Color::Rgb(0xFF, 0x00, 0xFF);
/// Lime heading on coral, on purpose.
pub const ANNOY_HEADING: Color = Color::Rgb(0xC6, 0xFF, 0x00);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY_LIGHT)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "q:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Insert mode badge.
pub fn insert_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// `[Remove]`/button label; reversed when focused.
pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(BG_BASE)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    }
}

// ── Root container ──────────────────────────────────────────────────────────

/// Style of the whole root container area.
pub fn root_style(variant: Presentation) -> Style {
    match variant {
        Presentation::Plain => Style::default(),
        Presentation::Annoying => Style::default().fg(BG_BASE).bg(ACCENT),
    }
}

/// Heading line style inside the root container.
pub fn root_heading(variant: Presentation) -> Style {
    match variant {
        Presentation::Plain => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        Presentation::Annoying => Style::default()
            .fg(ANNOY_HEADING)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK | Modifier::UNDERLINED),
    }
}

/// Bordered root container block for the given variant.
pub fn root_block(variant: Presentation) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    match variant {
        Presentation::Plain => block.border_style(border_default()),
        Presentation::Annoying => block
            .border_type(BorderType::Double)
            .border_style(
                Style::default()
                    .fg(ANNOY_BORDER)
                    .add_modifier(Modifier::RAPID_BLINK),
            )
            .style(root_style(variant)),
    }
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_is_teal() {
        assert_eq!(PRIMARY, Color::Rgb(0x00, 0x80, 0x80));
    }

    #[test]
    fn test_accent_is_coral() {
        assert_eq!(ACCENT, Color::Rgb(0xFF, 0x7F, 0x50));
    }

    #[test]
    fn test_plain_root_has_no_background() {
        assert_eq!(root_style(Presentation::Plain).bg, None);
    }

    #[test]
    fn test_annoying_root_differs() {
        assert_eq!(root_style(Presentation::Annoying).bg, Some(ACCENT));
        assert_ne!(
            root_heading(Presentation::Plain),
            root_heading(Presentation::Annoying)
        );
    }

    #[test]
    fn test_button_focus_reverses() {
        assert_eq!(button(true).bg, Some(ACCENT));
        assert_eq!(button(false).bg, None);
    }
}
