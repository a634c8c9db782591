//! Keyboard Session Tests
//!
//! Drive the app the way a user would and check the controller state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crate::tests::common::fixtures::{bodies, create_test_app, FIXED_DATE};
use crate::tui::events::{AppEvent, Focus};
use crate::tui::App;

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(AppEvent::Input(Event::Key(KeyEvent::new(
        code,
        KeyModifiers::NONE,
    ))));
}

fn type_line(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(70, 22)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_kevin_session_by_keyboard() {
    let mut app = create_test_app(&[]);
    assert_eq!(app.focus, Focus::AddField);

    type_line(&mut app, "buy milk");
    type_line(&mut app, "walk dog");
    assert_eq!(bodies(app.controller()), vec!["buy milk", "walk dog"]);

    // Back to the list, first row is selected
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));

    assert_eq!(bodies(app.controller()), vec!["walk dog"]);
    assert_eq!(app.controller().todos()[0].date(), FIXED_DATE);
    assert_eq!(app.selected_entry(), 0);
}

#[test]
fn test_empty_submit_appends_empty_record() {
    let mut app = create_test_app(&[]);
    press(&mut app, KeyCode::Enter);

    assert_eq!(bodies(app.controller()), vec![""]);
    assert_eq!(app.add_field().draft(), "");
}

#[test]
fn test_remove_last_row_clamps_selection() {
    let mut app = create_test_app(&["a", "b", "c"]);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.selected_entry(), 2);

    press(&mut app, KeyCode::Delete);
    assert_eq!(bodies(app.controller()), vec!["a", "b"]);
    assert_eq!(app.selected_entry(), 1);
}

#[test]
fn test_global_keys_ignored_while_typing() {
    let mut app = create_test_app(&[]);
    type_line(&mut app, "q!");

    assert!(app.running);
    assert!(!app.controller().should_annoy());
    assert_eq!(bodies(app.controller()), vec!["q!"]);
}

#[test]
fn test_rename_then_toggle_shows_on_screen() {
    let mut app = create_test_app(&["buy milk"]);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.focus, Focus::NameField);
    type_line(&mut app, "Ana");

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('!'));
    assert!(app.controller().should_annoy());

    app.notifications.clear();
    let text = screen(&app);
    assert!(text.contains("Ana's Todo List"));
    assert!(text.contains("buy milk"));
    assert!(text.contains("What the heck?"));
}
