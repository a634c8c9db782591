use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use super::events::{Action, AppEvent, Focus, Notification, NotificationLevel};
use super::layout::{AppLayout, RootLayout};
use super::theme;
use super::view::{RootView, ADD_FIELD_TITLE, NAME_FIELD_TITLE};
use super::views::todo_list::TodoListView;
use super::widgets::text_input::{FieldInput, TextInputField};
use crate::core::AppController;

/// Notifications live this many ticks.
const NOTIFICATION_TTL_TICKS: u32 = 60;
/// At most this many notifications are shown at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Central TUI state (Elm architecture).
pub struct App {
    /// Whether the app is still running.
    pub running: bool,
    /// Element that receives keyboard input.
    pub focus: Focus,
    /// Owner of the todo state; the only thing that mutates it.
    controller: AppController,
    /// Entries list selection.
    entries: TodoListView,
    /// "Change your name:" field.
    name_field: TextInputField,
    /// "Add Todo:" field.
    add_field: TextInputField,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Whether the help modal is open.
    pub show_help: bool,
}

impl App {
    pub fn new(controller: AppController) -> Self {
        Self {
            running: true,
            focus: Focus::AddField,
            controller,
            entries: TodoListView::new(),
            name_field: TextInputField::new(NAME_FIELD_TITLE),
            add_field: TextInputField::new(ADD_FIELD_TITLE),
            notifications: Vec::new(),
            show_help: false,
        }
    }

    pub fn controller(&self) -> &AppController {
        &self.controller
    }

    pub fn name_field(&self) -> &TextInputField {
        &self.name_field
    }

    pub fn add_field(&self) -> &TextInputField {
        &self.add_field
    }

    pub fn selected_entry(&self) -> usize {
        self.entries.selected()
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        log::info!("Event loop started (tick {:?})", tick_rate);

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        match serde_json::to_string(self.controller.state()) {
            Ok(snapshot) => log::info!("Exiting with state: {snapshot}"),
            Err(e) => log::warn!("Failed to serialize final state: {e}"),
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Ctrl+C always quits
                if is_force_quit(&crossterm_event) {
                    self.handle_action(Action::Quit);
                    return;
                }

                // Priority 2: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 3: Focus ring
                if let Some(action) = map_focus_keys(&crossterm_event) {
                    self.handle_action(action);
                    return;
                }

                // Priority 4: Focused element
                if self.dispatch_focused_input(&crossterm_event) {
                    return;
                }

                // Priority 5: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Tick => self.on_tick(),
        }
    }

    /// Dispatch input to the focused element. Returns true if consumed.
    fn dispatch_focused_input(&mut self, event: &Event) -> bool {
        match self.focus {
            Focus::Entries => {
                let view = RootView::project(self.controller.state());
                match self.entries.handle_input(event, &view.rows) {
                    Some(action) => {
                        self.handle_action(action);
                        true
                    }
                    None => false,
                }
            }
            Focus::NameField | Focus::AddField => {
                if is_key(event, KeyCode::Esc) {
                    self.handle_action(Action::Focus(Focus::Entries));
                    return true;
                }
                let field = match self.focus {
                    Focus::NameField => &mut self.name_field,
                    _ => &mut self.add_field,
                };
                match field.handle_input(event) {
                    FieldInput::Submit => {
                        self.submit_field(self.focus);
                        true
                    }
                    FieldInput::Edited => true,
                    FieldInput::Ignored => false,
                }
            }
            Focus::Toggle => {
                if is_key(event, KeyCode::Enter) || is_key(event, KeyCode::Char(' ')) {
                    self.handle_action(Action::ToggleAnnoy);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Submit the given field's draft to the operation it is bound to.
    fn submit_field(&mut self, which: Focus) {
        let view = RootView::project(self.controller.state());
        let (field, node) = match which {
            Focus::NameField => (&mut self.name_field, view.name_field),
            Focus::AddField => (&mut self.add_field, view.add_field),
            _ => return,
        };

        let mut submitted = None;
        field.submit(|text| submitted = Some(text));
        if let Some(text) = submitted {
            self.handle_action(node.submit_action(text));
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        // Printable keys belong to the text field
        if self.focus.is_text_field() {
            return None;
        }

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
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Char('a') => Some(Action::Focus(Focus::AddField)),
                KeyCode::Char('n') => Some(Action::Focus(Focus::NameField)),
                KeyCode::Char('!') => Some(Action::ToggleAnnoy),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::AddTodo(text) => {
                let body = self.controller.add_todo(text).body().to_string();
                self.push_notification(
                    format!("Added \"{}\"", display_body(&body)),
                    NotificationLevel::Success,
                );
            }
            Action::RemoveTodo(index) => match self.controller.remove_todo(index) {
                Ok(removed) => {
                    self.entries.clamp(self.controller.todos().len());
                    self.push_notification(
                        format!("Removed \"{}\"", display_body(removed.body())),
                        NotificationLevel::Info,
                    );
                }
                Err(e) => {
                    log::warn!("Removal rejected: {e}");
                    self.push_notification(e.to_string(), NotificationLevel::Warning);
                }
            },
            Action::ChangeName(name) => {
                self.controller.change_name(name);
                self.push_notification(
                    format!("Now showing {}", self.controller.heading()),
                    NotificationLevel::Info,
                );
            }
            Action::ToggleAnnoy => {
                self.controller.toggle_annoy();
            }
            Action::Focus(focus) => self.focus = focus,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::SelectNext => self.entries.select_next(self.controller.todos().len()),
            Action::SelectPrev => self.entries.select_prev(),
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (max 3).
    ///
    /// Repeating a visible notification moves it to the end and restarts
    /// its TTL instead of stacking a copy.
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        self.notifications
            .retain(|n| !(n.message == message && n.level == level));

        self.notifications.push(Notification {
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL_TICKS,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let view = RootView::project(self.controller.state());
        let layout = AppLayout::compute(area);

        self.render_root(frame, layout.root, &view);
        self.render_toggle(frame, layout.toggle, &view);
        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_root(&self, frame: &mut Frame, area: Rect, view: &RootView) {
        let block = theme::root_block(view.variant);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let root = RootLayout::compute(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                view.heading.clone(),
                theme::root_heading(view.variant),
            )),
            root.heading,
        );

        self.entries.render(
            frame,
            root.entries,
            &view.rows,
            view.variant,
            self.focus == Focus::Entries,
        );
        self.name_field
            .render(frame, root.name_field, self.focus == Focus::NameField);
        self.add_field
            .render(frame, root.add_field, self.focus == Focus::AddField);
    }

    fn render_toggle(&self, frame: &mut Frame, area: Rect, view: &RootView) {
        let focused = self.focus == Focus::Toggle;
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("[{}]", view.toggle.label), theme::button(focused)),
            ])),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_indicator = if self.focus.is_text_field() {
            Span::styled(" INSERT ", theme::insert_badge())
        } else {
            Span::raw("")
        };

        let count = self.controller.todos().len();
        let status = Line::from(vec![
            Span::styled(" TODO ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.focus.label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(
                format!("{count} todo{}", if count == 1 { "" } else { "s" }),
                theme::muted(),
            ),
            Span::raw(" │ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":focus "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(":submit "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("Ctrl+C", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1.min(area.height.saturating_sub(height));

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("Tab / Shift+Tab", "Next / previous element"),
            ("Ctrl+C", "Quit"),
            ("", ""),
            ("Outside text fields:", ""),
            ("q", "Quit"),
            ("?", "Toggle this help"),
            ("a", "Focus the add field"),
            ("n", "Focus the name field"),
            ("!", "What the heck?"),
            ("", ""),
            ("Entries:", ""),
            ("j/k", "Select next / previous"),
            ("d / x / Del / Enter", "Remove selected todo"),
            ("", ""),
            ("Text fields:", ""),
            ("Enter", "Submit"),
            ("Esc", "Back to entries"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::heading())),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<22}", key),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", theme::highlight()),
            Span::raw(" or "),
            Span::styled("Esc", theme::highlight()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

fn is_force_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        })
    )
}

fn is_key(event: &Event, expected: KeyCode) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) if *code == expected
    )
}

fn map_focus_keys(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };
    match code {
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        _ => None,
    }
}

/// Bodies may be empty; show something visible in notifications.
fn display_body(body: &str) -> &str {
    if body.is_empty() {
        "(empty)"
    } else {
        body
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
