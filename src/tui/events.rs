/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse/resize).
    Input(crossterm::event::Event),
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // State mutations
    AddTodo(String),
    /// Remove by the row's ordinal position at render time.
    RemoveTodo(usize),
    ChangeName(String),
    ToggleAnnoy,

    // Navigation
    Focus(Focus),
    FocusNext,
    FocusPrev,
    SelectNext,
    SelectPrev,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Which interactive element has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Entries,
    NameField,
    AddField,
    Toggle,
}

impl Focus {
    pub const ALL: [Focus; 4] = [
        Focus::Entries,
        Focus::NameField,
        Focus::AddField,
        Focus::Toggle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Entries => "Entries",
            Focus::NameField => "Name",
            Focus::AddField => "Add",
            Focus::Toggle => "Toggle",
        }
    }

    /// Text fields swallow printable keys, so global bindings are off.
    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::NameField | Focus::AddField)
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
