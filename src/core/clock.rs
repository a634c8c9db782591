//! Date source for new todo records.
//!
//! `add_todo` stamps each record with whatever the clock returns at that
//! moment, so two records with the same body can carry different dates.

use chrono::format::{Item, StrftimeItems};
use chrono::Local;

/// Default format, e.g. `1/1/2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Produces the formatted date for a newly created record.
pub trait Clock {
    fn now_string(&self) -> String;
}

/// Local wall clock formatted with a `strftime` pattern.
#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    /// Build a clock with the given pattern.
    ///
    /// Returns `None` if the pattern contains an invalid specifier;
    /// chrono would otherwise panic while formatting.
    pub fn with_format(format: impl Into<String>) -> Option<Self> {
        let format = format.into();
        if is_valid_format(&format) {
            Some(Self { format })
        } else {
            None
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Clock for SystemClock {
    fn now_string(&self) -> String {
        Local::now().format(&self.format).to_string()
    }
}

/// A clock that always returns the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }
}

impl Clock for FixedClock {
    fn now_string(&self) -> String {
        self.0.clone()
    }
}

/// Whether `format` parses into chrono items without errors.
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
