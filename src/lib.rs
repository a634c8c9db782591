//! todo-tui - a todo list and name editor for the terminal
//!
//! The library holds the todo state and its controller (`core`), the
//! configuration file (`config`) and the ratatui front end (`tui`).

pub mod config;
pub mod core;
pub mod error;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
