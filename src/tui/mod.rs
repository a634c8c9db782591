//! Terminal front end: event loop, display tree and painters.

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod view;
pub mod views;
pub mod widgets;

pub use app::App;
