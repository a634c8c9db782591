//! Crate-internal test suites.
//!
//! - `common`: shared fixtures
//! - `unit`: scenario and table-driven tests over the controller and view
//! - `property`: `proptest` invariants over the controller

mod common;
mod property;
mod unit;
