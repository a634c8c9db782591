//! Property-based tests for the todo controller
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property
//! ```
//!
//! ## Test Modules
//!
//! - `todo_props`: Tests for `AppController`
//!   - Sequential adds keep insertion order
//!   - In-range removal shrinks the list by one and keeps relative order
//!   - Out-of-range removal leaves the list unchanged
//!   - Toggling twice restores the flag
//!   - A renamed controller reports the new name
//!   - Ids are unique and increasing
//!
//! By default, proptest runs 256 cases per property. Override with
//! `PROPTEST_CASES`.

mod todo_props;
