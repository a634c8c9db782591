//! Test Fixtures
//!
//! Controllers with a fixed clock, plus pre-populated lists.

use crate::core::{AppController, FixedClock};
use crate::tui::App;

/// Date every fixture record is stamped with.
pub const FIXED_DATE: &str = "3/14/2024";

// =============================================================================
// Controller Fixtures
// =============================================================================

/// Fresh controller for `name` with a fixed clock.
pub fn create_test_controller(name: &str) -> AppController {
    AppController::new(name, Box::new(FixedClock::new(FIXED_DATE)))
}

/// Controller already holding one record per body, in order.
pub fn create_populated_controller(bodies: &[&str]) -> AppController {
    let mut controller = create_test_controller("Kevin");
    for body in bodies {
        controller.add_todo(*body);
    }
    controller
}

/// Bodies of the controller's records, in list order.
pub fn bodies(controller: &AppController) -> Vec<String> {
    controller
        .todos()
        .iter()
        .map(|t| t.body().to_string())
        .collect()
}

// =============================================================================
// TUI Fixtures
// =============================================================================

/// App around a fixed-clock controller.
pub fn create_test_app(bodies: &[&str]) -> App {
    App::new(create_populated_controller(bodies))
}
