//! Controller Scenario Tests
//!
//! End-to-end sequences of mutations and the display tree they project.

use rstest::rstest;

use crate::core::{TodoError, TodoId};
use crate::tests::common::fixtures::{
    bodies, create_populated_controller, create_test_controller, FIXED_DATE,
};
use crate::tui::view::{Presentation, RootView};

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_kevin_scenario() {
    let mut controller = create_test_controller("Kevin");
    controller.add_todo("buy milk");
    controller.add_todo("walk dog");

    let removed = controller.remove_todo(0).unwrap();
    assert_eq!(removed.body(), "buy milk");

    assert_eq!(bodies(&controller), vec!["walk dog"]);
    assert_eq!(controller.todos()[0].date(), FIXED_DATE);
    assert_eq!(controller.heading(), "Kevin's Todo List");
}

#[test]
fn test_rename_changes_projected_heading() {
    let mut controller = create_test_controller("Kevin");
    controller.change_name("Ana");

    let view = RootView::project(controller.state());
    assert_eq!(view.heading, "Ana's Todo List");
}

#[test]
fn test_toggle_switches_presentation_both_ways() {
    let mut controller = create_test_controller("Kevin");

    assert!(controller.toggle_annoy());
    let view = RootView::project(controller.state());
    assert_eq!(view.variant, Presentation::Annoying);
    assert_eq!(view.variant.class_name(), "annoying");

    assert!(!controller.toggle_annoy());
    let view = RootView::project(controller.state());
    assert_eq!(view.variant.class_name(), "");
}

#[test]
fn test_rows_follow_removals() {
    let mut controller = create_populated_controller(&["a", "b", "c"]);
    controller.remove_todo(1).unwrap();

    let view = RootView::project(controller.state());
    let ordinals: Vec<usize> = view.rows.iter().map(|r| r.ordinal).collect();
    assert_eq!(ordinals, vec![0, 1]);
    assert_eq!(view.rows[1].body, "c");
}

#[test]
fn test_name_and_flag_survive_list_changes() {
    let mut controller = create_test_controller("Kevin");
    controller.change_name("Ana");
    controller.toggle_annoy();
    controller.add_todo("x");
    controller.remove_todo(0).unwrap();

    assert_eq!(controller.name(), "Ana");
    assert!(controller.should_annoy());
}

// =============================================================================
// Table-driven removal
// =============================================================================

#[rstest]
#[case(0, &["b", "c"])]
#[case(1, &["a", "c"])]
#[case(2, &["a", "b"])]
fn test_remove_by_index(#[case] index: usize, #[case] expected: &[&str]) {
    let mut controller = create_populated_controller(&["a", "b", "c"]);
    controller.remove_todo(index).unwrap();
    assert_eq!(bodies(&controller), expected);
}

#[rstest]
#[case(3)]
#[case(4)]
#[case(usize::MAX)]
fn test_remove_out_of_range_is_rejected(#[case] index: usize) {
    let mut controller = create_populated_controller(&["a", "b", "c"]);
    let err = controller.remove_todo(index).unwrap_err();

    assert_eq!(err, TodoError::IndexOutOfRange { index, len: 3 });
    assert_eq!(bodies(&controller), vec!["a", "b", "c"]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("ünïcödé ✓")]
fn test_any_name_is_accepted(#[case] name: &str) {
    let mut controller = create_test_controller("Kevin");
    controller.change_name(name);
    assert_eq!(controller.name(), name);
    assert_eq!(controller.heading(), format!("{name}'s Todo List"));
}

#[test]
fn test_remove_by_id_after_reorder() {
    let mut controller = create_populated_controller(&["a", "b", "c"]);
    let c_id = controller.todos()[2].id();
    controller.remove_todo(0).unwrap();

    let removed = controller.remove_todo_by_id(c_id).unwrap();
    assert_eq!(removed.body(), "c");
    assert_eq!(bodies(&controller), vec!["b"]);

    assert_eq!(
        controller.remove_todo_by_id(c_id).unwrap_err(),
        TodoError::UnknownId(c_id)
    );
    assert_eq!(
        controller.remove_todo_by_id(TodoId(999)).unwrap_err(),
        TodoError::UnknownId(TodoId(999))
    );
}
