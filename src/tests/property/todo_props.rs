//! Property-based tests for the todo controller
//!
//! Tests invariants:
//! - Bodies come back in the order they were added
//! - Removal at `i` equals `Vec::remove(i)` on the bodies
//! - Name and annoy flag are independent of list operations

use proptest::prelude::*;

use crate::core::TodoError;
use crate::tests::common::fixtures::{bodies, create_test_controller};
use crate::tui::view::RootView;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Any todo body, including empty and non-ASCII text
fn arb_body() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z ]{1,20}",
        "\\PC{0,30}",
    ]
}

fn arb_bodies() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_body(), 0..20)
}

/// A non-empty list of bodies plus an index inside it
fn arb_bodies_and_index() -> impl Strategy<Value = (Vec<String>, usize)> {
    prop::collection::vec(arb_body(), 1..20)
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..len)
        })
}

proptest! {
    // ========================================================================
    // Ordering properties
    // ========================================================================

    /// Property: sequential adds yield the bodies in order
    #[test]
    fn prop_add_keeps_insertion_order(input in arb_bodies()) {
        let mut controller = create_test_controller("Kevin");
        for body in &input {
            controller.add_todo(body.clone());
        }
        prop_assert_eq!(bodies(&controller), input);
    }

    /// Property: removal at an in-range index matches Vec::remove
    #[test]
    fn prop_remove_in_range((input, index) in arb_bodies_and_index()) {
        let mut controller = create_test_controller("Kevin");
        for body in &input {
            controller.add_todo(body.clone());
        }

        let removed = controller.remove_todo(index);
        prop_assert!(removed.is_ok());
        let removed = removed.unwrap();

        let mut expected = input.clone();
        let expected_body = expected.remove(index);
        prop_assert_eq!(removed.body(), expected_body.as_str());
        prop_assert_eq!(controller.todos().len(), input.len() - 1);
        prop_assert_eq!(bodies(&controller), expected);
    }

    /// Property: out-of-range removal is rejected and changes nothing
    #[test]
    fn prop_remove_out_of_range(input in arb_bodies(), extra in 0usize..100) {
        let mut controller = create_test_controller("Kevin");
        for body in &input {
            controller.add_todo(body.clone());
        }

        let index = input.len() + extra;
        let err = controller.remove_todo(index).unwrap_err();
        prop_assert_eq!(err, TodoError::IndexOutOfRange { index, len: input.len() });
        prop_assert_eq!(bodies(&controller), input);
    }

    // ========================================================================
    // Identity properties
    // ========================================================================

    /// Property: ids are strictly increasing in list order
    #[test]
    fn prop_ids_increase(input in arb_bodies(), removals in prop::collection::vec(0usize..20, 0..5)) {
        let mut controller = create_test_controller("Kevin");
        for body in &input {
            controller.add_todo(body.clone());
        }
        for index in removals {
            let _ = controller.remove_todo(index);
        }
        controller.add_todo("last");

        let ids: Vec<u64> = controller.todos().iter().map(|t| t.id().0).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: every projected row is bound to its own position
    #[test]
    fn prop_rows_bound_to_ordinals(input in arb_bodies()) {
        let mut controller = create_test_controller("Kevin");
        for body in &input {
            controller.add_todo(body.clone());
        }

        let view = RootView::project(controller.state());
        prop_assert_eq!(view.rows.len(), input.len());
        for (i, row) in view.rows.iter().enumerate() {
            prop_assert_eq!(row.ordinal, i);
            prop_assert_eq!(&row.body, &input[i]);
        }
    }

    // ========================================================================
    // Independence properties
    // ========================================================================

    /// Property: toggling twice restores the flag
    #[test]
    fn prop_double_toggle_restores(start in any::<bool>()) {
        let mut controller = create_test_controller("Kevin");
        if start {
            controller.toggle_annoy();
        }
        controller.toggle_annoy();
        controller.toggle_annoy();
        prop_assert_eq!(controller.should_annoy(), start);
    }

    /// Property: change_name then name() returns the same text
    #[test]
    fn prop_rename_roundtrip(name in "\\PC{0,30}", input in arb_bodies()) {
        let mut controller = create_test_controller("Kevin");
        controller.change_name(name.clone());
        for body in &input {
            controller.add_todo(body.clone());
        }
        prop_assert_eq!(controller.name(), name.as_str());
        prop_assert_eq!(controller.heading(), format!("{}'s Todo List", name));
    }
}
