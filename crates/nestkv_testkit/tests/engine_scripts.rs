//! End-to-end scripted sessions over parser + engine.

use nestkv_core::{Engine, Value};
use nestkv_testkit::prelude::*;

#[test]
fn non_transacted_session() {
    let mut engine = Engine::new();
    let outputs = run_script(
        &mut engine,
        "GET A\n\
         SET A 10\n\
         GET A\n\
         COUNTS 10\n\
         SET B 20\n\
         SET C 10\n\
         COUNTS 10\n\
         UNSET B\n\
         GET B\n",
    );
    assert_eq!(outputs, vec!["NULL", "10", "1", "2", "NULL"]);
    assert_eq!(engine.committed().len(), 2);
    assert_eq!(engine.committed().get("A"), Some(&Value::Int(10)));
}

#[test]
fn nested_session_with_rollback_then_commit() {
    let mut engine = Engine::new();
    let outputs = run_script(
        &mut engine,
        "BEGIN\n\
         SET A 10\n\
         BEGIN\n\
         SET A 20\n\
         BEGIN\n\
         SET A 30\n\
         GET A\n\
         ROLLBACK\n\
         GET A\n\
         COMMIT\n\
         GET A\n",
    );
    assert_eq!(outputs, vec!["30", "20", "20"]);
    assert!(!engine.in_transaction());
    assert_eq!(engine.committed().len(), 1);
    assert_eq!(engine.committed().get("A"), Some(&Value::Int(20)));
}

#[test]
fn overwrite_nest_rollback_collapse() {
    let mut engine = Engine::new();
    let outputs = run_script(
        &mut engine,
        "SET A 10\n\
         SET A 11\n\
         GET A\n\
         BEGIN\n\
         BEGIN\n\
         SET A 30\n\
         GET A\n\
         ROLLBACK\n\
         GET A\n\
         COMMIT\n\
         GET A\n",
    );
    assert_eq!(outputs, vec!["11", "30", "11", "11"]);
    assert_eq!(engine.depth(), 0);
    assert_eq!(engine.committed().get("A"), Some(&Value::Int(11)));
}

#[test]
fn find_returns_keys_in_lexical_order() {
    let outputs = script_outputs(
        "SET B 10\n\
         SET A 10\n\
         SET C 20\n\
         FIND 10\n\
         FIND 99\n",
    );
    assert_eq!(outputs, vec!["A B", ""]);
}

#[test]
fn counts_and_find_are_type_sensitive() {
    let outputs = script_outputs(
        "SET A 10\n\
         SET B \"10\"\n\
         SET C 10.0\n\
         COUNTS 10\n\
         COUNTS \"10\"\n\
         COUNTS 10.0\n\
         FIND 10\n",
    );
    assert_eq!(outputs, vec!["1", "1", "1", "A"]);
}

#[test]
fn transactional_unset_masks_without_touching_committed() {
    let mut engine = Engine::new();
    let outputs = run_script(
        &mut engine,
        "SET A 1\n\
         BEGIN\n\
         UNSET A\n\
         GET A\n\
         ROLLBACK\n\
         GET A\n",
    );
    assert_eq!(outputs, vec!["NULL", "1"]);
    assert_eq!(engine.committed().get("A"), Some(&Value::Int(1)));
}

#[test]
fn unset_of_never_set_key_inside_transaction_is_fine() {
    let outputs = script_outputs(
        "BEGIN\n\
         UNSET ghost\n\
         GET ghost\n",
    );
    assert_eq!(outputs, vec!["NULL"]);
}

#[test]
fn depth_zero_conditions_render_and_session_continues() {
    let outputs = script_outputs(
        "ROLLBACK\n\
         COMMIT\n\
         UNSET ghost\n\
         SET A 1\n\
         GET A\n",
    );
    assert_eq!(
        outputs,
        vec!["NotInTransaction", "NotInTransaction", "Var ghost not found", "1"]
    );
}

#[test]
fn full_collapse_leaves_idle_engine() {
    let mut engine = Engine::new();
    run_script(&mut engine, "BEGIN\nSET A 1\nCOMMIT\n");
    assert!(!engine.in_transaction());
    assert_eq!(engine.committed().len(), 1);
    assert_eq!(engine.committed().get("A"), Some(&Value::Int(1)));
}

#[test]
fn end_stops_the_session_cleanly() {
    let mut engine = Engine::new();
    let outputs = run_script(
        &mut engine,
        "SET A 1\n\
         BEGIN\n\
         SET A 2\n\
         END\n\
         GET A\n",
    );
    assert!(outputs.is_empty());
    // END does not mutate state: the open scope is still there.
    assert_eq!(engine.depth(), 1);
    assert_eq!(engine.get("A"), Some(&Value::Int(2)));
}

#[test]
fn seeded_engine_participates_in_scripts() {
    let mut engine = seeded_engine(&[("A", Value::Int(1)), ("B", Value::Int(1))]);
    let outputs = run_script(&mut engine, "COUNTS 1\nFIND 1\n");
    assert_eq!(outputs, vec!["2", "A B"]);
}
