//! Property tests over the transaction engine.

use nestkv_core::{Command, Engine, EngineError};
use nestkv_testkit::prelude::*;
use proptest::prelude::*;

/// Applies every command, ignoring recoverable conditions.
fn apply_all(engine: &mut Engine, commands: Vec<Command>) {
    for command in commands {
        let _ = engine.execute(command);
    }
}

proptest! {
    #[test]
    fn set_then_get_returns_the_value_at_any_depth(
        key in key_strategy(),
        value in value_strategy(),
        depth in 0usize..4,
    ) {
        let mut engine = Engine::new();
        for _ in 0..depth {
            engine.begin();
        }
        engine.set(key.as_str(), value.clone());
        prop_assert_eq!(engine.get(&key), Some(&value));
    }

    #[test]
    fn rollback_restores_the_prior_effective_state(
        setup in write_sequence_strategy(0, 12),
        inside in write_sequence_strategy(1, 12),
    ) {
        let mut engine = Engine::new();
        apply_all(&mut engine, setup);

        let before = engine.effective_state();
        engine.begin();
        apply_all(&mut engine, inside);
        engine.rollback().unwrap();

        prop_assert_eq!(engine.effective_state(), before);
    }

    #[test]
    fn commit_collapse_equals_the_documented_fold(
        commands in command_sequence_strategy(0, 24),
    ) {
        let mut engine = Engine::new();
        apply_all(&mut engine, commands);
        engine.begin();

        let folded = engine.effective_state();
        engine.commit().unwrap();

        prop_assert_eq!(engine.depth(), 0);
        prop_assert_eq!(engine.committed(), &folded);
    }

    #[test]
    fn depth_zero_commit_and_rollback_always_fail(
        writes in write_sequence_strategy(0, 8),
    ) {
        let mut engine = Engine::new();
        apply_all(&mut engine, writes);

        prop_assert_eq!(engine.commit(), Err(EngineError::NotInTransaction));
        prop_assert_eq!(engine.rollback(), Err(EngineError::NotInTransaction));
    }

    #[test]
    fn transactional_unset_never_fails(
        commands in command_sequence_strategy(0, 16),
        key in key_strategy(),
    ) {
        let mut engine = Engine::new();
        apply_all(&mut engine, commands);
        engine.begin();

        prop_assert!(engine.unset(&key).is_ok());
        prop_assert_eq!(engine.get(&key), None);
    }

    #[test]
    fn arbitrary_sequences_keep_the_stack_invariant(
        commands in command_sequence_strategy(0, 32),
    ) {
        let mut engine = Engine::new();
        apply_all(&mut engine, commands);

        prop_assert_eq!(engine.in_transaction(), engine.depth() > 0);
    }

    #[test]
    fn counts_agrees_with_find(
        commands in command_sequence_strategy(0, 24),
        value in value_strategy(),
    ) {
        let mut engine = Engine::new();
        apply_all(&mut engine, commands);

        let keys = engine.find(&value);
        prop_assert_eq!(engine.counts(&value), keys.len());

        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }
}
