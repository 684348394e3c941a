//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random keys, values and command
//! sequences that stay within the command-language grammar.

use nestkv_core::{Command, Value};
use proptest::prelude::*;

/// Strategy for generating valid variable names.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,15}").expect("Invalid regex")
}

/// Strategy for generating values of every type.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        (-1.0e6f64..1.0e6f64).prop_map(Value::Float),
        prop::string::string_regex("[a-zA-Z0-9 ]{0,12}")
            .expect("Invalid regex")
            .prop_map(Value::Str),
    ]
}

/// Strategy for generating a single command, weighted like a real session.
///
/// END is excluded: it is a session-control signal, and sequences that stop
/// half-way make poor property inputs.
pub fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| Command::Set { key, value }),
        3 => key_strategy().prop_map(|key| Command::Get { key }),
        1 => key_strategy().prop_map(|key| Command::Unset { key }),
        1 => value_strategy().prop_map(|value| Command::Counts { value }),
        1 => value_strategy().prop_map(|value| Command::Find { value }),
        1 => Just(Command::Begin),
        1 => Just(Command::Commit),
        1 => Just(Command::Rollback),
    ]
}

/// Strategy for mutation-only commands (SET/UNSET).
///
/// For tests that manage the transaction structure themselves and must not
/// have the generated input open or close scopes underneath them.
pub fn write_command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| Command::Set { key, value }),
        1 => key_strategy().prop_map(|key| Command::Unset { key }),
    ]
}

/// Strategy for generating a sequence of commands.
pub fn command_sequence_strategy(
    min_commands: usize,
    max_commands: usize,
) -> impl Strategy<Value = Vec<Command>> {
    prop::collection::vec(command_strategy(), min_commands..max_commands)
}

/// Strategy for generating a sequence of mutation-only commands.
pub fn write_sequence_strategy(
    min_commands: usize,
    max_commands: usize,
) -> impl Strategy<Value = Vec<Command>> {
    prop::collection::vec(write_command_strategy(), min_commands..max_commands)
}
