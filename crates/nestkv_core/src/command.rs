//! Command and outcome models.

use crate::value::Value;

/// A structured command, produced by the parser layer.
///
/// This is a closed union: the engine receives only well-formed commands and
/// never validates syntax itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Write `key = value` into the current scope.
    Set {
        /// Variable name.
        key: String,
        /// Value to store.
        value: Value,
    },
    /// Read a variable from the effective state.
    Get {
        /// Variable name.
        key: String,
    },
    /// Remove a variable from the current scope.
    Unset {
        /// Variable name.
        key: String,
    },
    /// Count effective-state entries equal to a value.
    Counts {
        /// Value to compare against.
        value: Value,
    },
    /// List keys whose effective value equals a value.
    Find {
        /// Value to compare against.
        value: Value,
    },
    /// Open a new nested transaction scope.
    Begin,
    /// Collapse the open transaction scopes into committed state.
    Commit,
    /// Discard the innermost open transaction scope.
    Rollback,
    /// Terminate the session.
    End,
}

/// The result of executing a single command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// GET result. `None` means the key is absent from the effective state.
    Value(Option<Value>),
    /// COUNTS result.
    Count(usize),
    /// FIND result, keys in ascending lexical order.
    Keys(Vec<String>),
    /// The command completed with nothing to report.
    Done,
    /// END: stop accepting further commands.
    ///
    /// A control signal consumed by the caller's loop exit condition, not an
    /// error and not a mutation.
    Halted,
}

impl Outcome {
    /// Whether this outcome terminates the session.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        matches!(self, Outcome::Halted)
    }
}
