//! The transaction engine.

use crate::command::{Command, Outcome};
use crate::error::{CoreResult, EngineError};
use crate::layer::{Layer, Write};
use crate::value::Value;
use std::collections::HashMap;
use tracing::debug;

/// The transactional key-value engine.
///
/// `Engine` owns the committed state and an ordered stack of pending
/// transaction layers (index 0 = outermost, last = innermost). It executes
/// one command at a time via [`Engine::execute`]; a command always runs to
/// completion, so no partial application is ever observable.
///
/// ## Commit policy
///
/// COMMIT at any nesting depth folds the entire stack into committed state
/// and resets the depth to 0; a nested COMMIT never leaves outer scopes
/// open. ROLLBACK, by contrast, discards exactly one scope.
///
/// ## Concurrency
///
/// The engine is strictly sequential and holds no interior locking. When
/// embedded in a concurrent host it requires external serialization: one
/// engine per logical session, never shared across concurrent callers.
#[derive(Debug, Default)]
pub struct Engine {
    /// Process-lifetime baseline, mutated only by top-level SET/UNSET or a
    /// commit collapse.
    committed: HashMap<String, Value>,
    /// Open transaction layers, outermost first. Empty iff not in a
    /// transaction.
    stack: Vec<Layer>,
}

impl Engine {
    /// Creates an engine with empty committed state and no open transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a single command against the current state.
    pub fn execute(&mut self, command: Command) -> CoreResult<Outcome> {
        match command {
            Command::Set { key, value } => {
                self.set(key, value);
                Ok(Outcome::Done)
            }
            Command::Get { key } => Ok(Outcome::Value(self.get(&key).cloned())),
            Command::Unset { key } => {
                self.unset(&key)?;
                Ok(Outcome::Done)
            }
            Command::Counts { value } => Ok(Outcome::Count(self.counts(&value))),
            Command::Find { value } => Ok(Outcome::Keys(self.find(&value))),
            Command::Begin => {
                self.begin();
                Ok(Outcome::Done)
            }
            Command::Commit => {
                self.commit()?;
                Ok(Outcome::Done)
            }
            Command::Rollback => {
                self.rollback()?;
                Ok(Outcome::Done)
            }
            Command::End => Ok(Outcome::Halted),
        }
    }

    /// Whether any transaction scope is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Current nesting depth (0 when not in a transaction).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the committed baseline state.
    #[must_use]
    pub fn committed(&self) -> &HashMap<String, Value> {
        &self.committed
    }

    /// Writes `key = value` into the current scope.
    ///
    /// Inside a transaction this touches only the innermost layer; the
    /// committed state and outer layers are unaffected until a collapse.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        match self.stack.last_mut() {
            Some(layer) => layer.put(key, value),
            None => {
                self.committed.insert(key.into(), value);
            }
        }
    }

    /// Reads a key from the effective state.
    ///
    /// Layers are consulted innermost first; a tombstone hides the key from
    /// all enclosing scopes unless a more-inner layer re-set it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        for layer in self.stack.iter().rev() {
            match layer.write(key) {
                Some(Write::Put(value)) => return Some(value),
                Some(Write::Tombstone) => return None,
                None => {}
            }
        }
        self.committed.get(key)
    }

    /// Removes a key from the current scope.
    ///
    /// Inside a transaction this records a tombstone in the innermost layer
    /// and always succeeds, even for a key that never existed. At top level
    /// the key must exist in committed state.
    pub fn unset(&mut self, key: &str) -> CoreResult<()> {
        if let Some(layer) = self.stack.last_mut() {
            layer.unset(key);
            return Ok(());
        }
        if self.committed.remove(key).is_none() {
            return Err(EngineError::unknown_key(key));
        }
        Ok(())
    }

    /// Counts effective-state entries whose value equals `value`.
    ///
    /// Equality is type-sensitive: the number 10 and the string "10" are
    /// distinct.
    #[must_use]
    pub fn counts(&self, value: &Value) -> usize {
        self.effective_state()
            .values()
            .filter(|v| *v == value)
            .count()
    }

    /// Lists keys whose effective value equals `value`, in ascending lexical
    /// order.
    #[must_use]
    pub fn find(&self, value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = self
            .effective_state()
            .into_iter()
            .filter(|(_, v)| v == value)
            .map(|(k, _)| k)
            .collect();
        keys.sort();
        keys
    }

    /// Opens a new nested transaction scope. Always succeeds, at any depth.
    pub fn begin(&mut self) {
        self.stack.push(Layer::new());
        debug!(depth = self.depth(), "opened transaction scope");
    }

    /// Discards the innermost open scope.
    ///
    /// Writes made in the discarded layer vanish entirely; outer layers and
    /// committed state are unaffected.
    pub fn rollback(&mut self) -> CoreResult<()> {
        let layer = self.stack.pop().ok_or(EngineError::NotInTransaction)?;
        debug!(
            discarded = layer.write_count(),
            depth = self.depth(),
            "rolled back innermost scope"
        );
        Ok(())
    }

    /// Collapses the entire transaction stack into committed state.
    ///
    /// The fold runs outermost to innermost, later layers overriding
    /// earlier ones, tombstones applied as deletions. Afterwards the stack
    /// is empty and the engine is no longer in a transaction, regardless of
    /// the nesting depth at the time of the call.
    pub fn commit(&mut self) -> CoreResult<()> {
        if !self.in_transaction() {
            return Err(EngineError::NotInTransaction);
        }
        let depth = self.depth();
        self.committed = self.effective_state();
        self.stack.clear();
        debug!(depth, "collapsed transaction stack into committed state");
        Ok(())
    }

    /// Materializes the effective state: the committed baseline folded with
    /// every open layer from outermost to innermost.
    ///
    /// A `Put` overrides the key, a tombstone removes it unless a later,
    /// more-inner layer re-set it. This is the view GET, COUNTS and FIND
    /// observe; it is computed on demand and reads never mutate the engine.
    #[must_use]
    pub fn effective_state(&self) -> HashMap<String, Value> {
        let mut state = self.committed.clone();
        for layer in &self.stack {
            for (key, write) in layer.writes() {
                match write {
                    Write::Put(value) => {
                        state.insert(key.clone(), value.clone());
                    }
                    Write::Tombstone => {
                        state.remove(key);
                    }
                }
            }
        }
        state
    }
}
