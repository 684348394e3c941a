//! Test fixtures and engine helpers.

use nestkv_core::{Engine, Value};

/// Creates an engine whose committed state holds the given entries.
pub fn seeded_engine(entries: &[(&str, Value)]) -> Engine {
    let mut engine = Engine::new();
    for (key, value) in entries {
        engine.set(*key, value.clone());
    }
    engine
}

/// Runs a test with a fresh engine.
///
/// # Example
///
/// ```rust,ignore
/// use nestkv_testkit::with_engine;
///
/// #[test]
/// fn my_test() {
///     with_engine(|engine| {
///         engine.set("A", nestkv_core::Value::Int(1));
///         // ... test operations
///     });
/// }
/// ```
pub fn with_engine<F, R>(f: F) -> R
where
    F: FnOnce(&mut Engine) -> R,
{
    let mut engine = Engine::new();
    f(&mut engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_engine_commits_entries() {
        let engine = seeded_engine(&[("A", Value::Int(1)), ("B", Value::Str("x".into()))]);
        assert_eq!(engine.committed().len(), 2);
        assert_eq!(engine.get("B"), Some(&Value::Str("x".into())));
        assert!(!engine.in_transaction());
    }
}
