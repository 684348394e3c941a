//! Benchmark support for NestKV.
//!
//! Helpers for building engines with pre-populated committed state and
//! deep transaction stacks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use nestkv_core::{Engine, Value};

/// Creates an engine with `entries` committed integer entries
/// (`key_0` .. `key_{entries-1}`).
#[must_use]
pub fn seeded_engine(entries: usize) -> Engine {
    let mut engine = Engine::new();
    for i in 0..entries {
        engine.set(format!("key_{i}"), Value::Int(i as i64));
    }
    engine
}

/// Creates an engine with `depth` open layers of `width` writes each.
///
/// Every fourth write per layer is a tombstone, so folds exercise both
/// override and deletion paths.
#[must_use]
pub fn stacked_engine(depth: usize, width: usize) -> Engine {
    let mut engine = seeded_engine(width);
    for level in 0..depth {
        engine.begin();
        for i in 0..width {
            if i % 4 == 0 {
                let _ = engine.unset(&format!("key_{i}"));
            } else {
                engine.set(format!("key_{i}"), Value::Int((level * width + i) as i64));
            }
        }
    }
    engine
}
