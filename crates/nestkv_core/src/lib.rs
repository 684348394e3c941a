//! # NestKV Core
//!
//! Transaction engine and command model for NestKV, a minimal in-process
//! transactional key-value store with arbitrarily nested transactions.
//!
//! This crate provides:
//! - [`Value`]: the dynamic value type (int, float, string)
//! - [`Command`] / [`Outcome`]: the closed command union and its results
//! - [`Engine`]: committed state plus an ordered stack of transaction
//!   layers, with a deterministic outer-to-inner fold for reads
//!
//! Parsing command text and rendering outcomes are the concerns of the
//! `nestkv_query` and `nestkv_cli` crates.
//!
//! ## Usage
//!
//! ```
//! use nestkv_core::{Engine, Value};
//!
//! let mut engine = Engine::new();
//! engine.set("A", Value::Int(10));
//! engine.begin();
//! engine.set("A", Value::Int(20));
//! assert_eq!(engine.get("A"), Some(&Value::Int(20)));
//! engine.rollback()?;
//! assert_eq!(engine.get("A"), Some(&Value::Int(10)));
//! # Ok::<(), nestkv_core::EngineError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod engine;
mod error;
mod layer;
mod value;

pub use command::{Command, Outcome};
pub use engine::Engine;
pub use error::{CoreResult, EngineError};
pub use layer::{Layer, Write};
pub use value::Value;
