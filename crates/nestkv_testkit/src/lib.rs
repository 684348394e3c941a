//! # NestKV Testkit
//!
//! Test utilities for NestKV.
//!
//! This crate provides:
//! - Test fixtures and engine helpers
//! - Scripted-session runners for golden-style assertions
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nestkv_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_script() {
//!     let outputs = script_outputs("SET A 10\nGET A\n");
//!     assert_eq!(outputs, vec!["10"]);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod script;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::script::*;
}

pub use fixtures::*;
pub use generators::*;
pub use script::*;
