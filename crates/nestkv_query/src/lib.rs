//! # NestKV Query
//!
//! Lexer and parser for the line-oriented NestKV command language.
//!
//! The grammar, one command per line:
//!
//! ```text
//! SET <var> <value> | GET <var> | UNSET <var>
//! COUNTS <value>    | FIND <value>
//! BEGIN | COMMIT | ROLLBACK | END
//! ```
//!
//! `<var>` matches `[A-Za-z_][A-Za-z0-9_]*`; `<value>` is a signed number
//! (a decimal point selects a float) or a double-quoted string. Keywords
//! are uppercase and reserved.
//!
//! The output of [`parse`] is a `nestkv_core::Command`; the engine only
//! ever consumes well-formed commands.
//!
//! ## Usage
//!
//! ```
//! use nestkv_core::{Command, Value};
//! use nestkv_query::parse;
//!
//! let command = parse("SET A 10")?;
//! assert_eq!(command, Command::Set { key: "A".into(), value: Value::Int(10) });
//! # Ok::<(), nestkv_query::ParseError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseResult, Span};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::parse;
