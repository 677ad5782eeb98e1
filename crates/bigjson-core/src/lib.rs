//! # bigjson-core
//!
//! JSON parser and serializer that keeps integers exact beyond the IEEE-754
//! safe range.
//!
//! Standard JSON pipelines read every number into a double, silently rounding
//! integers past 2^53 - 1 (database ids, chain heights, snowflake ids). This
//! crate parses pure-integer tokens into arbitrary-precision integers, and on
//! the way back out emits any integer that no longer fits a double losslessly
//! as a decimal-digit string instead of a number literal.
//!
//! ## Quick start
//!
//! ```rust
//! use bigjson_core::{parse, stringify};
//!
//! let doc = parse(r#"{"id":12345678901234567890,"name":"x"}"#).unwrap();
//! let json = stringify(&doc).unwrap();
//! assert_eq!(json, r#"{"id":"12345678901234567890","name":"x"}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] tree and its serde_json boundary conversions
//! - [`error`] — [`SyntaxError`] (parse) and [`EncodeError`] (stringify)
//!
//! Lexing, number classification, and serialization are internal; [`parse`]
//! and [`stringify`] are the whole surface. Both are pure synchronous
//! functions with no state shared across calls, so concurrent use from
//! independent threads is safe.

pub mod error;
pub mod value;

mod lexer;
mod number;
mod parser;
mod serializer;

pub use error::{EncodeError, SyntaxError};
pub use num_bigint::BigInt;
pub use number::MAX_SAFE_INT;
pub use parser::parse;
pub use serializer::stringify;
pub use value::{Object, Value};

/// Maximum nesting depth accepted by [`parse`] and [`stringify`]. Deeper
/// structures fail with an error instead of exhausting the stack.
pub const MAX_DEPTH: usize = 1024;
