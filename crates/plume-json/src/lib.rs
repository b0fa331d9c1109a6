//! # plume-json
//!
//! Embeddable JSON text library: parse JSON text into an owned value tree,
//! query and mutate the tree, and serialize it back to compact text.
//!
//! The library is consumed programmatically by a host application — there is
//! no CLI and no streaming layer. Parsing is single-threaded, synchronous,
//! and reentrant: every failure is a per-call [`JsonError`] carrying the byte
//! offset where it was detected.
//!
//! ## Quick start
//!
//! ```rust
//! use plume_json::{parse, serialize, Value};
//!
//! let mut doc = parse(r#"{"name":"hello world","tags":[1,2]}"#).unwrap();
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("hello world"));
//!
//! doc.get_mut("tags").unwrap().append(Value::from(3.0));
//! assert_eq!(serialize(&doc), r#"{"name":"hello world","tags":[1,2,3]}"#);
//! ```
//!
//! ## Dialect
//!
//! This is a deliberately narrow JSON dialect, inherited from the library's
//! lineage and kept explicit rather than silently widened:
//!
//! - Inter-token whitespace is the space character only (no tab/newline).
//! - Numbers are doubles with an optional sign and at most one decimal
//!   point; exponent notation is rejected.
//! - String escapes are `\b \f \n \r \t \" \\`; `\uXXXX` is not decoded.
//! - No trailing commas, no comments.
//! - Serialized strings are emitted verbatim (no re-escaping); see
//!   [`serializer`] for the fidelity consequences.
//!
//! ## Modules
//!
//! - [`cursor`] — position tracker over source text and the scalar scanners
//! - [`parser`] — recursive-descent dispatcher with a nesting-depth ceiling
//! - [`value`] — the [`Value`] tree, query accessors, and mutation API
//! - [`serializer`] — compact rendering back to text
//! - [`io`] — thin file load/dump adapters
//! - [`error`] — [`JsonError`] kinds with byte offsets

pub mod cursor;
pub mod error;
pub mod io;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{JsonError, Result};
pub use io::{dump_to_file, parse_file};
pub use parser::{parse, parse_with_depth, DEFAULT_MAX_DEPTH};
pub use serializer::serialize;
pub use value::Value;
