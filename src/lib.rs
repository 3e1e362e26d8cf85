//! A JSON decoder for RFC 8259 text with path-addressed extraction.
//!
//! Two operations share one byte-level scanner:
//!
//! - [`decode`] materialises a whole document into a [`Value`] tree.
//! - [`get`] resolves a [`Path`] of object keys and 1-based array indices,
//!   skipping every sibling subtree without allocating, and materialises only
//!   the addressed value. Arrays descend at the matching element directly, so
//!   a document that is truncated or malformed past that element still
//!   yields the target.
//!
//! ```
//! use jsonpluck::{decode, get, path, Value};
//!
//! let doc = r#"{"user": {"name": "ada", "logins": [14, 92]}}"#;
//!
//! assert!(decode(doc).unwrap().is_object());
//! assert_eq!(
//!     get(&path!["user", "logins", 2], doc),
//!     Ok(Value::Integer(92)),
//! );
//! ```
//!
//! Errors carry a single byte offset: the first byte the parser could not
//! consume ([`DecodeError`]), or the last position visited by an unsuccessful
//! path search ([`GetError::NotFound`]).

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod path;
mod value;

pub use decoder::{decode, get, DecodeError, GetError};
pub use path::{Path, PathComponent, PathComponentFrom};
pub use value::{Array, Map, Value};

#[cfg(test)]
mod tests;
