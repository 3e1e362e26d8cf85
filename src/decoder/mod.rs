//! The recursive descent decoder.
//!
//! A [`Decoder`] is a cursor over one complete UTF-8 input buffer. Every
//! parsing method leaves the cursor on the first byte it did not consume, so
//! the materialising parsers ([`decode`]), their position-only mirrors
//! (`skip_*`) and the path driver (`pluck`) can hand the same cursor back and
//! forth mid-document.

mod error;
mod number;
mod pluck;
mod skip;
mod string;

use alloc::string::String;

pub use error::{DecodeError, GetError};

use crate::{
    path::PathComponent,
    value::{Array, Map, Value},
};

/// Decodes a complete JSON document into a [`Value`].
///
/// Decoding is lenient about trailing content: the first complete value is
/// returned and any bytes after it are not inspected.
///
/// # Errors
///
/// Returns a [`DecodeError`] carrying the byte offset of the first byte that
/// could not be consumed.
///
/// # Examples
///
/// ```
/// use jsonpluck::{decode, Value};
///
/// let v = decode(r#"[1, 2.5, "three"]"#).unwrap();
/// assert_eq!(
///     v,
///     Value::Array(vec![
///         Value::Integer(1),
///         Value::Float(2.5),
///         Value::String("three".into()),
///     ])
/// );
/// ```
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    Decoder::new(text).decode_value()
}

/// Extracts the single value addressed by `path`, materialising nothing else.
///
/// Object keys on the path are matched byte-for-byte against decoded member
/// keys; array indices are 1-based. Subtrees off the path are scanned without
/// building values. A duplicated object key resolves to its last occurrence,
/// the same occurrence [`decode`] keeps, which means each object on the path
/// is scanned through to its closing brace. Arrays descend at the matching
/// element directly, so input that is truncated or malformed past that
/// element still yields the target.
///
/// An empty path decodes the root value.
///
/// # Errors
///
/// [`GetError::NotFound`] when a component fails to match, carrying the last
/// position visited; [`GetError::Invalid`] when the document is malformed at
/// or before the target.
///
/// # Examples
///
/// ```
/// use jsonpluck::{get, path, GetError, Value};
///
/// let doc = r#"{"a": 1, "b": {"c": "x"}}"#;
/// assert_eq!(get(&path!["b", "c"], doc), Ok(Value::String("x".into())));
/// assert_eq!(get(&path!["z"], doc), Err(GetError::NotFound(24)));
/// ```
pub fn get(path: &[PathComponent], text: &str) -> Result<Value, GetError> {
    Decoder::new(text).pluck(path)
}

pub(crate) struct Decoder<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// The four whitespace bytes of RFC 8259, permitted between tokens only.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// An error at the cursor. At end of input the offset is the buffer
    /// length.
    pub(crate) fn unexpected(&self) -> DecodeError {
        DecodeError::at(self.pos)
    }

    /// Classifies the next non-whitespace byte and dispatches to the
    /// matching sub-parser.
    pub(crate) fn decode_value(&mut self) -> Result<Value, DecodeError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'{') => {
                self.pos += 1;
                self.decode_object()
            }
            Some(b'[') => {
                self.pos += 1;
                self.decode_array()
            }
            Some(b'"') => {
                self.pos += 1;
                Ok(Value::String(self.decode_string()?.into_owned()))
            }
            Some(b'-' | b'0'..=b'9') => self.decode_number(),
            Some(b't') => {
                self.expect_literal(b"true")?;
                Ok(Value::Boolean(true))
            }
            Some(b'f') => {
                self.expect_literal(b"false")?;
                Ok(Value::Boolean(false))
            }
            Some(b'n') => {
                self.expect_literal(b"null")?;
                Ok(Value::Null)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Cursor is just past `{`. Duplicate keys resolve to the last
    /// occurrence.
    fn decode_object(&mut self) -> Result<Value, DecodeError> {
        let mut map = Map::new();
        self.skip_whitespace();
        match self.peek() {
            Some(b'}') => {
                self.pos += 1;
                return Ok(Value::Object(map));
            }
            Some(b'"') => {}
            _ => return Err(self.unexpected()),
        }
        loop {
            self.pos += 1; // opening quote of the key
            let key: String = self.decode_string()?.into_owned();
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.unexpected());
            }
            self.pos += 1;
            let value = self.decode_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek() != Some(b'"') {
                        return Err(self.unexpected());
                    }
                }
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(map));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// Cursor is just past `[`.
    fn decode_array(&mut self) -> Result<Value, DecodeError> {
        let mut items = Array::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.decode_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// Consumes a fixed literal token, failing at the first byte that
    /// differs.
    fn expect_literal(&mut self, expected: &'static [u8]) -> Result<(), DecodeError> {
        for (i, &want) in expected.iter().enumerate() {
            match self.bytes.get(self.pos + i) {
                Some(&have) if have == want => {}
                Some(_) => return Err(DecodeError::at(self.pos + i)),
                None => return Err(DecodeError::at(self.bytes.len())),
            }
        }
        self.pos += expected.len();
        Ok(())
    }
}
