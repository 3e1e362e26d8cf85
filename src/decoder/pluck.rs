//! The path driver behind [`get`](crate::get).
//!
//! The driver walks one container per path component. Inside the container
//! being matched it decodes just enough to compare — member keys in objects,
//! an element counter in arrays — and hands every non-matching sibling to the
//! skip engine. When the last component matches, the materialising decoder
//! takes over.
//!
//! Objects are scanned to their closing brace before descending, so that a
//! duplicated key resolves to the same occurrence `decode` would keep (the
//! last one). Arrays descend at the matching element directly; nothing after
//! a matched element is ever read.

use super::{Decoder, GetError};
use crate::{path::PathComponent, value::Value};

impl Decoder<'_> {
    pub(crate) fn pluck(&mut self, path: &[PathComponent]) -> Result<Value, GetError> {
        let Some((head, tail)) = path.split_first() else {
            return Ok(self.decode_value()?);
        };
        self.skip_whitespace();
        match self.peek() {
            Some(b'{') => {
                self.pos += 1;
                self.pluck_object(head, tail)
            }
            Some(b'[') => {
                self.pos += 1;
                self.pluck_array(head, tail)
            }
            // A scalar cannot hold the remaining components. It is not
            // scanned; the search ends at its first byte.
            Some(b'"' | b'-' | b'0'..=b'9' | b't' | b'f' | b'n') => {
                Err(GetError::NotFound(self.pos))
            }
            _ => Err(self.unexpected().into()),
        }
    }

    /// Cursor is just past `{`. Decodes each key for comparison; member
    /// values are only decoded on a match. The whole object is scanned
    /// before descending, remembering where the latest matching value
    /// started, so a duplicated key yields its last occurrence exactly as a
    /// full decode would.
    fn pluck_object(
        &mut self,
        head: &PathComponent,
        tail: &[PathComponent],
    ) -> Result<Value, GetError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'}') => return Err(GetError::NotFound(self.pos)),
            Some(b'"') => {}
            _ => return Err(self.unexpected().into()),
        }
        let mut matched = None;
        loop {
            self.pos += 1;
            let key = self.decode_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.unexpected().into());
            }
            self.pos += 1;
            self.skip_whitespace();
            if matches!(head, PathComponent::Key(want) if want.as_str() == key.as_ref()) {
                matched = Some(self.pos);
            }
            self.skip_value()?;
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek() != Some(b'"') {
                        return Err(self.unexpected().into());
                    }
                }
                Some(b'}') => {
                    return match matched {
                        Some(value_start) => {
                            self.pos = value_start;
                            self.pluck(tail)
                        }
                        None => Err(GetError::NotFound(self.pos)),
                    }
                }
                _ => return Err(self.unexpected().into()),
            }
        }
    }

    /// Cursor is just past `[`. The first element is index 1.
    fn pluck_array(
        &mut self,
        head: &PathComponent,
        tail: &[PathComponent],
    ) -> Result<Value, GetError> {
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            return Err(GetError::NotFound(self.pos));
        }
        let mut index = 1usize;
        loop {
            if matches!(head, PathComponent::Index(want) if *want == index) {
                return self.pluck(tail);
            }
            self.skip_value()?;
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    index += 1;
                }
                Some(b']') => return Err(GetError::NotFound(self.pos)),
                _ => return Err(self.unexpected().into()),
            }
        }
    }
}
