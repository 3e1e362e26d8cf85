//! Position-only mirrors of every value parser.
//!
//! The skip engine consumes exactly the bytes the decoder would, but builds
//! nothing and allocates nothing. For a well-formed value, the cursor ends
//! where the decoder's would; on sloppy input the engine is more tolerant
//! (string escapes and literal interiors go unvalidated), which is what lets
//! `get` skip over sibling values the decoder would reject.

use super::{DecodeError, Decoder};

impl Decoder<'_> {
    pub(crate) fn skip_value(&mut self) -> Result<(), DecodeError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'{') => {
                self.pos += 1;
                self.skip_object()
            }
            Some(b'[') => {
                self.pos += 1;
                self.skip_array()
            }
            Some(b'"') => {
                self.pos += 1;
                self.skip_string()
            }
            Some(b'-' | b'0'..=b'9') => self.scan_number().map(drop),
            Some(b't') => self.skip_literal(4),
            Some(b'f') => self.skip_literal(5),
            Some(b'n') => self.skip_literal(4),
            _ => Err(self.unexpected()),
        }
    }

    fn skip_object(&mut self) -> Result<(), DecodeError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'}') => {
                self.pos += 1;
                return Ok(());
            }
            Some(b'"') => {}
            _ => return Err(self.unexpected()),
        }
        loop {
            self.pos += 1;
            self.skip_string()?; // keys are not decoded in skip mode
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.unexpected());
            }
            self.pos += 1;
            self.skip_value()?;
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
                    return Ok(());
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn skip_array(&mut self) -> Result<(), DecodeError> {
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(());
        }
        loop {
            self.skip_value()?;
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// Cursor is just past the opening quote. Scans to the closing quote,
    /// interpreting only the two escapes that decide whether a quote byte
    /// closes the string; every other byte counts as one.
    pub(crate) fn skip_string(&mut self) -> Result<(), DecodeError> {
        loop {
            match self.peek() {
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(b'\\') => match self.bytes.get(self.pos + 1) {
                    Some(b'"' | b'\\') => self.pos += 2,
                    _ => self.pos += 1,
                },
                Some(_) => self.pos += 1,
                None => return Err(DecodeError::at(self.bytes.len())),
            }
        }
    }

    /// The leading byte has already been matched by the dispatcher; the
    /// interior letters are not validated, but the token must fit.
    fn skip_literal(&mut self, len: usize) -> Result<(), DecodeError> {
        if self.pos + len > self.bytes.len() {
            return Err(DecodeError::at(self.bytes.len()));
        }
        self.pos += len;
        Ok(())
    }
}
