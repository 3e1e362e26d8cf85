//! String scanning.
//!
//! Strings without escapes are returned as a borrowed subslice of the input.
//! The first backslash switches to an owned accumulator for the rest of the
//! string: the prefix scanned so far is copied in, each escape is decoded,
//! and plain runs between escapes are appended slice-wise. UTF-16 surrogate
//! pairs in `\uXXXX` escapes combine into one code point; an unpaired high
//! surrogate decodes to `?` and scanning resumes directly after its escape.

use alloc::{borrow::Cow, string::String};

use super::{DecodeError, Decoder};

#[inline]
fn hex_val(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'f' => Some(u32::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}

impl<'a> Decoder<'a> {
    /// Cursor is just past the opening quote. Leaves the cursor past the
    /// closing quote.
    pub(crate) fn decode_string(&mut self) -> Result<Cow<'a, str>, DecodeError> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b'"') => {
                    let text = &self.src[start..self.pos];
                    self.pos += 1;
                    return Ok(Cow::Borrowed(text));
                }
                Some(b'\\') => return self.decode_string_escaped(start).map(Cow::Owned),
                Some(_) => self.pos += 1,
                None => return Err(DecodeError::at(self.bytes.len())),
            }
        }
    }

    /// Slow path, entered with the cursor on the first backslash. The fast
    /// subslice path is not re-entered for the remainder of the string.
    fn decode_string_escaped(&mut self, start: usize) -> Result<String, DecodeError> {
        let mut out = String::with_capacity(self.pos - start + 16);
        out.push_str(&self.src[start..self.pos]);
        loop {
            let run = self.pos;
            loop {
                match self.peek() {
                    Some(b'"' | b'\\') => break,
                    Some(_) => self.pos += 1,
                    None => return Err(DecodeError::at(self.bytes.len())),
                }
            }
            // Run boundaries land on ASCII quote or backslash bytes, which
            // never occur inside a multi-byte sequence.
            out.push_str(&self.src[run..self.pos]);
            if self.bytes[self.pos] == b'"' {
                self.pos += 1;
                return Ok(out);
            }
            self.pos += 1; // past the backslash
            self.decode_escape(&mut out)?;
        }
    }

    /// Cursor is just past a backslash.
    fn decode_escape(&mut self, out: &mut String) -> Result<(), DecodeError> {
        let escape_start = self.pos - 1;
        let mapped = match self.peek() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{8}',
            Some(b'f') => '\u{c}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.pos += 1;
                return self.decode_unicode_escape(escape_start, out);
            }
            Some(_) => return Err(self.unexpected()),
            None => return Err(DecodeError::at(self.bytes.len())),
        };
        out.push(mapped);
        self.pos += 1;
        Ok(())
    }

    /// Cursor is just past the `u` of a `\uXXXX` escape.
    fn decode_unicode_escape(
        &mut self,
        escape_start: usize,
        out: &mut String,
    ) -> Result<(), DecodeError> {
        let code = self.read_hex4()?;
        match code {
            0xD800..=0xDBFF => {
                if let Some(low) = self.peek_low_surrogate() {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    match char::from_u32(combined) {
                        Some(ch) => out.push(ch),
                        None => return Err(DecodeError::at(escape_start)),
                    }
                    self.pos += 6; // the whole low-half escape
                } else {
                    // Unpaired high half: tolerated as '?'. The cursor stays
                    // where it is, so whatever follows is parsed on its own.
                    out.push('?');
                }
                Ok(())
            }
            0xDC00..=0xDFFF => Err(DecodeError::at(escape_start)),
            _ => match char::from_u32(code) {
                Some(ch) => {
                    out.push(ch);
                    Ok(())
                }
                None => Err(DecodeError::at(escape_start)),
            },
        }
    }

    /// Reads exactly four hex digits into a code unit.
    fn read_hex4(&mut self) -> Result<u32, DecodeError> {
        let mut code = 0u32;
        for _ in 0..4 {
            match self.peek() {
                Some(b) => match hex_val(b) {
                    Some(digit) => {
                        code = (code << 4) | digit;
                        self.pos += 1;
                    }
                    None => return Err(self.unexpected()),
                },
                None => return Err(DecodeError::at(self.bytes.len())),
            }
        }
        Ok(code)
    }

    /// Looks ahead for `\uXXXX` with XXXX in the low-surrogate range, without
    /// moving the cursor.
    fn peek_low_surrogate(&self) -> Option<u32> {
        if self.bytes.get(self.pos) != Some(&b'\\') || self.bytes.get(self.pos + 1) != Some(&b'u') {
            return None;
        }
        let mut code = 0u32;
        for i in 0..4 {
            let digit = hex_val(*self.bytes.get(self.pos + 2 + i)?)?;
            code = (code << 4) | digit;
        }
        (0xDC00..=0xDFFF).contains(&code).then_some(code)
    }
}
