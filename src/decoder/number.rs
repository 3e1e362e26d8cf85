//! The number state machine.
//!
//! One scanner serves both modes: [`Decoder::scan_number`] walks the
//! minus/zero/integer/fraction/exponent states and classifies the lexeme,
//! the decoder parses the classified slice, and the skip engine discards it.
//! The terminator byte is never consumed.

use super::{DecodeError, Decoder};
use crate::value::Value;

/// Lexical class of a scanned number, so integers and floats decode to
/// different [`Value`] variants.
pub(crate) enum NumberLexeme<'a> {
    Integer(&'a str), // no '.' and no exponent
    Float(&'a str),   // has '.' or exponent
}

impl<'a> Decoder<'a> {
    /// Cursor is on `-` or the first digit.
    pub(crate) fn scan_number(&mut self) -> Result<NumberLexeme<'a>, DecodeError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                // No transition out of the zero state on a digit: 0 is only
                // followed by '.', an exponent, or a terminator.
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(self.unexpected());
                }
            }
            Some(b'1'..=b'9') => {
                self.pos += 1;
                while let Some(b'0'..=b'9') = self.peek() {
                    self.pos += 1;
                }
            }
            _ => return Err(self.unexpected()),
        }
        let mut float = false;
        if self.peek() == Some(b'.') {
            float = true;
            self.pos += 1;
            self.digits1()?;
        }
        if let Some(b'e' | b'E') = self.peek() {
            float = true;
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.digits1()?;
        }
        let text = &self.src[start..self.pos];
        Ok(if float {
            NumberLexeme::Float(text)
        } else {
            NumberLexeme::Integer(text)
        })
    }

    /// At least one digit, then any number more.
    fn digits1(&mut self) -> Result<(), DecodeError> {
        match self.peek() {
            Some(b'0'..=b'9') => self.pos += 1,
            _ => return Err(self.unexpected()),
        }
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        Ok(())
    }

    pub(crate) fn decode_number(&mut self) -> Result<Value, DecodeError> {
        let start = self.pos;
        match self.scan_number()? {
            NumberLexeme::Integer(text) => match text.parse::<i64>() {
                Ok(n) => Ok(Value::Integer(n)),
                // Wider than i64: keep the numeric value as a float.
                Err(_) => text
                    .parse::<f64>()
                    .map(Value::Float)
                    .map_err(|_| DecodeError::at(start)),
            },
            NumberLexeme::Float(text) => text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| DecodeError::at(start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Decoder;
    use crate::value::Value;

    fn parse(input: &str) -> Result<(Value, usize), usize> {
        let mut d = Decoder::new(input);
        match d.decode_number() {
            Ok(v) => Ok((v, d.pos())),
            Err(e) => Err(e.offset),
        }
    }

    #[test]
    fn integers() {
        assert_eq!(parse("0"), Ok((Value::Integer(0), 1)));
        assert_eq!(parse("-0"), Ok((Value::Integer(0), 2)));
        assert_eq!(parse("7890"), Ok((Value::Integer(7890), 4)));
        assert_eq!(parse("-123"), Ok((Value::Integer(-123), 4)));
        assert_eq!(
            parse("9223372036854775807"),
            Ok((Value::Integer(i64::MAX), 19))
        );
    }

    #[test]
    fn floats() {
        assert_eq!(parse("1.5"), Ok((Value::Float(1.5), 3)));
        assert_eq!(parse("-0.5e+2"), Ok((Value::Float(-50.0), 7)));
        assert_eq!(parse("1e0"), Ok((Value::Float(1.0), 3)));
        assert_eq!(parse("2E-1"), Ok((Value::Float(0.2), 4)));
        // An integer with an exponent is a float.
        assert_eq!(parse("3e2"), Ok((Value::Float(300.0), 3)));
    }

    #[test]
    fn terminator_left_in_place() {
        assert_eq!(parse("42,"), Ok((Value::Integer(42), 2)));
        assert_eq!(parse("0]"), Ok((Value::Integer(0), 1)));
        assert_eq!(parse("1.5}"), Ok((Value::Float(1.5), 3)));
    }

    #[test]
    fn integer_overflow_widens_to_float() {
        assert_eq!(
            parse("99999999999999999999999"),
            Ok((Value::Float(1e23), 23))
        );
    }

    #[test]
    fn leading_zero_rejected() {
        assert_eq!(parse("0123"), Err(1));
        assert_eq!(parse("-01"), Err(2));
    }

    #[test]
    fn truncated_or_malformed() {
        assert_eq!(parse("-"), Err(1));
        assert_eq!(parse("-."), Err(1));
        assert_eq!(parse("-x"), Err(1));
        assert_eq!(parse("1."), Err(2));
        assert_eq!(parse("1.e5"), Err(2));
        assert_eq!(parse("1e"), Err(2));
        assert_eq!(parse("1e+"), Err(3));
        assert_eq!(parse("1e-,"), Err(3));
    }
}
