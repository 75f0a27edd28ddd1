// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::cursor::Cursor;
use crate::parse_error::ParseError;

/// The byte range of a scanned number, pending conversion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberSpan {
    start: usize,
    end: usize,
}

/// Scans a JSON number at the cursor and returns its byte span.
///
/// The scanner only validates the grammar; conversion is a separate step
/// so the caller can finish its root-singularity check first. An
/// overflowing number followed by trailing garbage is a trailing-garbage
/// error, not an overflow.
///
/// ```text
/// number = ["-"] int [frac] [exp]
/// int    = "0" | digit1-9 *digit
/// frac   = "." 1*digit
/// exp    = ("e" | "E") ["-" | "+"] 1*digit
/// ```
pub(crate) fn scan_number(cursor: &mut Cursor) -> Result<NumberSpan, ParseError> {
    let start = cursor.current_pos();

    if cursor.peek() == Some(b'-') {
        cursor.bump();
    }

    match cursor.peek() {
        Some(b'0') => {
            cursor.bump();
            // A leading zero must stand alone in the int part
            if matches!(cursor.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
        }
        Some(b'1'..=b'9') => {
            skip_digits(cursor);
        }
        _ => return Err(ParseError::InvalidValue),
    }

    if cursor.peek() == Some(b'.') {
        cursor.bump();
        require_digits(cursor)?;
    }

    if matches!(cursor.peek(), Some(b'e' | b'E')) {
        cursor.bump();
        if matches!(cursor.peek(), Some(b'+' | b'-')) {
            cursor.bump();
        }
        require_digits(cursor)?;
    }

    Ok(NumberSpan {
        start,
        end: cursor.current_pos(),
    })
}

/// Converts a scanned span to an `f64`.
///
/// Conversion uses `f64::from_str`, which is reentrant and reports range
/// problems through its result rather than a shared error flag. A result
/// outside the finite f64 range is rejected as `NumberTooBig`; magnitudes
/// that underflow to zero are accepted.
pub(crate) fn convert(cursor: &Cursor, span: NumberSpan) -> Result<f64, ParseError> {
    let bytes = cursor
        .slice(span.start, span.end)
        .ok_or(ParseError::InvalidValue)?;
    // The scanned range is pure ASCII, so this conversion cannot fail
    let text = core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidValue)?;
    match f64::from_str(text) {
        Ok(n) if n.is_finite() => Ok(n),
        Ok(_) => Err(ParseError::NumberTooBig),
        Err(_) => Err(ParseError::InvalidValue),
    }
}

/// Consumes a run of zero or more decimal digits.
fn skip_digits(cursor: &mut Cursor) {
    while matches!(cursor.peek(), Some(b'0'..=b'9')) {
        cursor.bump();
    }
}

/// Consumes a run of digits that must contain at least one.
fn require_digits(cursor: &mut Cursor) -> Result<(), ParseError> {
    if !matches!(cursor.peek(), Some(b'0'..=b'9')) {
        return Err(ParseError::InvalidValue);
    }
    skip_digits(cursor);
    Ok(())
}
