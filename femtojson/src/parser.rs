// SPDX-License-Identifier: Apache-2.0

use log::trace;

use crate::cursor::Cursor;
use crate::number;
use crate::parse_error::ParseError;
use crate::value::Value;

/// The three fixed JSON literal tokens.
#[derive(Debug, Clone, Copy)]
enum Literal {
    True,
    False,
    Null,
}

impl Literal {
    const fn text(&self) -> &'static [u8] {
        match self {
            Literal::True => b"true",
            Literal::False => b"false",
            Literal::Null => b"null",
        }
    }

    const fn value(&self) -> Value {
        match self {
            Literal::True => Value::True,
            Literal::False => Value::False,
            Literal::Null => Value::Null,
        }
    }
}

/// Parses a JSON document containing a single scalar value.
///
/// The document must hold exactly one value, surrounded by optional
/// whitespace. Supported values are `null`, `true`, `false` and numbers.
///
/// # Example
/// ```
/// use femtojson::{parse, Value};
/// assert_eq!(parse("3.25"), Ok(Value::Number(3.25)));
/// assert_eq!(parse(" null "), Ok(Value::Null));
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_from_slice(input.as_bytes())
}

/// Parses a JSON document from a byte slice.
///
/// # Example
/// ```
/// use femtojson::{parse_from_slice, Value};
/// assert_eq!(parse_from_slice(b"true"), Ok(Value::True));
/// ```
pub fn parse_from_slice(input: &[u8]) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespace();
    let scanned = scan_value(&mut cursor)?;
    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        trace!("trailing content after root value at byte {}", cursor.current_pos());
        return Err(ParseError::RootNotSingular);
    }

    // Numbers convert only once the root is known to be singular, so a
    // non-singular document never reports NumberTooBig
    let value = match scanned {
        Scanned::Literal(value) => value,
        Scanned::Number(span) => Value::Number(number::convert(&cursor, span)?),
    };

    trace!("parsed root value: {:?}", value.kind());
    Ok(value)
}

/// A root value whose bytes have been scanned; numbers are still pending
/// conversion.
enum Scanned {
    Literal(Value),
    Number(number::NumberSpan),
}

/// Dispatches on the byte under the cursor.
///
/// One byte of lookahead is enough: `t`, `f` and `n` are reserved for the
/// literals, numbers start with `-` or a digit, and anything else is left
/// for the number scanner to reject.
fn scan_value(cursor: &mut Cursor) -> Result<Scanned, ParseError> {
    match cursor.peek() {
        Some(b't') => parse_literal(cursor, Literal::True).map(Scanned::Literal),
        Some(b'f') => parse_literal(cursor, Literal::False).map(Scanned::Literal),
        Some(b'n') => parse_literal(cursor, Literal::Null).map(Scanned::Literal),
        Some(_) => number::scan_number(cursor).map(Scanned::Number),
        None => Err(ParseError::ExpectValue),
    }
}

/// Matches the expected literal byte by byte.
///
/// A matched literal must end at a token boundary: `truee` is a malformed
/// literal, not a well-formed `true` with trailing content.
fn parse_literal(cursor: &mut Cursor, literal: Literal) -> Result<Value, ParseError> {
    for &expected in literal.text() {
        if cursor.peek() != Some(expected) {
            return Err(ParseError::InvalidValue);
        }
        cursor.bump();
    }
    if matches!(cursor.peek(), Some(b) if b.is_ascii_alphanumeric()) {
        return Err(ParseError::InvalidValue);
    }
    Ok(literal.value())
}
