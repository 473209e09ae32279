//! Parsing utilities for decimal value text
//!
//! This module provides pure parsing functions for the one-value-per-line
//! input format, with no I/O dependencies.

use crate::Error;

/// Parse a non-negative decimal integer literal
///
/// Accepts an optional leading `+`. A leading `-` is rejected with
/// [`Error::NegativeValue`] unless the magnitude is zero, so `-0` reads
/// as `0`. Surrounding whitespace is not trimmed.
pub fn parse_value(text: &str) -> Result<usize, Error> {
    if text.is_empty() {
        return Err(Error::EmptyValue);
    }

    let (negative, digits) = match text.as_bytes()[0] {
        b'+' => (false, &text[1..]),
        b'-' => (true, &text[1..]),
        _ => (false, text),
    };

    if negative {
        // Magnitude still has to be a well-formed literal
        return match parse_digits(digits) {
            Ok(0) => Ok(0),
            Ok(_) | Err(Error::ValueOverflow) => Err(Error::NegativeValue),
            Err(e) => Err(e),
        };
    }

    parse_digits(digits)
}

/// Parse a run of ASCII digits into a usize with overflow checks
fn parse_digits(s: &str) -> Result<usize, Error> {
    if s.is_empty() {
        return Err(Error::InvalidDigit);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(Error::InvalidDigit);
        }

        let digit = (byte - b'0') as usize;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(Error::ValueOverflow)?;
    }

    Ok(result)
}
