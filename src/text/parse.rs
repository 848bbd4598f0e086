//! Conversions from decimal text to numbers and booleans.
//!
//! Each conversion comes in two flavours. The permissive functions read as much of a value as
//! they can from the start of the input and never fail: parsing stops at the first byte that
//! doesn't fit, missing digits produce zero and integers saturate when they overflow. The `try_`
//! functions accept only input consisting entirely of a single value, reporting anything else as
//! a [`ParseError`].

use std::str;

use num_traits::PrimInt;

use super::TextBuffer;
use crate::error::{InvalidByte, NoDigits, ParseError, ParseOverflow};

/// The digits of a decimal integer, as scanned from the start of some input.
struct IntScan {
    negative: bool,
    /// None if the digits don't fit in a u128.
    magnitude: Option<u128>,
    digits: usize,
    end: usize,
}

impl IntScan {
    fn scan(bytes: &[u8]) -> IntScan {
        let negative = bytes.first() == Some(&b'-');
        let mut magnitude = Some(0_u128);
        let mut end = usize::from(negative);
        let start = end;

        while let Some(digit) = bytes.get(end).filter(|byte| byte.is_ascii_digit()) {
            magnitude = magnitude
                .and_then(|value| value.checked_mul(10))
                .and_then(|value| value.checked_add(u128::from(digit - b'0')));
            end += 1;
        }

        IntScan {
            negative,
            magnitude,
            digits: end - start,
            end,
        }
    }

    /// Converts the scanned value, returning None if it doesn't fit in `I`.
    fn value<I: PrimInt>(&self) -> Option<I> {
        let magnitude = self.magnitude?;
        if !self.negative {
            return num_traits::cast(magnitude);
        }

        // The magnitude of i128::MIN is one more than i128::MAX.
        if magnitude > i128::MAX as u128 + 1 {
            return None;
        }
        num_traits::cast((magnitude as i128).wrapping_neg())
    }
}

/// Parses a leading decimal integer, with an optional `-` sign. Input without digits produces
/// zero, and values that don't fit in `I` saturate to its minimum or maximum.
///
/// # Examples
/// ```
/// # use vlib::text::parse;
/// assert_eq!(parse::parse_int::<i32>(b"-42 apples"), -42);
/// assert_eq!(parse::parse_int::<u8>(b"300"), u8::MAX);
/// assert_eq!(parse::parse_int::<u8>(b"x"), 0);
/// ```
pub fn parse_int<I: PrimInt>(bytes: &[u8]) -> I {
    let scan = IntScan::scan(bytes);
    match scan.value() {
        Some(value) => value,
        None if scan.negative => I::min_value(),
        None => I::max_value(),
    }
}

/// Parses a decimal integer that makes up the entire input.
///
/// # Errors
/// - [`ParseError::Empty`] if there are no digits.
/// - [`ParseError::InvalidByte`] if anything follows the digits.
/// - [`ParseError::Overflow`] if the value doesn't fit in `I`.
pub fn try_parse_int<I: PrimInt>(bytes: &[u8]) -> Result<I, ParseError> {
    let scan = IntScan::scan(bytes);
    check_complete(bytes, scan.digits, scan.end)?;
    scan.value().ok_or(ParseOverflow.into())
}

/// Scans a leading float, returning its value, the number of digits and the index after it.
fn scan_float(bytes: &[u8]) -> (f64, usize, usize) {
    let negative = bytes.first() == Some(&b'-');
    let start = usize::from(negative);
    let sign = if negative { -1.0 } else { 1.0 };

    for (word, value) in [(b"inf", f64::INFINITY), (b"nan", f64::NAN)] {
        if bytes[start..].starts_with(word) {
            return (sign * value, word.len(), start + word.len());
        }
    }

    let mut end = start;
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if digits == 0 {
        return (0.0, 0, end);
    }

    // The span is ASCII digits, a sign and one dot. std's conversion is correctly rounded, which
    // digit-by-digit accumulation above 2^53 is not.
    let value = str::from_utf8(&bytes[..end])
        .ok()
        .and_then(|span| span.parse::<f64>().ok())
        .unwrap_or(0.0);
    (value, digits, end)
}

/// Parses a leading decimal float such as `-12.5`, or `inf` or `nan`. Input without digits
/// produces zero.
pub fn parse_float(bytes: &[u8]) -> f64 {
    scan_float(bytes).0
}

/// Parses a decimal float that makes up the entire input.
///
/// # Errors
/// - [`ParseError::Empty`] if there are no digits.
/// - [`ParseError::InvalidByte`] if anything follows the value.
pub fn try_parse_float(bytes: &[u8]) -> Result<f64, ParseError> {
    let (value, digits, end) = scan_float(bytes);
    check_complete(bytes, digits, end)?;
    Ok(value)
}

/// Returns true if the input starts with `t` or `T`, which covers `true`, `True` and `t`.
pub fn parse_bool(bytes: &[u8]) -> bool {
    matches!(bytes.first(), Some(b't' | b'T'))
}

/// Parses `true`, `t`, `false` or `f`, ignoring ASCII case.
///
/// # Errors
/// - [`ParseError::Empty`] if the input is empty.
/// - [`ParseError::InvalidByte`], pointing at the first byte, for anything else.
pub fn try_parse_bool(bytes: &[u8]) -> Result<bool, ParseError> {
    let Some(&first) = bytes.first() else {
        return Err(NoDigits.into());
    };

    if bytes.eq_ignore_ascii_case(b"true") || bytes.eq_ignore_ascii_case(b"t") {
        Ok(true)
    } else if bytes.eq_ignore_ascii_case(b"false") || bytes.eq_ignore_ascii_case(b"f") {
        Ok(false)
    } else {
        Err(InvalidByte { index: 0, byte: first }.into())
    }
}

fn check_complete(bytes: &[u8], digits: usize, end: usize) -> Result<(), ParseError> {
    if let Some(&byte) = bytes.get(end) {
        Err(InvalidByte { index: end, byte })?;
    }
    if digits == 0 {
        Err(NoDigits)?;
    }
    Ok(())
}

impl TextBuffer {
    /// See [`parse_int`].
    pub fn parse_int<I: PrimInt>(&self) -> I {
        parse_int(self)
    }

    /// See [`try_parse_int`].
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the contents aren't exactly one integer that fits in `I`.
    pub fn try_parse_int<I: PrimInt>(&self) -> Result<I, ParseError> {
        try_parse_int(self)
    }

    /// See [`parse_float`].
    pub fn parse_float(&self) -> f64 {
        parse_float(self)
    }

    /// See [`try_parse_float`].
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the contents aren't exactly one float.
    pub fn try_parse_float(&self) -> Result<f64, ParseError> {
        try_parse_float(self)
    }

    /// See [`parse_bool`].
    pub fn parse_bool(&self) -> bool {
        parse_bool(self)
    }

    /// See [`try_parse_bool`].
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the contents aren't a recognized boolean.
    pub fn try_parse_bool(&self) -> Result<bool, ParseError> {
        try_parse_bool(self)
    }
}
