use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use num_traits::PrimInt;

use super::TextBuffer;

/// The largest supported number of fractional digits. An `f64` carries at most 17 significant
/// decimal digits, anything beyond that would only be noise.
pub const MAX_PRECISION: u8 = 17;

static GLOBAL_PRECISION: AtomicU8 = AtomicU8::new(FloatFormat::DEFAULT.precision);
static GLOBAL_PAD: AtomicBool = AtomicBool::new(FloatFormat::DEFAULT.pad);

/// Options controlling how [`TextBuffer::push_float`] writes floating point values.
///
/// Values are written as an integer part and a fixed number of fractional digits. Before digits
/// are cut off, a bias of `1 / 10^(precision + 1)` is added, so values that are stored as a hair
/// below their decimal representation aren't systematically rounded down.
///
/// A process wide default is used by [`push_float`](TextBuffer::push_float) and can be changed
/// with [`FloatFormat::set_global`]. [`push_float_with`](TextBuffer::push_float_with) takes an
/// explicit format instead.
///
/// # Examples
/// ```
/// # use vlib::text::{FloatFormat, TextBuffer};
/// let mut text = TextBuffer::new();
/// text.push_float_with(2.5, FloatFormat::DEFAULT);
/// text.push(b' ');
/// text.push_float_with(2.5, FloatFormat::DEFAULT.with_precision(3).with_pad(false));
/// assert_eq!(text, "2.500000 2.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatFormat {
    precision: u8,
    pad: bool,
}

impl FloatFormat {
    /// Six fractional digits, padded with trailing zeros.
    pub const DEFAULT: FloatFormat = FloatFormat {
        precision: 6,
        pad: true,
    };

    /// Returns the current process wide format.
    pub fn global() -> FloatFormat {
        FloatFormat {
            precision: GLOBAL_PRECISION.load(Ordering::Relaxed),
            pad: GLOBAL_PAD.load(Ordering::Relaxed),
        }
    }

    /// Replaces the process wide format used by [`TextBuffer::push_float`].
    pub fn set_global(format: FloatFormat) {
        GLOBAL_PRECISION.store(format.precision, Ordering::Relaxed);
        GLOBAL_PAD.store(format.pad, Ordering::Relaxed);
        log::debug!("global float format set to {format:?}");
    }

    /// Sets the number of fractional digits, capped at [`MAX_PRECISION`]. A precision of zero
    /// writes only the integer part.
    pub const fn with_precision(self, precision: u8) -> FloatFormat {
        FloatFormat {
            precision: if precision > MAX_PRECISION { MAX_PRECISION } else { precision },
            ..self
        }
    }

    /// Sets whether trailing zeros are kept. Without padding, at least one fractional digit is
    /// still written.
    pub const fn with_pad(self, pad: bool) -> FloatFormat {
        FloatFormat { pad, ..self }
    }

    pub const fn precision(&self) -> u8 {
        self.precision
    }

    pub const fn pad(&self) -> bool {
        self.pad
    }
}

impl Default for FloatFormat {
    fn default() -> Self {
        FloatFormat::DEFAULT
    }
}

impl TextBuffer {
    /// Appends `"true"` or `"false"`.
    pub fn push_bool(&mut self, value: bool) {
        self.push_str(if value { "true" } else { "false" });
    }

    /// Appends the decimal representation of any primitive integer, with a leading `-` for
    /// negative values.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let mut text = TextBuffer::new();
    /// text.push_int(i64::MIN);
    /// assert_eq!(text, "-9223372036854775808");
    /// ```
    pub fn push_int<I: PrimInt>(&mut self, value: I) {
        // Every primitive integer fits in an i128, except the top half of u128.
        if let Some(signed) = value.to_i128() {
            if signed < 0 {
                self.push(b'-');
            }
            self.push_magnitude(signed.unsigned_abs());
        } else if let Some(unsigned) = value.to_u128() {
            self.push_magnitude(unsigned);
        }
    }

    /// Appends `value` using the process wide [`FloatFormat`].
    pub fn push_float<F: Into<f64>>(&mut self, value: F) {
        self.push_float_with(value, FloatFormat::global());
    }

    /// Appends `value` using the provided format. NaN is written as `nan` and infinities as `inf`
    /// or `-inf`.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::{FloatFormat, TextBuffer};
    /// let mut text = TextBuffer::new();
    /// text.push_float_with(-0.1_f32, FloatFormat::DEFAULT.with_precision(2));
    /// assert_eq!(text, "-0.10");
    /// ```
    pub fn push_float_with<F: Into<f64>>(&mut self, value: F, format: FloatFormat) {
        let value = value.into();
        if value.is_nan() {
            return self.push_str("nan");
        }
        if value < 0.0 {
            self.push(b'-');
        }

        let value = value.abs();
        if value.is_infinite() {
            return self.push_str("inf");
        }

        let precision = format.precision();
        let biased = value + 10_f64.powi(-(i32::from(precision) + 1));
        let int = biased.trunc();
        if int < u128::MAX as f64 {
            self.push_magnitude(int as u128);
        } else {
            self.push_str(&format!("{int:.0}"));
        }

        if precision == 0 {
            return;
        }

        let mut digits = [b'0'; MAX_PRECISION as usize];
        let mut fraction = biased - int;
        for digit in digits.iter_mut().take(usize::from(precision)) {
            fraction *= 10.0;
            let whole = fraction.trunc();
            *digit = b'0' + whole as u8;
            fraction -= whole;
        }

        let mut len = usize::from(precision);
        if !format.pad() {
            while len > 1 && digits[len - 1] == b'0' {
                len -= 1;
            }
        }

        self.push(b'.');
        self.concat_in_place(&digits[..len]);
    }

    /// Creates a TextBuffer holding the decimal representation of `value`.
    pub fn from_int<I: PrimInt>(value: I) -> TextBuffer {
        let mut text = TextBuffer::new();
        text.push_int(value);
        text
    }

    /// Creates a TextBuffer holding `value`, formatted with the process wide [`FloatFormat`].
    pub fn from_float<F: Into<f64>>(value: F) -> TextBuffer {
        let mut text = TextBuffer::new();
        text.push_float(value);
        text
    }

    /// Writes the digits of `value`, produced by repeated division by ten.
    fn push_magnitude(&mut self, mut value: u128) {
        // u128::MAX has 39 digits.
        let mut digits = [0_u8; 39];
        let mut start = digits.len();
        loop {
            start -= 1;
            digits[start] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        self.concat_in_place(&digits[start..]);
    }
}
