//! The process wide float format lives in its own test binary, so changing it can't race with
//! other tests that format floats.

use vlib::text::{FloatFormat, TextBuffer};

#[test]
fn global_format() {
    assert_eq!(FloatFormat::global(), FloatFormat::DEFAULT);
    assert_eq!(TextBuffer::from_float(1.5), "1.500000");

    FloatFormat::set_global(FloatFormat::DEFAULT.with_precision(2));
    assert_eq!(TextBuffer::from_float(1.5), "1.50");
    assert_eq!(TextBuffer::from_float(-3.14159_f32), "-3.14");

    FloatFormat::set_global(FloatFormat::DEFAULT.with_precision(4).with_pad(false));
    assert_eq!(FloatFormat::global().precision(), 4);
    assert!(!FloatFormat::global().pad());
    assert_eq!(TextBuffer::from_float(1.5), "1.5");
    assert_eq!(TextBuffer::from_float(2.0), "2.0");

    let mut text = TextBuffer::from("x = ");
    text.push_float(0.25);
    assert_eq!(text, "x = 0.25");

    // Explicit formats ignore the global one.
    let mut text = TextBuffer::new();
    text.push_float_with(0.25, FloatFormat::DEFAULT);
    assert_eq!(text, "0.250000");

    FloatFormat::set_global(FloatFormat::DEFAULT);
    assert_eq!(TextBuffer::from_float(1.5), "1.500000");
}

#[test]
fn precision_is_clamped() {
    let format = FloatFormat::DEFAULT.with_precision(u8::MAX);
    assert_eq!(format.precision(), vlib::text::MAX_PRECISION);
    assert_eq!(FloatFormat::DEFAULT.with_precision(0).precision(), 0);
}
