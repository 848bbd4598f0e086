//! Property-based tests for TextBuffer: the terminator survives every mutation, and formatting
//! round-trips through parsing.

use proptest::prelude::*;

use vlib::text::{FloatFormat, TextBuffer, parse};

/// Printable ASCII plus newlines, so that the C string view covers the whole contents.
fn text_bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![8 => 0x20_u8..0x7f, 1 => Just(b'\n')], 0..max)
}

#[derive(Debug, Clone)]
enum Edit {
    Push(u8),
    Concat(Vec<u8>),
    Insert(usize, Vec<u8>),
    Pop,
    Truncate(usize),
    Replace(Vec<u8>, Vec<u8>),
    Slice(usize, usize),
    Remove(Vec<u8>),
    Reverse,
    Sort,
    Upper,
    Quote,
    Unquote,
    PadStart(usize),
    PadEnd(usize),
    Int(i64),
    Float(f64),
    Clear,
    ShrinkToFit,
}

fn edit() -> impl Strategy<Value = Edit> {
    let resizing = prop_oneof![
        (0x20_u8..0x7f).prop_map(Edit::Push),
        text_bytes(12).prop_map(Edit::Concat),
        (0_usize..32, text_bytes(6)).prop_map(|(i, b)| Edit::Insert(i, b)),
        Just(Edit::Pop),
        (0_usize..32).prop_map(Edit::Truncate),
        (text_bytes(3), text_bytes(5)).prop_map(|(f, t)| Edit::Replace(f, t)),
        (0_usize..32, 0_usize..32).prop_map(|(s, e)| Edit::Slice(s, e)),
        text_bytes(3).prop_map(Edit::Remove),
        prop_oneof![Just(Edit::Clear), Just(Edit::ShrinkToFit)],
    ];
    let rewriting = prop_oneof![
        Just(Edit::Reverse),
        Just(Edit::Sort),
        Just(Edit::Upper),
        Just(Edit::Quote),
        Just(Edit::Unquote),
        (0_usize..40).prop_map(Edit::PadStart),
        (0_usize..40).prop_map(Edit::PadEnd),
        any::<i64>().prop_map(Edit::Int),
        (-1e6_f64..1e6).prop_map(Edit::Float),
    ];
    prop_oneof![3 => resizing, 2 => rewriting]
}

fn apply(text: &mut TextBuffer, edit: Edit) {
    match edit {
        Edit::Push(byte) => text.push(byte),
        Edit::Concat(bytes) => text.concat_in_place(&bytes),
        Edit::Insert(index, bytes) => {
            let _ = text.insert_bytes(index, &bytes);
        }
        Edit::Pop => {
            text.pop();
        }
        Edit::Truncate(len) => text.truncate(len),
        Edit::Replace(from, to) => text.replace_in_place(&from, &to),
        Edit::Slice(start, end) => {
            let _ = text.slice_in_place(start, end);
        }
        Edit::Remove(bytes) => text.remove_in_place(&bytes),
        Edit::Reverse => text.reverse_in_place(),
        Edit::Sort => text.sort_in_place(),
        Edit::Upper => text.upper_in_place(),
        Edit::Quote => text.quote_in_place(),
        Edit::Unquote => text.unquote_in_place(),
        Edit::PadStart(width) => text.ensure_start_padding(b'0', width),
        Edit::PadEnd(width) => text.ensure_end_padding(b' ', width),
        Edit::Int(value) => text.push_int(value),
        Edit::Float(value) => text.push_float_with(value, FloatFormat::DEFAULT),
        Edit::Clear => text.clear(),
        Edit::ShrinkToFit => text.shrink_to_fit(),
    }
}

fn assert_terminated(text: &TextBuffer) -> Result<(), TestCaseError> {
    let with_nul = text.as_bytes_with_nul();
    prop_assert_eq!(with_nul.len(), text.len() + 1);
    prop_assert_eq!(with_nul[text.len()], 0);
    prop_assert_eq!(text.c_str().to_bytes(), text.as_bytes());
    // SAFETY: as_ptr points at len bytes followed by the terminator.
    prop_assert_eq!(unsafe { *text.as_ptr().add(text.len()) }, 0);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn terminator_survives_mutation(
        start in text_bytes(16),
        edits in prop::collection::vec(edit(), 0..32),
    ) {
        let mut text = TextBuffer::from_bytes(&start);
        assert_terminated(&text)?;

        for edit in edits {
            apply(&mut text, edit);
            prop_assert!(text.len() <= text.cap());
            assert_terminated(&text)?;
        }
    }

    #[test]
    fn copy_and_take_stay_terminated(bytes in text_bytes(32)) {
        let mut text = TextBuffer::from_bytes(&bytes);
        let copy = text.copy();
        let taken = text.take();

        assert_terminated(&copy)?;
        assert_terminated(&taken)?;
        assert_terminated(&text)?;
        prop_assert!(text.is_empty());
        prop_assert_eq!(copy, taken);
    }

    #[test]
    fn i8_round_trip(value in any::<i8>()) {
        prop_assert_eq!(TextBuffer::from_int(value).try_parse_int::<i8>(), Ok(value));
    }

    #[test]
    fn u16_round_trip(value in any::<u16>()) {
        prop_assert_eq!(TextBuffer::from_int(value).try_parse_int::<u16>(), Ok(value));
    }

    #[test]
    fn i32_round_trip(value in any::<i32>()) {
        prop_assert_eq!(TextBuffer::from_int(value).parse_int::<i32>(), value);
    }

    #[test]
    fn i64_round_trip(value in any::<i64>()) {
        let text = TextBuffer::from_int(value);
        let expected = value.to_string();
        prop_assert_eq!(text.as_str().ok(), Some(expected.as_str()));
        prop_assert_eq!(text.try_parse_int::<i64>(), Ok(value));
    }

    #[test]
    fn u128_round_trip(value in any::<u128>()) {
        prop_assert_eq!(TextBuffer::from_int(value).try_parse_int::<u128>(), Ok(value));
    }

    #[test]
    fn i128_round_trip(value in any::<i128>()) {
        prop_assert_eq!(TextBuffer::from_int(value).try_parse_int::<i128>(), Ok(value));
    }

    #[test]
    fn float_round_trip(value in -1e6_f64..1e6) {
        let mut text = TextBuffer::new();
        text.push_float_with(value, FloatFormat::DEFAULT);
        let parsed = text.try_parse_float();

        prop_assert!(parsed.is_ok(), "{text} failed to parse");
        let parsed = parsed.unwrap_or_default();
        prop_assert!((parsed - value).abs() <= 1e-6, "{value} was written as {text}");
    }

    #[test]
    fn large_float_round_trip(value in 2_f64.powi(53)..1e300, negative in any::<bool>()) {
        let value = if negative { -value } else { value };
        let mut text = TextBuffer::new();
        text.push_float_with(value, FloatFormat::DEFAULT);

        prop_assert_eq!(text.try_parse_float(), Ok(value), "{} was written as {}", value, text);
    }

    #[test]
    fn unpadded_float_has_no_trailing_zeros(value in -1e6_f64..1e6) {
        let mut text = TextBuffer::new();
        text.push_float_with(value, FloatFormat::DEFAULT.with_pad(false));

        let fraction = text.rfind(".").map(|dot| &text[dot + 1..]);
        prop_assert!(fraction.is_some_and(|digits| !digits.is_empty()));
        prop_assert!(text.last() != Ok(b'0') || text.ends_with(b".0"));
    }

    #[test]
    fn quote_then_unquote(bytes in text_bytes(24)) {
        let text = TextBuffer::from_bytes(&bytes);
        let quoted = text.quote();

        prop_assert!(quoted.is_quoted());
        prop_assert_eq!(quoted.len(), text.len() + 2);
        prop_assert_eq!(quoted.unquote(), text);
    }

    #[test]
    fn start_padding_reaches_width(value in any::<i32>(), width in 0_usize..16) {
        let mut text = TextBuffer::from_int(value);
        let original = text.copy();
        text.ensure_start_padding(b'0', width);

        prop_assert_eq!(text.len(), original.len().max(width));
        prop_assert_eq!(text.parse_int::<i64>(), i64::from(value));
    }

    #[test]
    fn lines_match_split(bytes in text_bytes(48)) {
        let text = TextBuffer::from_bytes(&bytes);
        let lines: Vec<&[u8]> = text.lines().collect();

        let mut expected: Vec<&[u8]> = bytes.split(|byte| *byte == b'\n').collect();
        if expected.last().is_some_and(|line| line.is_empty()) {
            expected.pop();
        }
        prop_assert_eq!(lines, expected);
    }

    #[test]
    fn parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..24)) {
        let _ = parse::parse_int::<i32>(&bytes);
        let _ = parse::try_parse_int::<u64>(&bytes);
        let _ = parse::parse_float(&bytes);
        let _ = parse::try_parse_float(&bytes);
        let _ = parse::try_parse_bool(&bytes);
    }
}

#[test]
fn concat_hello_world() {
    let mut text = TextBuffer::from("Hello");
    text.concat_in_place(" World!");

    assert_eq!(text.c_str(), c"Hello World!");
    assert_eq!(text.len(), 12);
}

#[test]
fn pad_negative_number() {
    let mut text = TextBuffer::from("-1");
    text.ensure_start_padding(b'0', 4);

    assert_eq!(text, "-001");
    assert_eq!(text.len(), 4);
}

#[test]
fn find_substring() {
    let text = TextBuffer::from("Hello World");
    assert_eq!(text.find("lo"), Some(3));
    assert_eq!(text.find("xyz"), None);
}

#[test]
fn float_extremes_round_trip() {
    for value in [f64::MAX, -f64::MAX, f64::MIN_POSITIVE, 0.0] {
        let mut text = TextBuffer::new();
        text.push_float_with(value, FloatFormat::DEFAULT);
        assert!((text.parse_float() - value).abs() <= 1e-6, "{value} was written as {text}");
    }
}

#[test]
fn int_extremes() {
    assert_eq!(TextBuffer::from_int(i64::MIN), "-9223372036854775808");
    assert_eq!(TextBuffer::from_int(u64::MAX), "18446744073709551615");
    assert_eq!(
        TextBuffer::from_int(i128::MIN),
        "-170141183460469231731687303715884105728"
    );
    assert_eq!(TextBuffer::from_int(0_u8), "0");
}
