#![cfg(test)]

use std::ffi::CStr;
use std::fmt::Write;

use super::*;
use crate::error::{InvalidByte, ParseError};
use crate::util::panic::assert_panics;

/// Checks that the byte after the contents is zero whenever storage is allocated.
fn assert_terminated(text: &TextBuffer) {
    let bytes = text.as_bytes_with_nul();
    assert_eq!(bytes.len(), text.len() + 1);
    assert_eq!(bytes[text.len()], 0, "The terminator should follow the contents: {text:?}");
    assert!(text.len() <= text.cap() || text.as_sequence().cap() == 0);
}

#[test]
fn test_concat_hello_world() {
    let mut text = TextBuffer::from("Hello");
    text.concat_in_place(" World!");
    assert_eq!(text.c_str(), c"Hello World!");
    assert_eq!(text.len(), 12);
    assert_terminated(&text);
}

#[test]
fn test_unallocated_c_str() {
    let mut text = TextBuffer::new();
    assert_eq!(text.as_sequence().cap(), 0);
    assert_eq!(text.c_str(), c"");
    assert_eq!(text.as_bytes_with_nul(), b"\0");

    text.push(b'x');
    assert_eq!(text.c_str(), c"x");

    text.destruct();
    assert_eq!(text.as_sequence().cap(), 0);
    assert_eq!(text.c_str(), c"");
}

#[test]
fn test_terminator_after_mutations() {
    let mut text = TextBuffer::from("abcdef");

    text.pop_or(0, b'?');
    assert_terminated(&text);
    assert_eq!(text, "bcdef");

    text.pop();
    assert_terminated(&text);

    text.truncate(2);
    assert_terminated(&text);
    assert_eq!(text.c_str(), c"bc");

    text.insert(1, b'-').unwrap();
    text.insert_bytes(0, "<<").unwrap();
    assert_terminated(&text);
    assert_eq!(text, "<<b-c");

    text.set(5, b'!').unwrap();
    assert_terminated(&text);

    text.slice_in_place(2, 5).unwrap();
    assert_terminated(&text);
    assert_eq!(text.c_str(), c"b-c");

    text.sort_in_place();
    assert_terminated(&text);
    assert_eq!(text, "-bc");

    text.remove_in_place("-");
    assert_terminated(&text);

    text.clear();
    assert_terminated(&text);
    assert_eq!(text.c_str(), c"");
}

#[test]
fn test_shrinking_replace_rewrites_terminator() {
    // A shrinking replacement leaves stale bytes in the spare capacity.
    let mut text = TextBuffer::from("aaaa bbbb");
    text.replace_in_place("bbbb", "c");
    assert_eq!(text.c_str(), c"aaaa c");
    assert_terminated(&text);

    text.replace_in_place("a", "xyz");
    assert_eq!(text.c_str(), c"xyzxyzxyzxyz c");
    assert_terminated(&text);
}

#[test]
fn test_copy_take_swap() {
    let original = TextBuffer::from("copy me");
    let mut copy = original.copy();
    copy.upper_in_place();
    assert_eq!(original, "copy me");
    assert_eq!(copy, "COPY ME");
    assert_eq!(copy.cap(), copy.len());

    let mut taken = copy.take();
    assert_eq!(copy.c_str(), c"");
    assert_eq!((copy.len(), copy.as_sequence().cap()), (0, 0));

    let mut other = TextBuffer::from("other");
    taken.swap(&mut other);
    assert_eq!(taken, "other");
    assert_eq!(other.c_str(), c"COPY ME");
}

#[test]
fn test_get_set_first_last() {
    let mut text = TextBuffer::from("ab");
    assert_eq!(text.get(1), Ok(b'b'));
    assert!(text.get(2).unwrap_err().is_out_of_bounds());
    assert!(text.set(3, b'x').is_err());
    assert_eq!(text.first(), Ok(b'a'));
    assert_eq!(text.last(), Ok(b'b'));
    assert!(TextBuffer::new().first().unwrap_err().is_empty());
}

#[test]
fn test_find() {
    let text = TextBuffer::from("Hello World");
    assert_eq!(text.find("lo"), Some(3));
    assert_eq!(text.find("xyz"), None);
    assert_eq!(text.find(""), None);
    assert_eq!(text.rfind("o"), Some(7));
    assert_eq!(text.find_in("o", 5.., crate::collections::contiguous::Direction::Forward), Some(7));
    assert_eq!(text.find_byte(b'W'), Some(6));
    assert!(text.contains("World"));
    assert_eq!(text.count("l"), 3);
    assert_eq!(TextBuffer::from("aaaa").count("aa"), 2);
}

#[test]
fn test_slice() {
    let text = TextBuffer::from("Hello World");
    assert_eq!(text.slice(0, 5).unwrap(), "Hello");
    assert_eq!(text.slice(6, 99).unwrap(), "World");
    assert!(text.slice(0, 0).unwrap().is_empty());
    assert!(text.slice(5, 2).unwrap_err().is_inverted_range());
    assert!(TextBuffer::new().slice(5, 2).unwrap().is_empty());
}

#[test]
fn test_split_join() {
    let text = TextBuffer::from("a, b,, c");
    let parts = text.split(",");
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[1], " b");
    assert!(parts[2].is_empty());
    for part in &parts {
        assert_terminated(part);
    }

    assert_eq!(TextBuffer::join(&parts, ","), text);
    assert_eq!(TextBuffer::join(["x", "y", "z"], " + "), "x + y + z");
}

#[test]
fn test_multiply_divide_reverse() {
    let text = TextBuffer::from("ab");
    assert_eq!(text.multiply(3), "ababab");
    assert_eq!(&text * 2, "abab");
    assert!(text.multiply(0).is_empty());
    assert_eq!(text.reverse(), "ba");

    let parts = TextBuffer::from("abcdefghij").divide(3);
    assert_eq!(parts[0], "abc");
    assert_eq!(parts[1], "def");
    assert_eq!(parts[2], "ghij");
    assert_terminated(&parts[2]);
}

#[test]
fn test_case() {
    let text = TextBuffer::from("MiXeD 123 ñ");
    assert_eq!(text.upper(), "MIXED 123 ñ");
    assert_eq!(text.lower(), "mixed 123 ñ");
}

#[test]
fn test_quote() {
    let text = TextBuffer::from("say");
    let quoted = text.quote();
    assert_eq!(quoted, "\"say\"");
    assert_terminated(&quoted);
    assert_eq!(quoted.quote().unquote(), quoted);
    assert_eq!(quoted.unquote(), text);
    assert_eq!(text.unquote(), text, "Unquoting unquoted text should do nothing.");
    assert_eq!(TextBuffer::from("\"").unquote(), "\"");
    assert_eq!(TextBuffer::from("\"\"").unquote(), "");
}

#[test]
fn test_padding() {
    let mut text = TextBuffer::from("-1");
    text.ensure_start_padding(b'0', 4);
    assert_eq!(text, "-001");
    assert_terminated(&text);

    let mut text = TextBuffer::from("7");
    text.ensure_start_padding(b' ', 3);
    assert_eq!(text, "  7");
    text.ensure_start_padding(b' ', 2);
    assert_eq!(text, "  7", "Text at or beyond the width shouldn't change.");

    text.ensure_end_padding(b'.', 5);
    assert_eq!(text, "  7..");
    assert_terminated(&text);
}

#[test]
fn test_format_int() {
    let mut text = TextBuffer::new();
    text.push_int(0_u8);
    text.push(b' ');
    text.push_int(-17_i16);
    text.push(b' ');
    text.push_int(u128::MAX);
    text.push(b' ');
    text.push_int(i128::MIN);
    assert_eq!(
        text,
        "0 -17 340282366920938463463374607431768211455 -170141183460469231731687303715884105728"
    );
    assert_eq!(TextBuffer::from_int(42_usize), "42");
}

#[test]
fn test_format_float() {
    let format = FloatFormat::DEFAULT;
    let cases: [(f64, FloatFormat, &str); 8] = [
        (0.0, format, "0.000000"),
        (1.5, format, "1.500000"),
        (-2.25, format, "-2.250000"),
        (0.1, format, "0.100000"),
        (2.675, format.with_precision(2), "2.67"),
        (123.456, format, "123.456000"),
        (3.0, format.with_pad(false), "3.0"),
        (12.5, format.with_precision(0), "12"),
    ];

    for (value, format, expected) in cases {
        let mut text = TextBuffer::new();
        text.push_float_with(value, format);
        assert_eq!(text, expected, "Formatting {value} with {format:?}.");
    }

    let mut text = TextBuffer::new();
    text.push_float_with(f64::NAN, format);
    text.push_float_with(f64::NEG_INFINITY, format);
    assert_eq!(text, "nan-inf");
    assert_eq!(format.with_precision(200).precision(), MAX_PRECISION);
}

#[test]
fn test_format_bool() {
    let mut text = TextBuffer::new();
    text.push_bool(true);
    text.push_bool(false);
    assert_eq!(text, "truefalse");
}

#[test]
fn test_parse_int() {
    assert_eq!(TextBuffer::from("-123").parse_int::<i32>(), -123);
    assert_eq!(TextBuffer::from("99 red").parse_int::<u64>(), 99);
    assert_eq!(TextBuffer::from("-1").parse_int::<u32>(), 0);
    assert_eq!(TextBuffer::from("128").parse_int::<i8>(), i8::MAX);
    assert_eq!(TextBuffer::from("-129").parse_int::<i8>(), i8::MIN);
    assert_eq!(TextBuffer::from("-128").try_parse_int::<i8>(), Ok(i8::MIN));

    assert_eq!(
        TextBuffer::from("12a").try_parse_int::<i32>(),
        Err(ParseError::InvalidByte(InvalidByte { index: 2, byte: b'a' }))
    );
    assert!(TextBuffer::from("").try_parse_int::<i32>().unwrap_err().is_empty());
    assert!(TextBuffer::from("-").try_parse_int::<i32>().unwrap_err().is_empty());
    assert!(TextBuffer::from("256").try_parse_int::<u8>().unwrap_err().is_overflow());
    assert!(
        TextBuffer::from("999999999999999999999999999999999999999999")
            .try_parse_int::<u128>()
            .unwrap_err()
            .is_overflow()
    );
}

#[test]
fn test_parse_float() {
    assert_eq!(TextBuffer::from("-12.5").parse_float(), -12.5);
    assert_eq!(TextBuffer::from("3.25kg").parse_float(), 3.25);
    assert_eq!(TextBuffer::from(".5").try_parse_float(), Ok(0.5));
    assert_eq!(TextBuffer::from("7.").try_parse_float(), Ok(7.0));
    assert_eq!(TextBuffer::from("-inf").try_parse_float(), Ok(f64::NEG_INFINITY));
    assert!(TextBuffer::from("nan").parse_float().is_nan());
    assert!(TextBuffer::from(".").try_parse_float().unwrap_err().is_empty());
    assert!(TextBuffer::from("1.2.3").try_parse_float().unwrap_err().is_invalid_byte());
}

#[test]
fn test_large_float_reads_back_exactly() {
    for value in [1.0243113639819459e18, 2_f64.powi(53) + 2.0, 1e300, f64::MAX, -f64::MAX] {
        let mut text = TextBuffer::new();
        text.push_float_with(value, FloatFormat::DEFAULT);
        assert_eq!(text.try_parse_float(), Ok(value), "{text}");
        assert_eq!(text.parse_float(), value);
    }
    assert_eq!(
        TextBuffer::from("1024311363981945856.000000").parse_float(),
        1.0243113639819459e18
    );
}

#[test]
fn test_parse_bool() {
    assert!(TextBuffer::from("true").parse_bool());
    assert!(TextBuffer::from("T").parse_bool());
    assert!(TextBuffer::from("typo").parse_bool());
    assert!(!TextBuffer::from("false").parse_bool());
    assert!(!TextBuffer::from("").parse_bool());

    assert_eq!(TextBuffer::from("TRUE").try_parse_bool(), Ok(true));
    assert_eq!(TextBuffer::from("f").try_parse_bool(), Ok(false));
    assert!(TextBuffer::from("yes").try_parse_bool().unwrap_err().is_invalid_byte());
    assert!(TextBuffer::from("").try_parse_bool().unwrap_err().is_empty());
}

#[test]
fn test_lines() {
    let mut text = TextBuffer::from("first\nsecond\n\nlast");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines, [&b"first"[..], &b"second"[..], &b""[..], &b"last"[..]]);

    let mut seen = Vec::new();
    text.for_each_line(|line| seen.push(line.to_owned()));
    assert_eq!(seen, [c"first", c"second", c"", c"last"].map(CStr::to_owned));
    assert_eq!(text, "first\nsecond\n\nlast", "Line endings should be restored.");
    assert_terminated(&text);

    assert_eq!(TextBuffer::new().lines().count(), 0);
    let mut empty = TextBuffer::new();
    empty.for_each_line(|_| panic!("An empty TextBuffer has no lines."));
}

#[test]
fn test_for_each_line_restores_after_panic() {
    let mut text = TextBuffer::from("a\nb");
    assert_panics!({
        text.for_each_line(|_| panic!("callback failure"));
    });
    assert_eq!(text, "a\nb");
}

#[test]
fn test_from_c_ptr() {
    let source = c"from C";
    // SAFETY: source is a valid, null-terminated string.
    let text = unsafe { TextBuffer::from_c_ptr(source.as_ptr()) };
    assert_eq!(text, "from C");
    assert_eq!(text.c_str(), source);
    assert_ne!(text.as_ptr(), source.as_ptr(), "The contents should be copied.");
}

#[test]
fn test_traits() {
    let mut text = TextBuffer::new();
    write!(text, "{}-{:03}", "id", 7).unwrap();
    assert_eq!(text, "id-007");
    assert_eq!(text.to_string(), "id-007");
    assert_eq!(format!("{text:>8}"), "  id-007");
    assert_eq!(format!("{:?}", TextBuffer::from("a\n")), "TextBuffer { contents: \"a\\n\", len: 2, cap: 2 }");

    let collected: TextBuffer = b"xyz".iter().copied().collect();
    assert_eq!(collected, "xyz");
    assert_terminated(&collected);

    let mut sum = &collected + "!";
    sum += b"?";
    assert_eq!(sum, "xyz!?");
    assert!(TextBuffer::from("a") < TextBuffer::from("b"));
    assert_eq!(sum.as_str(), Ok("xyz!?"));
    assert!(TextBuffer::from_bytes(&[0xff]).as_str().is_err());
}
