#![cfg(test)]

use std::fs as std_fs;

use super::*;
use crate::collections::contiguous::Sequence;
use crate::text::TextBuffer;

#[test]
fn test_save_and_load_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bytes.bin");

    let seq: Sequence<u8> = (0..=255).collect();
    seq.save(&path).unwrap();
    assert_eq!(std_fs::read(&path).unwrap(), &*seq);

    let loaded = Sequence::load(&path).unwrap();
    assert_eq!(loaded, seq);
    assert!(loaded.len() <= loaded.cap());
}

#[test]
fn test_save_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");

    TextBuffer::from("a much longer first version").save(&path).unwrap();
    TextBuffer::from("short").save(&path).unwrap();

    let text = TextBuffer::load(&path).unwrap();
    assert_eq!(text, "short");
    assert_eq!(text.c_str(), c"short");
}

#[test]
fn test_load_large_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large.txt");
    let contents: Vec<u8> = (0..100_000_u32).map(|i| b'a' + (i % 26) as u8).collect();
    std_fs::write(&path, &contents).unwrap();

    let text = TextBuffer::load(&path).unwrap();
    assert_eq!(text.len(), contents.len());
    assert_eq!(text.as_bytes(), &contents[..]);
    assert_eq!(text.as_bytes_with_nul()[contents.len()], 0);
}

#[test]
fn test_load_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty");
    std_fs::write(&path, b"").unwrap();

    let text = TextBuffer::load(&path).unwrap();
    assert!(text.is_empty());
    assert_eq!(text.c_str(), c"");
}

#[test]
fn test_open_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = Sequence::load(dir.path().join("missing"));
    assert_eq!(missing, Err(LoadError::Open(MissingComponentError.into())));

    let directory = File::open(dir.path()).unwrap();
    let mut seq = Sequence::new();
    assert_eq!(directory.read_to_end(&mut seq), Err(IsDirectoryError.into()));

    let not_dir = dir.path().join("file");
    std_fs::write(&not_dir, b"").unwrap();
    assert!(File::open(not_dir.join("child")).unwrap_err().is_non_dir_component());

    assert!(File::create("nul\0byte").unwrap_err().is_invalid_path());
    assert!(
        TextBuffer::new()
            .save(dir.path())
            .unwrap_err()
            .is_open(),
        "Saving over a directory should fail to open it."
    );
}

#[test]
fn test_read_and_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial");

    let file = File::create(&path).unwrap();
    file.write_all(b"hello world").unwrap();
    assert_eq!(file.write(b"!").unwrap(), 1);
    file.close().unwrap();

    let file = File::open(&path).unwrap();
    let mut buf = [0_u8; 5];
    assert_eq!(file.read(&mut buf).unwrap(), 5);
    assert_eq!(&buf, b"hello");

    let mut rest = Sequence::from(*b">");
    assert_eq!(file.read_to_end(&mut rest).unwrap(), 7);
    assert_eq!(&*rest, b"> world!");
    assert_eq!(file.read(&mut buf).unwrap(), 0);
}
