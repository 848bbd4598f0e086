use std::path::Path;

use crate::collections::contiguous::Sequence;
use crate::fs::File;
use crate::fs::error::{LoadError, SaveError};
use crate::text::TextBuffer;

impl Sequence<u8> {
    /// Reads the whole file at `path` into a new Sequence.
    ///
    /// # Errors
    /// Returns a [`LoadError`] describing whether opening, reading or closing the file failed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Sequence<u8>, LoadError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut seq = Sequence::new();
        file.read_to_end(&mut seq)?;
        file.close()?;

        log::debug!("loaded {} bytes from {}", seq.len(), path.display());
        Ok(seq)
    }

    /// Writes the contents to the file at `path`, replacing anything that was there.
    ///
    /// # Errors
    /// Returns a [`SaveError`] describing whether opening, writing or closing the file failed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        file.write_all(self)?;
        file.close()?;

        log::debug!("saved {} bytes to {}", self.len(), path.display());
        Ok(())
    }
}

impl TextBuffer {
    /// Reads the whole file at `path` into a new TextBuffer. The file's contents are taken as-is,
    /// they don't need to be UTF-8.
    ///
    /// # Errors
    /// Returns a [`LoadError`] describing whether opening, reading or closing the file failed.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// # let dir = tempfile::tempdir().unwrap();
    /// let path = dir.path().join("greeting.txt");
    /// TextBuffer::from("hello\n").save(&path).unwrap();
    /// assert_eq!(TextBuffer::load(&path).unwrap(), "hello\n");
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TextBuffer, LoadError> {
        Ok(TextBuffer::from(Sequence::load(path)?))
    }

    /// Writes the contents, without the terminator, to the file at `path`.
    ///
    /// # Errors
    /// Returns a [`SaveError`] describing whether opening, writing or closing the file failed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        self.seq.save(path)
    }
}
