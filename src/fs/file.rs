use std::ffi::CString;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{O_CLOEXEC, O_CREAT, O_RDONLY, O_TRUNC, O_WRONLY, mode_t};

use crate::collections::contiguous::Sequence;
use crate::fs::Fd;
use crate::fs::error::{
    CloseError, IOError, InvalidPathError, OpenError, ReadError, WriteError,
};

/// The permissions given to files created by [`File::create`], before the umask is applied.
pub const DEFAULT_MODE: mode_t = 0o644;

/// The number of bytes [`File::read_to_end`] grows by when the file's size isn't known up front.
const READ_CHUNK: usize = 8192;

/// A file opened for either reading or writing, closed when dropped.
///
/// Dropping a File ignores any error raised while closing it. Use [`close`](File::close) to
/// observe those errors, which matters after writing: a full disk may only be reported on close.
#[derive(Debug)]
pub struct File {
    pub(crate) fd: Fd,
}

impl File {
    /// Opens an existing file for reading.
    ///
    /// # Errors
    /// Returns an [`OpenError`] describing why the file couldn't be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<File, OpenError> {
        let path = path.as_ref();
        let fd = Fd::open(&c_path(path)?, O_RDONLY | O_CLOEXEC, 0)?;
        log::debug!("opened {} for reading as {fd:?}", path.display());
        Ok(File { fd })
    }

    /// Opens a file for writing, creating it with [`DEFAULT_MODE`] if it doesn't exist and
    /// truncating it if it does.
    ///
    /// # Errors
    /// Returns an [`OpenError`] describing why the file couldn't be opened.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<File, OpenError> {
        File::create_with_mode(path, DEFAULT_MODE)
    }

    /// Like [`create`](File::create), with the provided permissions for a new file.
    ///
    /// # Errors
    /// Returns an [`OpenError`] describing why the file couldn't be opened.
    pub fn create_with_mode<P: AsRef<Path>>(path: P, mode: mode_t) -> Result<File, OpenError> {
        let path = path.as_ref();
        let fd = Fd::open(&c_path(path)?, O_WRONLY | O_CREAT | O_TRUNC | O_CLOEXEC, mode)?;
        log::debug!("opened {} for writing as {fd:?}", path.display());
        Ok(File { fd })
    }

    /// Reads once into `buf`, returning the number of bytes read. A return value of 0 means the
    /// end of the file has been reached (or `buf` is empty).
    ///
    /// # Errors
    /// Returns a [`ReadError`] if the OS reports a failure.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ReadError> {
        // SAFETY: u8 and MaybeUninit<u8> have the same layout, and reading only ever writes
        // initialized bytes into the buffer.
        let buf = unsafe { &mut *(buf as *mut [u8] as *mut [MaybeUninit<u8>]) };
        self.fd.read(buf)
    }

    /// Reads until the end of the file, appending everything to `seq`. The Sequence is grown to
    /// the file's size up front when it is known. Returns the number of bytes read.
    ///
    /// # Errors
    /// Returns a [`ReadError`] if the OS reports a failure or the Sequence can't grow. Bytes read
    /// before the failure are kept in `seq`.
    pub fn read_to_end(&self, seq: &mut Sequence<u8>) -> Result<usize, ReadError> {
        let start = seq.len();
        if let Some(size) = self.fd.size() {
            // One extra slot lets the final read observe the end of the file without growing.
            seq.try_expand(size.saturating_add(1))?;
        }

        loop {
            if seq.len() == seq.cap() {
                seq.try_expand(READ_CHUNK)?;
            }

            let count = self.fd.read(seq.spare_mut())?;
            if count == 0 {
                break;
            }
            // SAFETY: The read initialized the first count bytes of the spare capacity.
            unsafe { seq.set_len(seq.len() + count) }
        }

        Ok(seq.len() - start)
    }

    /// Writes once from `buf`, returning the number of bytes written, which may be less than
    /// `buf.len()`.
    ///
    /// # Errors
    /// Returns a [`WriteError`] if the OS reports a failure.
    pub fn write(&self, buf: &[u8]) -> Result<usize, WriteError> {
        self.fd.write(buf)
    }

    /// Writes the whole of `buf`, continuing after short writes.
    ///
    /// # Errors
    /// Returns a [`WriteError`] if the OS reports a failure, or if it stops accepting bytes.
    pub fn write_all(&self, buf: &[u8]) -> Result<(), WriteError> {
        let mut written = 0;
        while written < buf.len() {
            match self.fd.write(&buf[written..])? {
                0 => Err(IOError)?,
                count => written += count,
            }
            if written < buf.len() {
                log::warn!(
                    "short write to {:?}: {written} of {} bytes, retrying",
                    self.fd,
                    buf.len()
                );
            }
        }
        Ok(())
    }

    /// Closes the file, reporting any error raised in the process.
    ///
    /// # Errors
    /// Returns a [`CloseError`] if the OS reports a failure. The file is closed either way.
    pub fn close(self) -> Result<(), CloseError> {
        self.fd.close()
    }
}

/// Converts a path into a C string for the OS.
fn c_path(path: &Path) -> Result<CString, InvalidPathError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| InvalidPathError)
}
