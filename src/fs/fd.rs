use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::io;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::Deref;

use libc::{
    EACCES, EBADF, EDQUOT, EFAULT, EFBIG, EINTR, EIO, EISDIR, ELOOP, EMFILE, ENAMETOOLONG, ENFILE,
    ENOENT, ENOMEM, ENOSPC, ENOTDIR, EOVERFLOW, EPERM, EPIPE, EROFS, ETXTBSY, c_int, c_uint,
    mode_t,
};

use crate::fs::error::{
    AccessError, BusyExecutableError, CloseError, ExcessiveLinksError, FileCountError, IOError,
    InterruptError, IsDirectoryError, MissingComponentError, NonDirComponentError, OOMError,
    OpenError, OversizedFileError, PathLengthError, ReadError, ReadOnlyFSError,
    StorageExhaustedError, WriteError,
};
use crate::fs::panic::{BadAddrPanic, BadFdPanic, Panic, UnexpectedErrorPanic};

/// Returns the calling thread's last OS error code.
pub(crate) fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// An owned file descriptor, closed when dropped.
pub(crate) struct Fd(pub(crate) c_int);

impl Fd {
    pub(crate) fn open(pathname: &CStr, flags: c_int, mode: mode_t) -> Result<Fd, OpenError> {
        loop {
            // SAFETY: pathname is a valid C string for the duration of the call. The mode is
            // promoted to an unsigned int, as open expects for its variadic argument.
            match unsafe { libc::open(pathname.as_ptr(), flags, c_uint::from(mode)) } {
                -1 => match err_no() {
                    EINTR => log::warn!("open of {pathname:?} interrupted, retrying"),
                    EACCES | EPERM =>       Err(AccessError)?,
                    EDQUOT | ENOSPC =>      Err(StorageExhaustedError)?,
                    EFAULT =>               BadAddrPanic.panic(),
                    EFBIG | EOVERFLOW =>    Err(OversizedFileError)?,
                    EISDIR =>               Err(IsDirectoryError)?,
                    ELOOP =>                Err(ExcessiveLinksError)?,
                    EMFILE | ENFILE =>      Err(FileCountError)?,
                    ENAMETOOLONG =>         Err(PathLengthError)?,
                    ENOENT =>               Err(MissingComponentError)?,
                    ENOMEM =>               Err(OOMError)?,
                    ENOTDIR =>              Err(NonDirComponentError)?,
                    EROFS =>                Err(ReadOnlyFSError)?,
                    ETXTBSY =>              Err(BusyExecutableError)?,
                    e =>                    UnexpectedErrorPanic(e).panic(),
                },
                fd => return Ok(Fd(fd)),
            }
        }
    }

    /// Reads once into `buf`, retrying if interrupted. Returns the number of bytes that were
    /// initialized, which is 0 at the end of the file.
    pub(crate) fn read(&self, buf: &mut [MaybeUninit<u8>]) -> Result<usize, ReadError> {
        loop {
            // SAFETY: buf is valid for writes of buf.len() bytes, and any byte pattern is a valid
            // MaybeUninit<u8>.
            match unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) } {
                -1 => match err_no() {
                    EINTR =>  log::warn!("read from {self:?} interrupted, retrying"),
                    EBADF =>  BadFdPanic.panic(),
                    EFAULT => BadAddrPanic.panic(),
                    EIO =>    Err(IOError)?,
                    EISDIR => Err(IsDirectoryError)?,
                    e =>      UnexpectedErrorPanic(e).panic(),
                },
                count => return Ok(count.unsigned_abs()),
            }
        }
    }

    /// Writes once from `buf`, retrying if interrupted. Returns the number of bytes written.
    pub(crate) fn write(&self, buf: &[u8]) -> Result<usize, WriteError> {
        loop {
            // SAFETY: buf is valid for reads of buf.len() bytes.
            match unsafe { libc::write(self.0, buf.as_ptr().cast(), buf.len()) } {
                -1 => match err_no() {
                    EINTR =>           log::warn!("write to {self:?} interrupted, retrying"),
                    EBADF =>           BadFdPanic.panic(),
                    EFAULT =>          BadAddrPanic.panic(),
                    EDQUOT | ENOSPC => Err(StorageExhaustedError)?,
                    EFBIG =>           Err(OversizedFileError)?,
                    EIO | EPIPE =>     Err(IOError)?,
                    e =>               UnexpectedErrorPanic(e).panic(),
                },
                count => return Ok(count.unsigned_abs()),
            }
        }
    }

    /// Returns the size of the file according to fstat, if it is known.
    pub(crate) fn size(&self) -> Option<usize> {
        let mut raw = MaybeUninit::<libc::stat>::uninit();
        // SAFETY: raw is valid for writes of a stat struct.
        if unsafe { libc::fstat(self.0, raw.as_mut_ptr()) } == -1 {
            return None;
        }
        // SAFETY: fstat succeeded, so it initialized raw.
        let raw = unsafe { raw.assume_init() };
        usize::try_from(raw.st_size).ok()
    }

    pub(crate) fn close(self) -> Result<(), CloseError> {
        // Whatever the outcome, close releases the descriptor, so Drop must not close it again.
        let fd = ManuallyDrop::new(self);
        // SAFETY: fd is owned and is never used again.
        if unsafe { libc::close(fd.0) } == -1 {
            match err_no() {
                EBADF =>           BadFdPanic.panic(),
                EINTR =>           Err(InterruptError)?,
                EIO =>             Err(IOError)?,
                ENOSPC | EDQUOT => Err(StorageExhaustedError)?,
                e =>               UnexpectedErrorPanic(e).panic(),
            }
        }
        Ok(())
    }
}

impl Deref for Fd {
    type Target = c_int;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            log::warn!("error while dropping {self:?}: OS error {}", err_no());
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
