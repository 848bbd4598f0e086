use derive_more::{Display, Error, From, IsVariant};

use crate::error::AllocationError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file is too large")]
pub struct OversizedFileError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("permission denied")]
pub struct AccessError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file is on a read-only filesystem")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file is an executable that is currently running")]
pub struct BusyExecutableError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path contains a zero byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, From, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum OpenError {
    Access(AccessError),
    BusyExecutable(BusyExecutableError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    Interrupt(InterruptError),
    InvalidPath(InvalidPathError),
    IsDirectory(IsDirectoryError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    OversizedFile(OversizedFileError),
    PathLength(PathLengthError),
    ReadOnlyFS(ReadOnlyFSError),
    StorageExhausted(StorageExhaustedError),
}

#[derive(Debug, Display, From, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    IO(IOError),
    IsDirectory(IsDirectoryError),
    Allocation(AllocationError),
}

#[derive(Debug, Display, From, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    IO(IOError),
    OversizedFile(OversizedFileError),
    StorageExhausted(StorageExhaustedError),
}

#[derive(Debug, Display, From, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
}

/// A failure while reading a whole file into a buffer.
#[derive(Debug, Display, From, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    Open(OpenError),
    Read(ReadError),
    Close(CloseError),
}

/// A failure while writing a whole buffer to a file.
#[derive(Debug, Display, From, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    Open(OpenError),
    Write(WriteError),
    Close(CloseError),
}
