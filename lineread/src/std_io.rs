//! Readers over `std::io`.
//!
//! [`StdinWrapper`] and [`StdWrapper`] expose std streams through the
//! `embedded-io` traits the readers are written against. [`read_line`] and
//! [`read_file`] are the entry points for process stdin and std files.
//!
//! # Example
//! ```no_run
//! use lineread::std_io;
//! use std::fs::File;
//!
//! let name = std_io::read_line().unwrap();
//! let mut file = File::open(name.as_str().unwrap()).unwrap();
//! let contents = std_io::read_file(&mut file, true).unwrap();
//! ```

use std::io::{self, BufRead as _, StdinLock};

use embedded_io::{ErrorKind, ErrorType, SeekFrom};

use crate::buffer::OwnedBuffer;
use crate::error::ReadError;
use crate::file_reader::FileReader;
use crate::line_reader::LineReader;

/// Locked process stdin
pub struct StdinWrapper(StdinLock<'static>);

impl StdinWrapper {
    pub fn new() -> Self {
        Self(io::stdin().lock())
    }

    pub fn new_with(val: StdinLock<'static>) -> Self {
        Self(val)
    }
}

impl Default for StdinWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for StdinWrapper {
    type Error = ErrorKind;
}

impl embedded_io::Read for StdinWrapper {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        io::Read::read(&mut self.0, buf).map_err(|e| e.kind().into())
    }
}

impl embedded_io::BufRead for StdinWrapper {
    fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        self.0.fill_buf().map_err(|e| e.kind().into())
    }

    fn consume(&mut self, amt: usize) {
        self.0.consume(amt)
    }
}

/// Any std stream seen through `embedded-io`. Each trait is available when
/// the wrapped type implements its std counterpart.
pub struct StdWrapper<T>(T);

impl<T> StdWrapper<T> {
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> ErrorType for StdWrapper<T> {
    type Error = ErrorKind;
}

impl<T: io::Read> embedded_io::Read for StdWrapper<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        io::Read::read(&mut self.0, buf).map_err(|e| e.kind().into())
    }
}

impl<T: io::BufRead> embedded_io::BufRead for StdWrapper<T> {
    fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        self.0.fill_buf().map_err(|e| e.kind().into())
    }

    fn consume(&mut self, amt: usize) {
        self.0.consume(amt)
    }
}

impl<T: io::Seek> embedded_io::Seek for StdWrapper<T> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        let pos = match pos {
            SeekFrom::Start(offset) => io::SeekFrom::Start(offset),
            SeekFrom::End(offset) => io::SeekFrom::End(offset),
            SeekFrom::Current(offset) => io::SeekFrom::Current(offset),
        };

        io::Seek::seek(&mut self.0, pos).map_err(|e| e.kind().into())
    }
}

/// Read one line from stdin with the terminator stripped
pub fn read_line() -> Result<OwnedBuffer, ReadError> {
    LineReader::new().read_line(&mut StdinWrapper::new())
}

/// Read the whole of a std file, optionally dropping one trailing line
/// terminator. The file stays open; closing it is up to the caller.
pub fn read_file<F: io::Read + io::Seek>(
    file: &mut F,
    trim_terminator: bool,
) -> Result<OwnedBuffer, ReadError> {
    FileReader::new()
        .trim_terminator(trim_terminator)
        .read(&mut StdWrapper::new(file))
}
