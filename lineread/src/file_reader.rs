//! Whole-file reader.
//!
//! The length of the stream is taken from its end position, then the whole
//! stream is read from the start in one pass. Anything short of the declared
//! length is an error, never a partial result.

use alloc::vec::Vec;

use embedded_io::{Error, ErrorKind, Read, Seek, SeekFrom};

use crate::buffer::OwnedBuffer;
use crate::error::ReadError;

/// What to do with a source that reports a length of zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySourcePolicy {
    /// Fail with [`ReadError::EmptySource`]
    #[default]
    Reject,
    /// Return an empty buffer
    Accept,
}

/// File reader configuration
///
/// # Example
/// ```
/// use lineread::file_reader::{EmptySourcePolicy, FileReader};
///
/// let reader = FileReader::new()
///     .trim_terminator(true)
///     .with_empty_source(EmptySourcePolicy::Accept);
///
/// assert!(reader.trims_terminator());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileReader {
    trim_terminator: bool,
    empty_source: EmptySourcePolicy,
}

impl FileReader {
    pub const fn new() -> Self {
        Self {
            trim_terminator: false,
            empty_source: EmptySourcePolicy::Reject,
        }
    }

    /// Drop one trailing line terminator from the contents
    pub const fn trim_terminator(self, trim: bool) -> Self {
        Self {
            trim_terminator: trim,
            ..self
        }
    }

    pub const fn with_empty_source(self, policy: EmptySourcePolicy) -> Self {
        Self {
            empty_source: policy,
            ..self
        }
    }

    pub fn trims_terminator(&self) -> bool {
        self.trim_terminator
    }

    pub fn empty_source(&self) -> EmptySourcePolicy {
        self.empty_source
    }

    /// Read the entire contents of `stream`, starting from its beginning
    /// whatever its current position.
    pub fn read<S: Read + Seek + ?Sized>(&self, stream: &mut S) -> Result<OwnedBuffer, ReadError> {
        let expected = stream_len(stream)?;
        debug!("reading {} bytes", expected);

        if expected == 0 {
            return match self.empty_source {
                EmptySourcePolicy::Reject => Err(ReadError::EmptySource),
                EmptySourcePolicy::Accept => Ok(OwnedBuffer::new()),
            };
        }

        let len = usize::try_from(expected).map_err(|_| ReadError::AllocationFailure)?;
        let capacity = len.checked_add(1).ok_or(ReadError::AllocationFailure)?;

        let mut contents = Vec::new();
        contents.try_reserve_exact(capacity)?;
        contents.resize(len, 0);

        let read = fill(stream, &mut contents);

        if read < len {
            warn!("short read: {} of {} bytes", read, expected);
            return Err(ReadError::ShortRead { expected, read });
        }

        let mut buffer = OwnedBuffer::terminate(contents)?;

        if self.trim_terminator {
            buffer.trim_terminator();
        }

        Ok(buffer)
    }
}

/// Read the entire contents of `stream`, optionally dropping one trailing
/// line terminator. Empty sources are rejected.
pub fn read_file<S: Read + Seek + ?Sized>(
    stream: &mut S,
    trim_terminator: bool,
) -> Result<OwnedBuffer, ReadError> {
    FileReader::new()
        .trim_terminator(trim_terminator)
        .read(stream)
}

fn stream_len<S: Seek + ?Sized>(stream: &mut S) -> Result<u64, ReadError> {
    let len = stream
        .seek(SeekFrom::End(0))
        .map_err(ReadError::seek_error)?;
    stream.rewind().map_err(ReadError::seek_error)?;

    Ok(len)
}

/// Read until `buf` is full or the stream stops delivering. An error part
/// way through ends the read like end of stream does.
fn fill<S: Read + ?Sized>(stream: &mut S, buf: &mut [u8]) -> usize {
    let mut filled = 0;

    while filled < buf.len() {
        match stream.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => (),
            Err(err) => {
                warn!("read failed after {} bytes: {}", filled, err.kind());
                break;
            }
        }
    }

    filled
}
