//! Growable line reader.
//!
//! Reads one line from any [`BufRead`] into an [`OwnedBuffer`], doubling the
//! buffer until the line terminator is found. Input after the terminator is
//! left in the stream, so repeated calls return successive lines.
//!
//! # Example
//! ```
//! use lineread::line_reader::{LineReader, EndOfStreamPolicy};
//! use lineread::std_io::StdWrapper;
//!
//! let mut input = StdWrapper::new(&b"first\nsecond"[..]);
//! let reader = LineReader::new().with_end_of_stream(EndOfStreamPolicy::AcceptPartial);
//!
//! assert_eq!(reader.read_line(&mut input).unwrap(), "first");
//! assert_eq!(reader.read_line(&mut input).unwrap(), "second");
//! ```

use alloc::vec::Vec;

use embedded_io::{BufRead, Error, ErrorKind};

use crate::buffer::{OwnedBuffer, LF};
use crate::error::ReadError;

/// Capacity of a fresh line buffer, terminator slot included
pub const DEFAULT_INITIAL_CAPACITY: usize = 128;

/// What to do when the stream ends part way through a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndOfStreamPolicy {
    /// Fail with [`ReadError::EndOfStream`], discarding the partial line
    #[default]
    RequireTerminator,
    /// Return the partial line as if it had been terminated
    AcceptPartial,
}

/// Line reader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineReader {
    initial_capacity: usize,
    end_of_stream: EndOfStreamPolicy,
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            end_of_stream: EndOfStreamPolicy::RequireTerminator,
        }
    }

    /// Set the starting capacity. Values below 2 are raised to 2 so there
    /// is always room for one byte next to the terminator.
    pub const fn with_initial_capacity(self, capacity: usize) -> Self {
        Self {
            initial_capacity: if capacity < 2 { 2 } else { capacity },
            ..self
        }
    }

    pub const fn with_end_of_stream(self, policy: EndOfStreamPolicy) -> Self {
        Self {
            end_of_stream: policy,
            ..self
        }
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn end_of_stream(&self) -> EndOfStreamPolicy {
        self.end_of_stream
    }

    /// Read one line with the terminator stripped
    pub fn read_line<R: BufRead + ?Sized>(&self, input: &mut R) -> Result<OwnedBuffer, ReadError> {
        let mut capacity = self.initial_capacity;
        let mut line = Vec::new();
        line.try_reserve_exact(capacity)?;

        loop {
            let available = match input.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(ReadError::read_error(err)),
            };

            if available.is_empty() {
                return self.finish_partial(line);
            }

            // One slot stays free for the terminator
            let room = capacity - 1 - line.len();

            if room == 0 {
                capacity = capacity
                    .checked_mul(2)
                    .ok_or(ReadError::AllocationFailure)?;
                line.try_reserve_exact(capacity - line.len())?;
                trace!("line buffer grown to {}", capacity);
                continue;
            }

            let window = &available[..available.len().min(room)];

            match window.iter().position(|&b| b == LF) {
                Some(end) => {
                    line.extend_from_slice(&window[..end]);
                    input.consume(end + 1);
                    return finish(line);
                }
                None => {
                    let len = window.len();
                    line.extend_from_slice(window);
                    input.consume(len);
                }
            }
        }
    }

    /// Iterate over the lines of `input`
    pub fn lines<R: BufRead>(&self, input: R) -> Lines<R> {
        Lines {
            reader: *self,
            input,
            done: false,
        }
    }

    fn finish_partial(&self, line: Vec<u8>) -> Result<OwnedBuffer, ReadError> {
        if line.is_empty() {
            return Err(ReadError::EndOfStream);
        }

        match self.end_of_stream {
            EndOfStreamPolicy::RequireTerminator => {
                debug!("discarding {} bytes without line terminator", line.len());
                Err(ReadError::EndOfStream)
            }
            EndOfStreamPolicy::AcceptPartial => finish(line),
        }
    }
}

fn finish(line: Vec<u8>) -> Result<OwnedBuffer, ReadError> {
    let mut buffer = OwnedBuffer::terminate(line)?;
    buffer.shrink_to_fit();
    Ok(buffer)
}

/// Read one line using the default configuration
pub fn read_line<R: BufRead + ?Sized>(input: &mut R) -> Result<OwnedBuffer, ReadError> {
    LineReader::new().read_line(input)
}

/// Iterator over lines, created by [`LineReader::lines`].
///
/// Ends at end of stream and after the first other error.
pub struct Lines<R> {
    reader: LineReader,
    input: R,
    done: bool,
}

impl<R> Lines<R> {
    /// Give back the underlying input
    pub fn into_inner(self) -> R {
        self.input
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<OwnedBuffer, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_line(&mut self.input) {
            Ok(line) => Some(Ok(line)),
            Err(ReadError::EndOfStream) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
