use std::vec::Vec;

use core::convert::Infallible;
use crossbeam::channel::{unbounded, Receiver, Sender};
use embedded_io::{BufRead, ErrorKind, ErrorType, Read, Seek, SeekFrom};

/// Input that hands out data in the chunks it was fed, the way a terminal
/// hands over one typed line at a time. End of stream is reported once the
/// sender is dropped and every chunk is drained.
pub struct ChunkedInput {
    chunks: Receiver<Vec<u8>>,
    current: Vec<u8>,
    pos: usize,
}

impl ChunkedInput {
    pub fn new() -> (Sender<Vec<u8>>, Self) {
        let (tx, rx) = unbounded();

        (
            tx,
            Self {
                chunks: rx,
                current: Vec::new(),
                pos: 0,
            },
        )
    }

    pub fn from_chunks<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        let (tx, input) = Self::new();

        for chunk in chunks {
            tx.send(chunk.as_ref().to_vec()).unwrap();
        }

        input
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_chunks([data])
    }

    /// Drain whatever has not been consumed yet
    pub fn remaining(&mut self) -> Vec<u8> {
        let mut out = Vec::new();

        loop {
            let available = self.fill_buf().unwrap();
            if available.is_empty() {
                break out;
            }
            let len = available.len();
            out.extend_from_slice(available);
            self.consume(len);
        }
    }
}

impl ErrorType for ChunkedInput {
    type Error = Infallible;
}

impl Read for ChunkedInput {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let available = self.fill_buf()?;
        let len = available.len().min(buf.len());

        buf[..len].copy_from_slice(&available[..len]);
        self.consume(len);

        Ok(len)
    }
}

impl BufRead for ChunkedInput {
    fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        while self.pos == self.current.len() {
            match self.chunks.recv() {
                Ok(chunk) => {
                    self.current = chunk;
                    self.pos = 0;
                }
                Err(_) => return Ok(&[]),
            }
        }

        Ok(&self.current[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos += amt;
    }
}

/// Seekable stream whose declared length can differ from what it delivers,
/// optionally failing once its data runs out.
pub struct TruncatedFile {
    data: Vec<u8>,
    reported_len: u64,
    pos: usize,
    failure: Option<ErrorKind>,
}

impl TruncatedFile {
    pub fn new(data: &[u8], reported_len: u64) -> Self {
        Self {
            data: data.to_vec(),
            reported_len,
            pos: 0,
            failure: None,
        }
    }

    pub fn failing_with(mut self, kind: ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }
}

impl ErrorType for TruncatedFile {
    type Error = ErrorKind;
}

impl Read for TruncatedFile {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let rest = &self.data[self.pos.min(self.data.len())..];

        if rest.is_empty() {
            return match self.failure {
                Some(kind) => Err(kind),
                None => Ok(0),
            };
        }

        let len = rest.len().min(buf.len());
        buf[..len].copy_from_slice(&rest[..len]);
        self.pos += len;

        Ok(len)
    }
}

impl Seek for TruncatedFile {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        let target = match pos {
            SeekFrom::Start(offset) => offset as i64,
            SeekFrom::End(offset) => self.reported_len as i64 + offset,
            SeekFrom::Current(offset) => self.pos as i64 + offset,
        };

        if target < 0 {
            return Err(ErrorKind::InvalidInput);
        }

        self.pos = target as usize;

        Ok(target as u64)
    }
}

/// Stream where every operation fails
pub struct FailingStream {
    kind: ErrorKind,
}

impl FailingStream {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl ErrorType for FailingStream {
    type Error = ErrorKind;
}

impl Read for FailingStream {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Err(self.kind)
    }
}

impl BufRead for FailingStream {
    fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        Err(self.kind)
    }

    fn consume(&mut self, _amt: usize) {}
}

impl Seek for FailingStream {
    fn seek(&mut self, _pos: SeekFrom) -> Result<u64, Self::Error> {
        Err(self.kind)
    }
}

/// Wraps an input so the first `times` operations fail with `Interrupted`
pub struct Interrupting<T> {
    inner: T,
    times: usize,
}

impl<T> Interrupting<T> {
    pub fn new(inner: T, times: usize) -> Self {
        Self { inner, times }
    }

    fn interrupt(&mut self) -> bool {
        if self.times > 0 {
            self.times -= 1;
            true
        } else {
            false
        }
    }
}

impl<T: ErrorType> ErrorType for Interrupting<T> {
    type Error = ErrorKind;
}

impl<T: Read> Read for Interrupting<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.interrupt() {
            return Err(ErrorKind::Interrupted);
        }
        self.inner
            .read(buf)
            .map_err(|e| embedded_io::Error::kind(&e))
    }
}

impl<T: BufRead> BufRead for Interrupting<T> {
    fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        if self.interrupt() {
            return Err(ErrorKind::Interrupted);
        }
        self.inner
            .fill_buf()
            .map_err(|e| embedded_io::Error::kind(&e))
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

impl<T: Seek> Seek for Interrupting<T> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        self.inner
            .seek(pos)
            .map_err(|e| embedded_io::Error::kind(&e))
    }
}
