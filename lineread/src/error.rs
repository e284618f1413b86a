//! Error types

use alloc::collections::TryReserveError;

use embedded_io::ErrorKind;
use thiserror::Error;

/// Every way a read can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    /// The stream ended before the required content was read
    #[error("end of stream")]
    EndOfStream,
    /// The buffer could not be created or grown
    #[error("allocation failed")]
    AllocationFailure,
    /// The stream delivered fewer bytes than its declared length
    #[error("short read: expected {expected} bytes, got {read}")]
    ShortRead { expected: u64, read: usize },
    /// The source reported a length of zero
    #[error("source is empty")]
    EmptySource,
    #[error("read failed: {0:?}")]
    Read(ErrorKind),
    #[error("seek failed: {0:?}")]
    Seek(ErrorKind),
    /// Terminal attributes could not be read or applied
    #[error("terminal configuration failed: {0:?}")]
    Terminal(ErrorKind),
}

impl ReadError {
    pub(crate) fn read_error(err: impl embedded_io::Error) -> Self {
        Self::Read(err.kind())
    }

    pub(crate) fn seek_error(err: impl embedded_io::Error) -> Self {
        Self::Seek(err.kind())
    }
}

impl From<TryReserveError> for ReadError {
    fn from(_: TryReserveError) -> Self {
        Self::AllocationFailure
    }
}

impl embedded_io::Error for ReadError {
    fn kind(&self) -> ErrorKind {
        match *self {
            ReadError::EndOfStream | ReadError::AllocationFailure => ErrorKind::Other,
            ReadError::ShortRead { .. } | ReadError::EmptySource => ErrorKind::InvalidData,
            ReadError::Read(kind) | ReadError::Seek(kind) | ReadError::Terminal(kind) => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_io::Error as _;
    use std::string::ToString;

    #[test]
    fn reserve_failure_is_allocation_failure() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve_exact(usize::MAX).unwrap_err();

        assert_eq!(ReadError::from(err), ReadError::AllocationFailure);
    }

    #[test]
    fn kinds() {
        assert_eq!(ReadError::EmptySource.kind(), ErrorKind::InvalidData);
        assert_eq!(
            ReadError::Seek(ErrorKind::Unsupported).kind(),
            ErrorKind::Unsupported
        );
        assert_eq!(ReadError::EndOfStream.kind(), ErrorKind::Other);
    }

    #[test]
    fn display() {
        let err = ReadError::ShortRead {
            expected: 10,
            read: 4,
        };

        assert_eq!(err.to_string(), "short read: expected 10 bytes, got 4");
    }
}
