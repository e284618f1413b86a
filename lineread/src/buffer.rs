//! Owned byte buffer returned by the readers.

use alloc::{string::String, vec::Vec};
use core::{
    ffi::CStr,
    fmt,
    ops::Deref,
    str::{from_utf8, Utf8Error},
};

use crate::error::ReadError;

/// Line terminator
pub(crate) const LF: u8 = b'\n';

/// Heap-allocated bytes handed to the caller by a reader.
///
/// The storage always holds the content followed by a single NUL, so the
/// content can be passed on as a [`CStr`] when it has no interior NULs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OwnedBuffer {
    bytes: Vec<u8>,
}

impl OwnedBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Terminate `bytes` in place. Capacity for the terminator must already
    /// have been reserved by the caller, otherwise this reallocates.
    pub(crate) fn terminate(mut bytes: Vec<u8>) -> Result<Self, ReadError> {
        bytes.try_reserve_exact(1)?;
        bytes.push(0);

        Ok(Self { bytes })
    }

    /// Length of the content, not counting the terminator
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes allocated, terminator slot included
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Content followed by the NUL terminator
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Content as a C string, or `None` if it contains a NUL byte
    pub fn as_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(&self.bytes).ok()
    }

    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        from_utf8(self.as_bytes())
    }

    /// Drop the last content byte if it is a line terminator. Returns
    /// whether anything was removed.
    pub fn trim_terminator(&mut self) -> bool {
        if self.as_bytes().last() == Some(&LF) {
            self.bytes.pop();
            let len = self.bytes.len();
            self.bytes[len - 1] = 0;
            true
        } else {
            false
        }
    }

    /// Release excess capacity, keeping room for the terminator
    pub fn shrink_to_fit(&mut self) {
        self.bytes.shrink_to_fit();
    }

    /// Content without the terminator
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes.pop();
        self.bytes
    }

    pub fn into_string(self) -> Result<String, alloc::string::FromUtf8Error> {
        String::from_utf8(self.into_bytes())
    }
}

impl Default for OwnedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for OwnedBuffer {
    fn from(mut bytes: Vec<u8>) -> Self {
        bytes.push(0);
        Self { bytes }
    }
}

impl From<&str> for OwnedBuffer {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes().to_vec())
    }
}

impl Deref for OwnedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for OwnedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for OwnedBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for OwnedBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for OwnedBuffer {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for OwnedBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Debug for OwnedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Ok(s) => f.debug_tuple("OwnedBuffer").field(&s).finish(),
            Err(_) => f.debug_tuple("OwnedBuffer").field(&self.as_bytes()).finish(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OwnedBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "OwnedBuffer({=[u8]})", self.as_bytes())
    }
}
