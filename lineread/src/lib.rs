//! Lineread is a small `#[no_std]` input library: read a line of any
//! length, read a whole file, or read a single key press from a terminal,
//! always getting back an owned buffer or an error, never both.
//!
//! Features:
//! - Growable line reader, doubling its buffer until the terminator shows up
//! - Whole-file reader with all-or-nothing semantics
//! - Raw single-character terminal input with guaranteed restore (`std`, unix)
//! - Bulk release of optional buffers
//!
//! The readers are written against the [`embedded_io`] traits, so they work
//! on any byte source. With the `std` feature, [`std_io`] adapts stdin and
//! [`std::fs::File`].
//!
//! # Example
//! ```no_run
//! use lineread::{release_all, std_io};
//! use std::fs::File;
//!
//! let mut path = Some(std_io::read_line().unwrap());
//! let mut file = File::open(path.as_ref().unwrap().as_str().unwrap()).unwrap();
//! let mut contents = Some(std_io::read_file(&mut file, true).unwrap());
//!
//! println!("{:?}", contents);
//!
//! release_all([&mut path, &mut contents]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

#[macro_use]
mod fmt;

pub mod buffer;
pub mod error;
pub mod file_reader;
pub mod input;
pub mod line_reader;
pub mod release;
#[cfg(feature = "std")]
pub mod std_io;
#[cfg(all(feature = "std", unix))]
pub mod terminal;

#[cfg(test)]
pub(crate) mod testlib;

pub use buffer::OwnedBuffer;
pub use error::ReadError;
pub use file_reader::{read_file, FileReader};
pub use input::{ControlCharacter, RawChar};
pub use line_reader::{read_line, LineReader};
pub use release::release_all;
#[cfg(all(feature = "std", unix))]
pub use terminal::read_raw_char;
