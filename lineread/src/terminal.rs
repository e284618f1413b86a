//! Raw single-character terminal input.
//!
//! [`RawMode`] switches a terminal out of canonical mode and turns off echo
//! for as long as it is held, restoring the saved attributes when dropped.
//! Terminal attributes are process-wide, so every guard holds a process-wide
//! lock: one raw-mode holder finishes before another thread's begins. The
//! lock is reentrant, so a thread already holding a guard can nest another.

use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};

use embedded_io::{Error, ErrorKind, Read};
use parking_lot::{const_reentrant_mutex, ReentrantMutex, ReentrantMutexGuard};

use crate::error::ReadError;
use crate::input::RawChar;
use crate::std_io::StdinWrapper;

static RAW_MODE: ReentrantMutex<()> = const_reentrant_mutex(());

fn terminal_error() -> ReadError {
    ReadError::Terminal(io::Error::last_os_error().kind().into())
}

/// Terminal held in non-canonical, non-echoing mode
pub struct RawMode<'fd> {
    fd: BorrowedFd<'fd>,
    saved: Option<libc::termios>,
    _serial: ReentrantMutexGuard<'static, ()>,
}

impl<'fd> RawMode<'fd> {
    /// Disable canonical mode and echo on `fd`, waiting for any guard held
    /// by another thread to be dropped first.
    ///
    /// A descriptor that is not a terminal is left untouched and the
    /// returned guard only holds the lock.
    pub fn acquire(fd: BorrowedFd<'fd>) -> Result<Self, ReadError> {
        let serial = RAW_MODE.lock();
        let raw = fd.as_raw_fd();

        if unsafe { libc::isatty(raw) } == 0 {
            debug!("fd {} is not a terminal", raw);
            return Ok(Self {
                fd,
                saved: None,
                _serial: serial,
            });
        }

        let mut saved: libc::termios = unsafe { core::mem::zeroed() };
        if unsafe { libc::tcgetattr(raw, &mut saved) } != 0 {
            return Err(terminal_error());
        }

        let mut raw_attrs = saved;
        raw_attrs.c_lflag &= !(libc::ICANON | libc::ECHO);

        if unsafe { libc::tcsetattr(raw, libc::TCSANOW, &raw_attrs) } != 0 {
            return Err(terminal_error());
        }

        Ok(Self {
            fd,
            saved: Some(saved),
            _serial: serial,
        })
    }

    /// Whether terminal attributes were changed and will be restored
    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }
}

// Runs before the fields drop, so attributes are back before the lock is
// released.
impl Drop for RawMode<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if unsafe { libc::tcsetattr(self.fd.as_raw_fd(), libc::TCSANOW, &saved) } != 0 {
                warn!("failed to restore terminal attributes");
            }
        }
    }
}

/// Read one character from stdin without waiting for a line terminator and
/// without echoing it. Blocks until a byte is available.
pub fn read_raw_char() -> Result<RawChar, ReadError> {
    let stdin = io::stdin();

    read_raw_char_with(stdin.as_fd(), || StdinWrapper::new_with(stdin.lock()))
}

/// Read one byte from `input` while the terminal behind `fd` is in raw
/// mode.
pub fn read_raw_char_from<R: Read + ?Sized>(
    fd: BorrowedFd<'_>,
    input: &mut R,
) -> Result<RawChar, ReadError> {
    let _mode = RawMode::acquire(fd)?;

    read_byte(input)
}

/// Like [`read_raw_char_from`], but the input is only opened once raw mode
/// is held, so its own lock always nests inside the raw-mode lock.
fn read_raw_char_with<R: Read>(
    fd: BorrowedFd<'_>,
    open: impl FnOnce() -> R,
) -> Result<RawChar, ReadError> {
    let _mode = RawMode::acquire(fd)?;

    read_byte(&mut open())
}

fn read_byte<R: Read + ?Sized>(input: &mut R) -> Result<RawChar, ReadError> {
    let mut byte = [0u8; 1];

    loop {
        match input.read(&mut byte) {
            Ok(0) => return Err(ReadError::EndOfStream),
            Ok(_) => return Ok(RawChar::new(byte[0])),
            Err(err) if err.kind() == ErrorKind::Interrupted => (),
            Err(err) => return Err(ReadError::read_error(err)),
        }
    }
}
