//! Raw terminal bytes

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Keys a canonical-mode terminal would act on itself, delivered as plain
/// bytes once canonical mode is off
#[derive(Debug, Eq, PartialEq, Copy, Clone, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ControlCharacter {
    /// Ctrl-C
    Interrupt = 0x3,
    /// Ctrl-D
    EndOfTransmission = 0x4,
    Backspace = 0x8,
    Tab = 0x9,
    LineFeed = 0xA,
    CarriageReturn = 0xD,
    /// Ctrl-Z
    Suspend = 0x1A,
    Escape = 0x1B,
    Delete = 0x7F,
}

/// One byte read from the terminal
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawChar(u8);

impl RawChar {
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    pub const fn byte(self) -> u8 {
        self.0
    }

    /// The byte as a Latin-1 character
    pub fn to_char(self) -> char {
        char::from(self.0)
    }

    /// Control code, if the byte is one
    pub fn control(self) -> Option<ControlCharacter> {
        ControlCharacter::try_from(self.0).ok()
    }

    /// Ctrl-D. Without canonical mode the terminal no longer turns it into
    /// end of stream, so it arrives as a plain byte.
    pub fn is_end_of_transmission(self) -> bool {
        self.control() == Some(ControlCharacter::EndOfTransmission)
    }
}

impl From<u8> for RawChar {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<RawChar> for u8 {
    fn from(c: RawChar) -> Self {
        c.0
    }
}

impl From<RawChar> for char {
    fn from(c: RawChar) -> Self {
        c.to_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable() {
        let c = RawChar::from(b'q');

        assert_eq!(c.to_char(), 'q');
        assert_eq!(u8::from(c), b'q');
        assert_eq!(c.control(), None);
        assert!(!c.is_end_of_transmission());
    }

    #[test]
    fn control_codes() {
        assert_eq!(RawChar::new(0x3).control(), Some(ControlCharacter::Interrupt));
        assert_eq!(RawChar::new(0x1a).control(), Some(ControlCharacter::Suspend));
        assert_eq!(RawChar::new(0x1b).control(), Some(ControlCharacter::Escape));
        assert_eq!(RawChar::new(0x7f).control(), Some(ControlCharacter::Delete));
        assert_eq!(RawChar::new(b' ').control(), None);
        assert_eq!(RawChar::new(0x1).control(), None);
        assert!(RawChar::new(0x4).is_end_of_transmission());
    }

    #[test]
    fn into_primitive() {
        assert_eq!(u8::from(ControlCharacter::LineFeed), b'\n');
        assert_eq!(u8::from(ControlCharacter::CarriageReturn), b'\r');
    }

    #[test]
    fn high_bytes_are_latin1() {
        assert_eq!(RawChar::new(0xe9).to_char(), 'é');
    }
}
