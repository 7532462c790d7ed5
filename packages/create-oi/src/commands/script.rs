//! Script commands.
//!
//! A script is a sequence of already-encoded OI commands stored on the
//! robot and replayed with [`PlayScript`]. This crate only frames the
//! script bytes; composing them is up to the caller (any sequence of
//! [`Encode`]d commands works).

use alloc::vec::Vec;

use crate::encode::Encode;

use super::{OutOfRangeError, ops};

/// Defines a script.
///
/// # Encoding
///
/// | Field  | Size | Description |
/// |--------|------|-------------|
/// | opcode | 1    | [`ops::SCRIPT`] |
/// | length | 1    | Number of script bytes (0–100). |
/// | script | n    | Encoded command frames, back to back. |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    bytes: Vec<u8>,
}

impl Script {
    /// Creates a new `Script` packet. A zero-length script clears the
    /// stored one.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if the script is longer than 100
    /// bytes.
    pub fn new(bytes: Vec<u8>) -> Result<Self, OutOfRangeError> {
        super::check_range("script length", bytes.len() as i32, 0, 100)?;
        Ok(Self { bytes })
    }

    /// The encoded script bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Encode for Script {
    fn size(&self) -> usize {
        2 + self.bytes.len()
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::SCRIPT;
        data[1] = self.bytes.len() as u8;
        data[2..2 + self.bytes.len()].copy_from_slice(&self.bytes);
    }
}

/// Plays the currently stored script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayScript;

impl Encode for PlayScript {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::PLAY_SCRIPT;
    }
}

/// Asks the robot to transmit the currently stored script back over the
/// serial connection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShowScript;

impl Encode for ShowScript {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::SHOW_SCRIPT;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn script_frame() {
        // Drive forward, wait a meter, stop.
        let body = vec![137, 0, 100, 0x80, 0, 156, 0x03, 0xE8, 137, 0, 0, 0, 0];
        let script = Script::new(body.clone()).unwrap();

        let mut buf = vec![0u8; script.size()];
        script.encode(&mut buf);

        assert_eq!(buf[0], 152);
        assert_eq!(buf[1], body.len() as u8);
        assert_eq!(&buf[2..], body);
    }

    #[test]
    fn script_length_bound() {
        assert!(Script::new(vec![0; 100]).is_ok());
        assert!(Script::new(vec![0; 101]).is_err());
    }
}
