//! Built-in demo commands.
//!
//! All of these change the OI mode to Passive while the demo runs.

use crate::encode::Encode;

use super::{OutOfRangeError, ops};

/// Starts the requested built-in demo by number.
///
/// # Encoding
///
/// | Field  | Size | Description |
/// |--------|------|-------------|
/// | opcode | 1    | [`ops::DEMO`] |
/// | demo   | 1    | Demo number (0–9), or 255 to abort the current demo. |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demo {
    demo: u8,
}

impl Demo {
    /// Demo number that aborts the demo the robot is currently performing.
    pub const ABORT: u8 = 255;

    /// Creates a new `Demo` packet.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `demo` is not 0–9 or [`Self::ABORT`].
    pub fn new(demo: u8) -> Result<Self, OutOfRangeError> {
        if demo != Self::ABORT {
            super::check_range("demo", demo as i32, 0, 9)?;
        }
        Ok(Self { demo })
    }

    /// The selected demo number.
    pub fn demo(&self) -> u8 {
        self.demo
    }
}

impl Encode for Demo {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::DEMO;
        data[1] = self.demo;
    }
}

/// Starts the Cover demo.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cover;

impl Encode for Cover {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::COVER;
    }
}

/// Starts the Cover and Dock demo.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoverAndDock;

impl Encode for CoverAndDock {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::COVER_AND_DOCK;
    }
}

/// Starts the Spot Cover demo.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Spot;

impl Encode for Spot {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::SPOT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_bounds() {
        assert!(Demo::new(0).is_ok());
        assert!(Demo::new(9).is_ok());
        assert!(Demo::new(Demo::ABORT).is_ok());
        assert!(Demo::new(10).is_err());
    }

    #[test]
    fn demo_frame() {
        let mut buf = [0u8; 2];
        Demo::new(3).unwrap().encode(&mut buf);
        assert_eq!(buf, [136, 3]);
    }
}
