//! Wait commands, primarily useful inside scripts.
//!
//! Each of these pauses command processing until its condition is met;
//! sensor streaming continues in the meantime.

use crate::encode::Encode;

use super::ops;

/// Waits for the given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTime {
    /// Wait duration in tenths of a second, with a resolution of 15ms.
    pub time: u8,
}

impl Encode for WaitTime {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::WAIT_TIME;
        data[1] = self.time;
    }
}

/// Waits until the robot has traveled the given distance.
///
/// # Encoding
///
/// | Field    | Size | Description |
/// |----------|------|-------------|
/// | opcode   | 1    | [`ops::WAIT_DISTANCE`] |
/// | distance | 2    | Signed distance in mm, big-endian. Negative values wait for backward travel. |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitDistance {
    pub distance: i16,
}

impl Encode for WaitDistance {
    fn size(&self) -> usize {
        3
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::WAIT_DISTANCE;
        data[1..3].copy_from_slice(&self.distance.to_be_bytes());
    }
}

/// Waits until the robot has rotated through the given angle.
///
/// Counter-clockwise angles are positive, clockwise angles negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitAngle {
    /// Angle in degrees, big-endian on the wire.
    pub angle: i16,
}

impl Encode for WaitAngle {
    fn size(&self) -> usize {
        3
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::WAIT_ANGLE;
        data[1..3].copy_from_slice(&self.angle.to_be_bytes());
    }
}

/// Waits until the given event occurs.
///
/// Positive event numbers wait for the event; negative event numbers
/// wait for the inverse of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitEvent {
    pub event: i8,
}

impl Encode for WaitEvent {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::WAIT_EVENT;
        data[1] = self.event as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_frames() {
        let mut buf = [0u8; 3];

        WaitDistance { distance: -300 }.encode(&mut buf);
        assert_eq!(buf, [156, 0xFE, 0xD4]);

        WaitAngle { angle: 90 }.encode(&mut buf);
        assert_eq!(buf, [157, 0x00, 0x5A]);

        let mut buf = [0u8; 2];

        WaitTime { time: 10 }.encode(&mut buf);
        assert_eq!(buf, [155, 10]);

        WaitEvent { event: -2 }.encode(&mut buf);
        assert_eq!(buf, [158, 0xFE]);
    }
}
