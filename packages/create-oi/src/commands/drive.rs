//! Drive wheel commands.

use crate::encode::Encode;

use super::{OutOfRangeError, ops};

/// Drives the wheels at an average velocity along an arc.
///
/// A positive velocity with a positive radius drives forward while turning
/// left; a negative radius turns right. A negative velocity drives
/// backward. Certain radius values are sentinels with special meaning
/// rather than arc radii, exposed as associated constants.
///
/// # Encoding
///
/// | Field    | Size | Description |
/// |----------|------|-------------|
/// | opcode   | 1    | [`ops::DRIVE`] |
/// | velocity | 2    | Signed wheel velocity in mm/s, big-endian. |
/// | radius   | 2    | Signed turn radius in mm (or a sentinel), big-endian. |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drive {
    velocity: i16,
    radius: i32,
}

impl Drive {
    /// Radius sentinel: drive straight.
    pub const STRAIGHT: i32 = 32768;

    /// Alternative radius sentinel for driving straight.
    pub const STRAIGHT_ALT: i32 = 32767;

    /// Radius sentinel: turn in place clockwise.
    pub const TURN_CLOCKWISE: i32 = 65535;

    /// Radius value that turns in place counter-clockwise.
    ///
    /// Unlike the other special radii, this one lies inside the normal
    /// radius range and needs no exemption from validation.
    pub const TURN_COUNTER_CLOCKWISE: i32 = 1;

    /// Creates a new `Drive` packet.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `velocity` is outside -500–500
    /// mm/s, or if `radius` is outside -2000–2000 mm and is not one of
    /// [`Self::STRAIGHT`], [`Self::STRAIGHT_ALT`], or
    /// [`Self::TURN_CLOCKWISE`].
    pub fn new(velocity: i16, radius: i32) -> Result<Self, OutOfRangeError> {
        super::check_range("velocity", velocity as i32, -500, 500)?;

        if !matches!(
            radius,
            Self::STRAIGHT | Self::STRAIGHT_ALT | Self::TURN_CLOCKWISE
        ) {
            super::check_range("turn radius", radius, -2000, 2000)?;
        }

        Ok(Self { velocity, radius })
    }

    /// The average wheel velocity in mm/s.
    pub fn velocity(&self) -> i16 {
        self.velocity
    }

    /// The turn radius in mm, or one of the radius sentinels.
    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl Encode for Drive {
    fn size(&self) -> usize {
        5
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::DRIVE;
        data[1..3].copy_from_slice(&self.velocity.to_be_bytes());
        // The low 16 bits carry both ordinary two's-complement radii and
        // the sentinels (32768 = 0x8000, 65535 = 0xFFFF) exactly.
        data[3..5].copy_from_slice(&(self.radius as u16).to_be_bytes());
    }
}

/// Drives the two wheels independently.
///
/// # Encoding
///
/// | Field          | Size | Description |
/// |----------------|------|-------------|
/// | opcode         | 1    | [`ops::DRIVE_DIRECT`] |
/// | right velocity | 2    | Signed right wheel velocity in mm/s, big-endian. |
/// | left velocity  | 2    | Signed left wheel velocity in mm/s, big-endian. |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveDirect {
    velocity_right: i16,
    velocity_left: i16,
}

impl DriveDirect {
    /// Creates a new `DriveDirect` packet.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if either velocity is outside
    /// -500–500 mm/s.
    pub fn new(velocity_right: i16, velocity_left: i16) -> Result<Self, OutOfRangeError> {
        super::check_range("right velocity", velocity_right as i32, -500, 500)?;
        super::check_range("left velocity", velocity_left as i32, -500, 500)?;

        Ok(Self {
            velocity_right,
            velocity_left,
        })
    }

    /// The right wheel velocity in mm/s.
    pub fn velocity_right(&self) -> i16 {
        self.velocity_right
    }

    /// The left wheel velocity in mm/s.
    pub fn velocity_left(&self) -> i16 {
        self.velocity_left
    }
}

impl Encode for DriveDirect {
    fn size(&self) -> usize {
        5
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::DRIVE_DIRECT;
        data[1..3].copy_from_slice(&self.velocity_right.to_be_bytes());
        data[3..5].copy_from_slice(&self.velocity_left.to_be_bytes());
    }
}
