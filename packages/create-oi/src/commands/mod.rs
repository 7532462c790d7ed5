//! Typed Open Interface command packets.
//!
//! Each packet struct corresponds to one opcode in [`ops`]. Construction
//! validates any documented numeric bounds, so an existing packet value
//! always encodes to a well-formed command frame. Commands with arguments
//! are created through `new`, which fails with [`OutOfRangeError`] before
//! anything reaches the wire.

use thiserror::Error;

mod actuator;
mod demo;
mod drive;
mod mode;
mod script;
mod sensor;
mod song;
mod wait;

pub use actuator::{
    DigitalOutputs, DriverBits, LedBits, Leds, LowSideDrivers, OutputBits, PwmLowSideDrivers,
    SendIr,
};
pub use demo::{Cover, CoverAndDock, Demo, Spot};
pub use drive::{Drive, DriveDirect};
pub use mode::{Baud, BaudRate, Full, Safe, Start};
pub use script::{PlayScript, Script, ShowScript};
pub use sensor::{PauseResumeStream, QueryList, Sensors, Stream};
pub use song::{Note, PlaySong, Song};
pub use wait::{WaitAngle, WaitDistance, WaitEvent, WaitTime};

/// Open Interface command opcodes.
///
/// These are the byte values identifying the different OI commands.
pub mod ops {
    pub const START: u8 = 128;
    pub const BAUD: u8 = 129;
    pub const SAFE: u8 = 131;
    pub const FULL: u8 = 132;
    pub const SPOT: u8 = 134;
    pub const COVER: u8 = 135;
    pub const DEMO: u8 = 136;
    pub const DRIVE: u8 = 137;
    pub const LOW_SIDE_DRIVERS: u8 = 138;
    pub const LED: u8 = 139;
    pub const SONG: u8 = 140;
    pub const PLAY_SONG: u8 = 141;
    pub const SENSORS: u8 = 142;
    pub const COVER_AND_DOCK: u8 = 143;
    pub const PWM_LOW_SIDE_DRIVERS: u8 = 144;
    pub const DRIVE_DIRECT: u8 = 145;
    pub const DIGITAL_OUTPUTS: u8 = 147;
    pub const STREAM: u8 = 148;
    pub const QUERY_LIST: u8 = 149;
    pub const PAUSE_RESUME_STREAM: u8 = 150;
    pub const SEND_IR: u8 = 151;
    pub const SCRIPT: u8 = 152;
    pub const PLAY_SCRIPT: u8 = 153;
    pub const SHOW_SCRIPT: u8 = 154;
    pub const WAIT_TIME: u8 = 155;
    pub const WAIT_DISTANCE: u8 = 156;
    pub const WAIT_ANGLE: u8 = 157;
    pub const WAIT_EVENT: u8 = 158;
}

/// Returned when a command argument violates its documented numeric bound.
///
/// Raised at packet construction, before any bytes are written, so a failed
/// call never leaves a partial frame on the wire.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{name} out of range: {value} is not in {min}..={max}")]
pub struct OutOfRangeError {
    /// Name of the offending argument.
    pub name: &'static str,
    /// The rejected value.
    pub value: i32,
    /// Lower bound (inclusive).
    pub min: i32,
    /// Upper bound (inclusive).
    pub max: i32,
}

pub(crate) fn check_range(
    name: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<(), OutOfRangeError> {
    if value < min || value > max {
        Err(OutOfRangeError {
            name,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}
