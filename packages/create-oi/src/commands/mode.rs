//! OI startup and operating mode commands.

use crate::encode::Encode;

use super::ops;

/// Starts the Open Interface.
///
/// Must always be sent before any other command. Puts the OI in Passive
/// mode; the robot beeps once when starting from "off".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Start;

impl Encode for Start {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::START;
    }
}

/// Baud codes accepted by the [`Baud`] command.
///
/// The value of each variant is the code byte sent on the wire. The default
/// rate at power up is 57600 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BaudRate {
    Baud300 = 0,
    Baud600 = 1,
    Baud1200 = 2,
    Baud2400 = 3,
    Baud4800 = 4,
    Baud9600 = 5,
    Baud14400 = 6,
    Baud19200 = 7,
    Baud28800 = 8,
    Baud38400 = 9,
    Baud57600 = 10,
    Baud115200 = 11,
}

/// Sets the serial rate at which OI commands and data are exchanged.
///
/// The new rate persists until the robot is power cycled or its battery is
/// removed. Wait 100ms after sending this command before sending more at
/// the new rate.
///
/// # Encoding
///
/// | Field  | Size | Description |
/// |--------|------|-------------|
/// | opcode | 1    | [`ops::BAUD`] |
/// | code   | 1    | A [`BaudRate`] code (0–11). |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baud {
    pub rate: BaudRate,
}

impl Encode for Baud {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::BAUD;
        data[1] = self.rate as u8;
    }
}

/// Puts the OI into Safe mode, enabling user control of the robot while
/// keeping the cliff, wheel-drop, and charger safety features active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Safe;

impl Encode for Safe {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::SAFE;
    }
}

/// Puts the OI into Full mode.
///
/// In Full mode the robot executes any command it is sent, with the cliff,
/// wheel-drop, and internal charger safety features turned off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Full;

impl Encode for Full {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::FULL;
    }
}
