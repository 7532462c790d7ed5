//! LED, low side driver, digital output, and IR commands.

use bitflags::bitflags;

use crate::encode::Encode;

use super::{OutOfRangeError, ops};

bitflags! {
    /// LED selection bits for the [`Leds`] command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LedBits: u8 {
        /// The Play LED.
        const PLAY = 1 << 1;

        /// The Advance LED.
        const ADVANCE = 1 << 3;
    }
}

/// Controls the LEDs on the robot.
///
/// The Power LED is controlled by two bytes: a color ramping from green
/// (0) to red (255), and an intensity.
///
/// # Encoding
///
/// | Field     | Size | Description |
/// |-----------|------|-------------|
/// | opcode    | 1    | [`ops::LED`] |
/// | leds      | 1    | [`LedBits`] selecting which LEDs are lit. |
/// | color     | 1    | Power LED color, green (0) to red (255). |
/// | intensity | 1    | Power LED intensity, off (0) to full (255). |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leds {
    pub leds: LedBits,
    pub power_color: u8,
    pub power_intensity: u8,
}

impl Encode for Leds {
    fn size(&self) -> usize {
        4
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::LED;
        data[1] = self.leds.bits();
        data[2] = self.power_color;
        data[3] = self.power_intensity;
    }
}

bitflags! {
    /// Driver selection bits for the [`LowSideDrivers`] command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DriverBits: u8 {
        /// Low side driver 0 (cargo bay pin 23).
        const DRIVER_0 = 1 << 0;

        /// Low side driver 1 (cargo bay pin 22).
        const DRIVER_1 = 1 << 1;

        /// Low side driver 2 (cargo bay pin 24).
        const DRIVER_2 = 1 << 2;
    }
}

/// Switches the three low side drivers in the cargo bay connector on or
/// off at full duty cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowSideDrivers {
    pub drivers: DriverBits,
}

impl Encode for LowSideDrivers {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::LOW_SIDE_DRIVERS;
        data[1] = self.drivers.bits();
    }
}

/// Drives the three low side drivers with variable duty cycles.
///
/// # Encoding
///
/// | Field  | Size | Description |
/// |--------|------|-------------|
/// | opcode | 1    | [`ops::PWM_LOW_SIDE_DRIVERS`] |
/// | duty 2 | 1    | Duty cycle for driver 2 (0–128). |
/// | duty 1 | 1    | Duty cycle for driver 1 (0–128). |
/// | duty 0 | 1    | Duty cycle for driver 0 (0–128). |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmLowSideDrivers {
    duty_cycles: [u8; 3],
}

impl PwmLowSideDrivers {
    /// Creates a new `PwmLowSideDrivers` packet from the duty cycles for
    /// drivers 0, 1, and 2.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if any duty cycle exceeds 128.
    pub fn new(duty_0: u8, duty_1: u8, duty_2: u8) -> Result<Self, OutOfRangeError> {
        super::check_range("driver 0 duty cycle", duty_0 as i32, 0, 128)?;
        super::check_range("driver 1 duty cycle", duty_1 as i32, 0, 128)?;
        super::check_range("driver 2 duty cycle", duty_2 as i32, 0, 128)?;

        Ok(Self {
            duty_cycles: [duty_0, duty_1, duty_2],
        })
    }
}

impl Encode for PwmLowSideDrivers {
    fn size(&self) -> usize {
        4
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::PWM_LOW_SIDE_DRIVERS;
        data[1] = self.duty_cycles[2];
        data[2] = self.duty_cycles[1];
        data[3] = self.duty_cycles[0];
    }
}

bitflags! {
    /// Output selection bits for the [`DigitalOutputs`] command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OutputBits: u8 {
        /// Digital output 0 (cargo bay pin 19).
        const OUTPUT_0 = 1 << 0;

        /// Digital output 1 (cargo bay pin 7).
        const OUTPUT_1 = 1 << 1;

        /// Digital output 2 (cargo bay pin 20).
        const OUTPUT_2 = 1 << 2;
    }
}

/// Sets the three digital output pins in the cargo bay connector high
/// or low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitalOutputs {
    pub outputs: OutputBits,
}

impl Encode for DigitalOutputs {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::DIGITAL_OUTPUTS;
        data[1] = self.outputs.bits();
    }
}

/// Sends an IR byte out of the low side driver 1 transmitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendIr {
    pub value: u8,
}

impl Encode for SendIr {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::SEND_IR;
        data[1] = self.value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leds_frame() {
        let packet = Leds {
            leds: LedBits::PLAY | LedBits::ADVANCE,
            power_color: 0,
            power_intensity: 255,
        };

        let mut buf = [0u8; 4];
        packet.encode(&mut buf);

        assert_eq!(buf, [139, 0b1010, 0, 255]);
    }

    #[test]
    fn pwm_duty_cycle_bounds() {
        assert!(PwmLowSideDrivers::new(128, 0, 0).is_ok());
        assert!(PwmLowSideDrivers::new(0, 129, 0).is_err());
    }

    #[test]
    fn pwm_wire_order() {
        // Driver 2's duty cycle is sent first.
        let packet = PwmLowSideDrivers::new(10, 20, 30).unwrap();

        let mut buf = [0u8; 4];
        packet.encode(&mut buf);

        assert_eq!(buf, [144, 30, 20, 10]);
    }

    #[test]
    fn driver_and_output_frames() {
        let mut buf = [0u8; 2];

        LowSideDrivers {
            drivers: DriverBits::DRIVER_0 | DriverBits::DRIVER_2,
        }
        .encode(&mut buf);
        assert_eq!(buf, [138, 0b101]);

        DigitalOutputs {
            outputs: OutputBits::OUTPUT_1,
        }
        .encode(&mut buf);
        assert_eq!(buf, [147, 0b010]);

        SendIr { value: 42 }.encode(&mut buf);
        assert_eq!(buf, [151, 42]);
    }
}
