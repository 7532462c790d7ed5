//! Drives the robot forward for two seconds, then spins it in place.
//!
//! Usage: `drive <port>` (e.g. `drive /dev/ttyUSB0`).

use std::time::Duration;

use create_oi::commands::Drive;
use create_oi_serial::{CommandWriter, WriteError};

fn main() -> Result<(), WriteError> {
    simplelog::TermLogger::init(
        log::LevelFilter::Trace,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Always,
    )
    .unwrap();

    let path = std::env::args().nth(1).expect("usage: drive <port>");

    // The Create talks at 57600 baud by default.
    let port = serialport::new(path, 57600)
        .timeout(Duration::from_secs(1))
        .open()
        .expect("failed to open serial port");

    let mut writer = CommandWriter::new(port);

    writer.start()?;
    writer.enable_safe_mode()?;

    writer.drive(200, Drive::STRAIGHT)?;
    std::thread::sleep(Duration::from_secs(2));

    writer.drive(100, Drive::TURN_CLOCKWISE)?;
    std::thread::sleep(Duration::from_secs(2));

    // Stop.
    writer.drive(0, Drive::STRAIGHT)?;

    Ok(())
}
