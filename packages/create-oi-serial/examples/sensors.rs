//! Polls the battery voltage packet once a second and prints the raw
//! payload bytes.
//!
//! Usage: `sensors <port>` (e.g. `sensors /dev/ttyUSB0`).

use std::time::Duration;

use create_oi::commands::Sensors;
use create_oi::sensors::ids;
use create_oi_serial::{CommandWriter, SensorReader};

fn main() {
    simplelog::TermLogger::init(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Always,
    )
    .unwrap();

    let path = std::env::args().nth(1).expect("usage: sensors <port>");

    let port = serialport::new(path, 57600)
        .timeout(Duration::from_millis(200))
        .open()
        .expect("failed to open serial port");

    // Full duplex: one clone of the port per direction.
    let mut reader = SensorReader::new(port.try_clone().expect("failed to clone port"));
    let mut writer = CommandWriter::new(port);

    writer.start().expect("failed to start the OI");

    loop {
        writer
            .send(Sensors::new(ids::VOLTAGE).unwrap())
            .expect("failed to request voltage");

        match reader.read_packet() {
            Ok(Some(packet)) => println!("packet {}: {:02x?}", packet.id(), packet.data()),
            Ok(None) => println!("no data"),
            Err(e) => println!("desynchronized: {e}"),
        }

        std::thread::sleep(Duration::from_secs(1));
    }
}
