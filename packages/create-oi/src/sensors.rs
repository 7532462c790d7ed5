//! Sensor packet identifiers and framing.
//!
//! A sensor packet on the wire is an identifier byte followed by a fixed
//! number of payload bytes. There is no length field; the payload size is
//! determined entirely by looking the identifier up in [`payload_len`].
//! Payload bytes are not interpreted here.

use alloc::vec::Vec;

use crate::decode::{Decode, DecodeError};

/// Sensor packet identifiers.
///
/// Individual sensor packets use ids 7–42; 15 and 16 are reserved and
/// never sent by the robot.
pub mod ids {
    pub const BUMPS_AND_WHEEL_DROPS: u8 = 7;
    pub const WALL: u8 = 8;
    pub const CLIFF_LEFT: u8 = 9;
    pub const CLIFF_FRONT_LEFT: u8 = 10;
    pub const CLIFF_FRONT_RIGHT: u8 = 11;
    pub const CLIFF_RIGHT: u8 = 12;
    pub const VIRTUAL_WALL: u8 = 13;
    pub const OVERCURRENTS: u8 = 14;
    pub const INFRARED: u8 = 17;
    pub const BUTTONS: u8 = 18;
    pub const DISTANCE: u8 = 19;
    pub const ANGLE: u8 = 20;
    pub const CHARGING_STATE: u8 = 21;
    pub const VOLTAGE: u8 = 22;
    pub const CURRENT: u8 = 23;
    pub const BATTERY_TEMPERATURE: u8 = 24;
    pub const BATTERY_CHARGE: u8 = 25;
    pub const BATTERY_CAPACITY: u8 = 26;
    pub const WALL_SIGNAL: u8 = 27;
    pub const CLIFF_LEFT_SIGNAL: u8 = 28;
    pub const CLIFF_FRONT_LEFT_SIGNAL: u8 = 29;
    pub const CLIFF_FRONT_RIGHT_SIGNAL: u8 = 30;
    pub const CLIFF_RIGHT_SIGNAL: u8 = 31;
    pub const CARGO_BAY_DIGITAL_INPUTS: u8 = 32;
    pub const CARGO_BAY_ANALOG_SIGNAL: u8 = 33;
    pub const CHARGING_SOURCES_AVAILABLE: u8 = 34;
    pub const OI_MODE: u8 = 35;
    pub const SONG_NUMBER: u8 = 36;
    pub const SONG_PLAYING: u8 = 37;
    pub const NUMBER_OF_STREAM_PACKETS: u8 = 38;
    pub const REQUESTED_VELOCITY: u8 = 39;
    pub const REQUESTED_RADIUS: u8 = 40;
    pub const REQUESTED_RIGHT_VELOCITY: u8 = 41;
    pub const REQUESTED_LEFT_VELOCITY: u8 = 42;
}

/// Sensor packet group ids.
///
/// Groups are request-side shorthands for the
/// [`Sensors`](crate::commands::Sensors) command: the robot replies with
/// the member packets' payloads concatenated, without identifier bytes.
/// They never appear as identifiers on the inbound stream.
pub mod groups {
    /// Packets 7–26 (26 bytes, including the two always-zero bytes after
    /// packet 14).
    pub const PACKETS_7_26: u8 = 0;

    /// Packets 7–16 (10 bytes).
    pub const PACKETS_7_16: u8 = 1;

    /// Packets 17–20 (6 bytes).
    pub const PACKETS_17_20: u8 = 2;

    /// Packets 21–26 (10 bytes).
    pub const PACKETS_21_26: u8 = 3;

    /// Packets 27–34 (14 bytes).
    pub const PACKETS_27_34: u8 = 4;

    /// Packets 35–42 (12 bytes).
    pub const PACKETS_35_42: u8 = 5;

    /// Packets 7–42 (52 bytes).
    pub const PACKETS_7_42: u8 = 6;
}

/// Raw values of the charging state packet ([`ids::CHARGING_STATE`]).
pub mod charging {
    pub const NOT_CHARGING: u8 = 0;
    pub const RECONDITIONING_CHARGING: u8 = 1;
    pub const FULL_CHARGING: u8 = 2;
    pub const TRICKLE_CHARGING: u8 = 3;
    pub const WAITING: u8 = 4;
    pub const CHARGING_FAULT_CONDITION: u8 = 5;
}

/// Returns the payload length in bytes for the given sensor packet
/// identifier, or `None` if the identifier is not part of the protocol
/// (including the reserved ids 15 and 16).
pub const fn payload_len(id: u8) -> Option<usize> {
    match id {
        7..=14 | 17 | 18 | 21 | 24 | 32 | 34..=38 => Some(1),
        19 | 20 | 22 | 23 | 25 | 26 | 27..=31 | 33 | 39..=42 => Some(2),
        _ => None,
    }
}

/// A single raw sensor packet read from the robot.
///
/// The payload always has exactly [`payload_len`]`(id)` bytes; the only
/// way to obtain a `SensorPacket` is through decoding, which enforces
/// that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorPacket {
    id: u8,
    data: Vec<u8>,
}

impl SensorPacket {
    /// The packet identifier (one of [`ids`]).
    pub fn id(&self) -> u8 {
        self.id
    }

    /// The raw payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn from_parts(id: u8, data: Vec<u8>) -> Self {
        debug_assert_eq!(Some(data.len()), payload_len(id));
        Self { id, data }
    }
}

impl Decode for SensorPacket {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        let id = u8::decode(data)?;
        let len = payload_len(id).ok_or(DecodeError::UnknownPacketId(id))?;

        let payload = data.get(..len).ok_or(DecodeError::UnexpectedEnd)?;
        let packet = Self::from_parts(id, payload.to_vec());
        *data = &data[len..];

        Ok(packet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths() {
        assert_eq!(payload_len(ids::BUMPS_AND_WHEEL_DROPS), Some(1));
        assert_eq!(payload_len(ids::BUTTONS), Some(1));
        assert_eq!(payload_len(ids::DISTANCE), Some(2));
        assert_eq!(payload_len(ids::CHARGING_STATE), Some(1));
        assert_eq!(payload_len(ids::VOLTAGE), Some(2));
        assert_eq!(payload_len(ids::BATTERY_TEMPERATURE), Some(1));
        assert_eq!(payload_len(ids::CLIFF_RIGHT_SIGNAL), Some(2));
        assert_eq!(payload_len(ids::CARGO_BAY_DIGITAL_INPUTS), Some(1));
        assert_eq!(payload_len(ids::CARGO_BAY_ANALOG_SIGNAL), Some(2));
        assert_eq!(payload_len(ids::SONG_PLAYING), Some(1));
        assert_eq!(payload_len(ids::REQUESTED_LEFT_VELOCITY), Some(2));
    }

    #[test]
    fn table_covers_exactly_7_to_42() {
        for id in 7..=42u8 {
            if id == 15 || id == 16 {
                assert_eq!(payload_len(id), None, "id {id} is reserved");
            } else {
                assert!(payload_len(id).is_some(), "id {id} is missing");
            }
        }

        assert_eq!(payload_len(0), None);
        assert_eq!(payload_len(6), None);
        assert_eq!(payload_len(43), None);
        assert_eq!(payload_len(255), None);
    }

    #[test]
    fn decode_packet() {
        let mut data = [ids::VOLTAGE, 0x3F, 0xC0].as_slice();
        let packet = SensorPacket::decode(&mut data).unwrap();

        assert_eq!(packet.id(), 22);
        assert_eq!(packet.data(), [0x3F, 0xC0]);
        assert!(data.is_empty());
    }

    #[test]
    fn decode_reserved_id() {
        let mut data = [15u8, 0].as_slice();
        assert_eq!(
            SensorPacket::decode(&mut data),
            Err(DecodeError::UnknownPacketId(15))
        );
    }

    #[test]
    fn decode_short_payload() {
        let mut data = [ids::DISTANCE, 0x01].as_slice();
        assert_eq!(
            SensorPacket::decode(&mut data),
            Err(DecodeError::UnexpectedEnd)
        );
    }
}
