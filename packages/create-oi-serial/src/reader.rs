use std::io::{self, Read};

use create_oi::sensors::{self, SensorPacket};
use create_oi::{Decode, DecodeError};
use log::{trace, warn};

/// Frames sensor packets out of a byte source.
///
/// The reader is stateless between calls: each
/// [`read_packet`](Self::read_packet) starts fresh at an identifier byte
/// and either produces a whole packet or nothing. Partial packets are not
/// buffered across calls.
#[derive(Debug)]
pub struct SensorReader<R> {
    source: R,
}

impl<R: Read> SensorReader<R> {
    /// Creates a reader over the given byte source.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Consumes the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads one sensor packet from the source.
    ///
    /// Returns `Ok(None)` when the source has no packet to offer: at end
    /// of stream, when the stream ends mid-payload, or on a read-side I/O
    /// error (the protocol has no way to resynchronize mid-packet, so
    /// partial reads are treated the same as no data). Callers poll again
    /// later.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownPacketId`] if the identifier byte is
    /// not in the payload length table. The stream position is undefined
    /// relative to packet boundaries afterwards; discarding bytes until a
    /// known identifier reappears is up to the caller.
    pub fn read_packet(&mut self) -> Result<Option<SensorPacket>, DecodeError> {
        let mut frame = [0u8; 3];

        if !self.read_frame_bytes(&mut frame[..1]) {
            return Ok(None);
        }

        let id = frame[0];
        let len = payload_len_checked(id)?;

        if !self.read_frame_bytes(&mut frame[1..1 + len]) {
            return Ok(None);
        }

        trace!("received sensor packet: {:02x?}", &frame[..1 + len]);

        // Feeding the frame back through the codec keeps packet
        // construction in one place.
        SensorPacket::decode(&mut &frame[..1 + len]).map(Some)
    }

    /// Fills `buf` from the source, reporting whether it could be filled.
    fn read_frame_bytes(&mut self, buf: &mut [u8]) -> bool {
        match self.source.read_exact(buf) {
            Ok(()) => true,
            Err(e) => {
                if e.kind() != io::ErrorKind::UnexpectedEof {
                    warn!("sensor read failed, treating as no data: {e}");
                }
                false
            }
        }
    }
}

fn payload_len_checked(id: u8) -> Result<usize, DecodeError> {
    sensors::payload_len(id).ok_or_else(|| {
        warn!("unknown sensor packet id {id}, stream may be desynchronized");
        DecodeError::UnknownPacketId(id)
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use create_oi::sensors::ids;

    use super::*;

    #[test]
    fn reads_packet_and_leaves_stream_at_end() {
        let mut reader = SensorReader::new(Cursor::new(vec![ids::VOLTAGE, 0x3F, 0xC0]));

        let packet = reader.read_packet().unwrap().unwrap();
        assert_eq!(packet.id(), 22);
        assert_eq!(packet.data(), [0x3F, 0xC0]);

        // Stream is exhausted afterwards.
        assert_eq!(reader.read_packet(), Ok(None));
    }

    #[test]
    fn reads_consecutive_packets() {
        let mut reader = SensorReader::new(Cursor::new(vec![
            ids::WALL,
            1,
            ids::DISTANCE,
            0xFF,
            0x38,
        ]));

        let first = reader.read_packet().unwrap().unwrap();
        assert_eq!((first.id(), first.data()), (8, [1].as_slice()));

        let second = reader.read_packet().unwrap().unwrap();
        assert_eq!((second.id(), second.data()), (19, [0xFF, 0x38].as_slice()));

        assert_eq!(reader.read_packet(), Ok(None));
    }

    #[test]
    fn every_known_id_frames_exactly() {
        for id in (7..=42u8).filter(|id| ![15, 16].contains(id)) {
            let len = sensors::payload_len(id).unwrap();
            let mut stream = vec![id];
            stream.extend((0..len).map(|i| 0xA0 + i as u8));

            let mut reader = SensorReader::new(Cursor::new(stream.clone()));
            let packet = reader.read_packet().unwrap().unwrap();

            assert_eq!(packet.id(), id);
            assert_eq!(packet.data(), &stream[1..]);
            assert_eq!(reader.read_packet(), Ok(None), "id {id} left bytes behind");
        }
    }

    #[test]
    fn empty_stream_is_not_an_error() {
        let mut reader = SensorReader::new(Cursor::new(Vec::new()));
        assert_eq!(reader.read_packet(), Ok(None));
    }

    #[test]
    fn truncated_payload_is_not_an_error() {
        let mut reader = SensorReader::new(Cursor::new(vec![ids::ANGLE, 0x01]));
        assert_eq!(reader.read_packet(), Ok(None));
    }

    #[test]
    fn reserved_ids_are_rejected() {
        for id in [15u8, 16, 0, 6, 43, 255] {
            let mut reader = SensorReader::new(Cursor::new(vec![id, 0, 0]));
            assert_eq!(
                reader.read_packet(),
                Err(DecodeError::UnknownPacketId(id)),
                "id {id} must not decode"
            );
        }
    }

    #[test]
    fn io_errors_yield_no_packet() {
        struct FailingSource;

        impl Read for FailingSource {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let mut reader = SensorReader::new(FailingSource);
        assert_eq!(reader.read_packet(), Ok(None));
    }
}
