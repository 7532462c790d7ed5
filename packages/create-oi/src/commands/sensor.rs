//! Sensor request commands.
//!
//! These commands only ask the robot to transmit sensor data; the
//! replies are framed and read back by the caller (see
//! [`sensors`](crate::sensors)).

use alloc::vec::Vec;

use crate::encode::Encode;

use super::{OutOfRangeError, ops};

/// Requests a single sensor packet, or a packet group, by id.
///
/// The requested id may be an individual packet id (7–42, see
/// [`sensors::ids`](crate::sensors::ids)) or a group id (0–6, see
/// [`sensors::groups`](crate::sensors::groups)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensors {
    id: u8,
}

impl Sensors {
    /// Creates a new `Sensors` packet.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `id` exceeds 42.
    pub fn new(id: u8) -> Result<Self, OutOfRangeError> {
        super::check_range("sensor packet id", id as i32, 0, 42)?;
        Ok(Self { id })
    }

    /// The requested packet or group id.
    pub fn id(&self) -> u8 {
        self.id
    }
}

impl Encode for Sensors {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::SENSORS;
        data[1] = self.id;
    }
}

/// Requests a list of sensor packets, returned once.
///
/// # Encoding
///
/// | Field  | Size | Description |
/// |--------|------|-------------|
/// | opcode | 1    | [`ops::QUERY_LIST`] |
/// | count  | 1    | Number of requested packet ids. |
/// | ids    | n    | The requested packet ids, in reply order. |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryList {
    ids: Vec<u8>,
}

impl QueryList {
    /// Creates a new `QueryList` packet.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if more than 255 ids are requested.
    pub fn new(ids: Vec<u8>) -> Result<Self, OutOfRangeError> {
        super::check_range("packet id count", ids.len() as i32, 0, u8::MAX as i32)?;
        Ok(Self { ids })
    }

    /// The requested packet ids.
    pub fn ids(&self) -> &[u8] {
        &self.ids
    }
}

impl Encode for QueryList {
    fn size(&self) -> usize {
        2 + self.ids.len()
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::QUERY_LIST;
        data[1] = self.ids.len() as u8;
        data[2..2 + self.ids.len()].copy_from_slice(&self.ids);
    }
}

/// Starts a stream of sensor packets, sent every 15ms until paused.
///
/// Uses the same count-then-ids layout as [`QueryList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    ids: Vec<u8>,
}

impl Stream {
    /// Creates a new `Stream` packet.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if more than 255 ids are requested.
    pub fn new(ids: Vec<u8>) -> Result<Self, OutOfRangeError> {
        super::check_range("packet id count", ids.len() as i32, 0, u8::MAX as i32)?;
        Ok(Self { ids })
    }

    /// The streamed packet ids.
    pub fn ids(&self) -> &[u8] {
        &self.ids
    }
}

impl Encode for Stream {
    fn size(&self) -> usize {
        2 + self.ids.len()
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::STREAM;
        data[1] = self.ids.len() as u8;
        data[2..2 + self.ids.len()].copy_from_slice(&self.ids);
    }
}

/// Pauses or resumes the stream started by [`Stream`] without clearing
/// the list of requested packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseResumeStream {
    /// `true` resumes the stream, `false` pauses it.
    pub resume: bool,
}

impl Encode for PauseResumeStream {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::PAUSE_RESUME_STREAM;
        data[1] = self.resume as u8;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::sensors::{groups, ids};

    use super::*;

    #[test]
    fn sensors_frame() {
        let mut buf = [0u8; 2];

        Sensors::new(ids::VOLTAGE).unwrap().encode(&mut buf);
        assert_eq!(buf, [142, 22]);

        Sensors::new(groups::PACKETS_7_42).unwrap().encode(&mut buf);
        assert_eq!(buf, [142, 6]);

        assert!(Sensors::new(43).is_err());
    }

    #[test]
    fn query_list_frame() {
        let packet = QueryList::new(vec![ids::DISTANCE, ids::ANGLE]).unwrap();

        let mut buf = vec![0u8; packet.size()];
        packet.encode(&mut buf);

        assert_eq!(buf, [149, 2, 19, 20]);
    }

    #[test]
    fn stream_control_frames() {
        let packet = Stream::new(vec![ids::BUMPS_AND_WHEEL_DROPS]).unwrap();

        let mut buf = vec![0u8; packet.size()];
        packet.encode(&mut buf);
        assert_eq!(buf, [148, 1, 7]);

        let mut buf = [0u8; 2];
        PauseResumeStream { resume: false }.encode(&mut buf);
        assert_eq!(buf, [150, 0]);
    }
}
