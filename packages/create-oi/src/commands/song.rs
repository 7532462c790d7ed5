//! Song definition and playback commands.

use alloc::vec::Vec;

use crate::encode::Encode;

use super::{OutOfRangeError, ops};

/// A single note of a [`Song`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// MIDI note number. Numbers outside 31–127 play as a rest.
    pub number: u8,

    /// Note duration in increments of 1/64th of a second.
    pub duration: u8,
}

/// Defines a song to be played later with [`PlaySong`].
///
/// Up to 16 songs of up to 16 notes each can be defined.
///
/// # Encoding
///
/// | Field  | Size | Description |
/// |--------|------|-------------|
/// | opcode | 1    | [`ops::SONG`] |
/// | song   | 1    | Song number (0–15). |
/// | length | 1    | Number of notes (1–16). |
/// | notes  | 2n   | Note number and duration byte per [`Note`]. |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    number: u8,
    notes: Vec<Note>,
}

impl Song {
    /// Creates a new `Song` packet.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `number` exceeds 15 or the song
    /// does not have 1–16 notes.
    pub fn new(number: u8, notes: Vec<Note>) -> Result<Self, OutOfRangeError> {
        super::check_range("song number", number as i32, 0, 15)?;
        super::check_range("song length", notes.len() as i32, 1, 16)?;

        Ok(Self { number, notes })
    }

    /// The song number this song is stored under.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The notes of the song.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl Encode for Song {
    fn size(&self) -> usize {
        3 + 2 * self.notes.len()
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::SONG;
        data[1] = self.number;
        data[2] = self.notes.len() as u8;

        for (i, note) in self.notes.iter().enumerate() {
            data[3 + 2 * i] = note.number;
            data[4 + 2 * i] = note.duration;
        }
    }
}

/// Plays a song previously defined with [`Song`].
///
/// The command is ignored while another song is playing; the "song
/// playing" sensor packet (id 37) can be polled to find out when it is
/// safe to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySong {
    number: u8,
}

impl PlaySong {
    /// Creates a new `PlaySong` packet.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `number` exceeds 15.
    pub fn new(number: u8) -> Result<Self, OutOfRangeError> {
        super::check_range("song number", number as i32, 0, 15)?;
        Ok(Self { number })
    }

    /// The song number to play.
    pub fn number(&self) -> u8 {
        self.number
    }
}

impl Encode for PlaySong {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = ops::PLAY_SONG;
        data[1] = self.number;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn song_frame() {
        let song = Song::new(
            1,
            vec![
                Note {
                    number: 60,
                    duration: 32,
                },
                Note {
                    number: 64,
                    duration: 16,
                },
            ],
        )
        .unwrap();

        let mut buf = vec![0u8; song.size()];
        song.encode(&mut buf);

        assert_eq!(buf, [140, 1, 2, 60, 32, 64, 16]);
    }

    #[test]
    fn song_bounds() {
        assert!(Song::new(16, vec![Note { number: 60, duration: 1 }]).is_err());
        assert!(Song::new(0, vec![]).is_err());
        assert!(Song::new(0, vec![Note { number: 60, duration: 1 }; 17]).is_err());
        assert!(PlaySong::new(16).is_err());
    }

    #[test]
    fn play_song_frame() {
        let mut buf = [0u8; 2];
        PlaySong::new(15).unwrap().encode(&mut buf);
        assert_eq!(buf, [141, 15]);
    }
}
