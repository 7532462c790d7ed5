use std::io::{self, Write};

use create_oi::commands::{
    BaudRate, Cover, CoverAndDock, Demo, Drive, DriveDirect, Full, Safe, Spot, Start,
};
use create_oi::{Encode, OutOfRangeError};
use log::trace;
use thiserror::Error;

/// Error returned by the validating command methods of [`CommandWriter`].
///
/// A validation failure is raised before any byte reaches the sink, so a
/// failed call never leaves a partial frame behind.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
}

/// Writes Open Interface command frames to a byte sink.
///
/// Any [`Encode`] packet can be sent with [`send`](Self::send); the most
/// common commands also have direct methods. I/O errors from the sink are
/// propagated, never swallowed.
#[derive(Debug)]
pub struct CommandWriter<W> {
    sink: W,
}

impl<W: Write> CommandWriter<W> {
    /// Creates a writer over the given byte sink.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Encodes the packet and writes its opcode and data bytes, in order,
    /// to the sink, then flushes.
    pub fn send(&mut self, packet: impl Encode) -> io::Result<()> {
        let mut encoded = vec![0; packet.size()];
        packet.encode(&mut encoded);

        trace!("sending command: {:02x?}", encoded);

        self.sink.write_all(&encoded)?;
        self.sink.flush()
    }

    /// Starts the OI. Must be sent before any other command.
    pub fn start(&mut self) -> io::Result<()> {
        self.send(Start)
    }

    /// Sets the baud rate for all further communication.
    ///
    /// Wait 100ms after sending this before commanding at the new rate.
    pub fn set_baud_rate(&mut self, rate: BaudRate) -> io::Result<()> {
        self.send(create_oi::commands::Baud { rate })
    }

    /// Puts the OI into Safe mode.
    pub fn enable_safe_mode(&mut self) -> io::Result<()> {
        self.send(Safe)
    }

    /// Puts the OI into Full mode, disabling the safety features.
    pub fn enable_full_mode(&mut self) -> io::Result<()> {
        self.send(Full)
    }

    /// Starts the built-in demo with the given number.
    pub fn start_demo(&mut self, demo: u8) -> Result<(), WriteError> {
        self.send(Demo::new(demo)?)?;
        Ok(())
    }

    /// Starts the Cover demo.
    pub fn start_cover(&mut self) -> io::Result<()> {
        self.send(Cover)
    }

    /// Starts the Cover and Dock demo.
    pub fn start_cover_and_dock(&mut self) -> io::Result<()> {
        self.send(CoverAndDock)
    }

    /// Starts the Spot Cover demo.
    pub fn start_spot_cover(&mut self) -> io::Result<()> {
        self.send(Spot)
    }

    /// Drives the wheels at `velocity` mm/s (-500–500) along an arc of
    /// `radius` mm (-2000–2000, or one of the [`Drive`] radius
    /// sentinels).
    pub fn drive(&mut self, velocity: i16, radius: i32) -> Result<(), WriteError> {
        self.send(Drive::new(velocity, radius)?)?;
        Ok(())
    }

    /// Drives the right and left wheels independently at the given
    /// velocities in mm/s (-500–500 each).
    pub fn drive_direct(&mut self, velocity_right: i16, velocity_left: i16) -> Result<(), WriteError> {
        self.send(DriveDirect::new(velocity_right, velocity_left)?)?;
        Ok(())
    }
}
