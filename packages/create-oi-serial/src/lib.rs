//! Blocking I/O layer for the iRobot Create Open Interface.
//!
//! This crate drives the [`create_oi`] codec over any byte-oriented
//! channel: a [`CommandWriter`] serializes command packets into an
//! [`io::Write`](std::io::Write) sink, and a [`SensorReader`] frames
//! sensor packets out of an [`io::Read`](std::io::Read) source. The two
//! directions share no state, so on a full-duplex serial connection a
//! writer and a reader may run on separate threads. Concurrent callers on
//! the *same* writer must be serialized externally, or interleaved writes
//! would corrupt the command framing.
//!
//! Neither side imposes timeouts; blocking and timeout policy belong to
//! the underlying channel.

mod reader;
mod writer;

pub use reader::SensorReader;
pub use writer::{CommandWriter, WriteError};
