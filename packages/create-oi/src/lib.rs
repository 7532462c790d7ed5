//! Implementation of the iRobot Create Open Interface (OI) protocol in Rust.
//!
//! The OI is a byte-oriented serial protocol with two independent directions:
//! single-opcode command frames sent to the robot, and sensor packets read
//! back from it. This crate covers the wire format only. Commands are typed
//! packets implementing [`Encode`]; sensor packets are framed by a fixed
//! per-identifier payload-length table (there is no length field on the wire)
//! and decoded into [`SensorPacket`](sensors::SensorPacket) values.
//!
//! Sensor payloads are left as raw bytes. Mapping them onto meaningful units
//! (volts, millimeters, button states) is up to the caller.

#![no_std]

extern crate alloc;

pub mod commands;
pub mod sensors;

mod decode;
mod encode;

pub use commands::OutOfRangeError;
pub use decode::{Decode, DecodeError};
pub use encode::Encode;
