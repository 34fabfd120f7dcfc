//! # robot-core
//! A `#![no_std]` command protocol for a robot's motor controller over SPI.
//!
//! Every command is sent as one [`Frame`]: a fixed `0x00` header byte, an
//! [`OpCode`] byte, then the payload bytes.
//!
//! [`Firmware`] builds and transmits frames over any [`Bus`]
//! (see [`SpiBus`] for an `embedded-hal` implementation).
//!
//! [`Register`] names the firmware registers written with
//! [`OpCode::RegisterWrite`].
//!
//! ```
//! use robot_core::{Firmware, Register};
//! # use robot_core::hal::Bus;
//! # struct Host;
//! # impl Bus for Host {
//! #     type Error = ();
//! #     fn begin(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn write(&mut self, _bytes: &[u8]) -> Result<(), ()> { Ok(()) }
//! #     fn end(&mut self) {}
//! # }
//!
//! let mut firmware = Firmware::new(Host);
//! firmware.register_write(Register::Motor1PulseWidth, 128).unwrap();
//! firmware.send_named("clear_host", &[] as &[u8]).unwrap();
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod byte_code;
pub use byte_code::OpCode;

pub mod error;
pub use error::{Error, LookupError};

pub mod firmware;
pub use firmware::Firmware;

pub mod frame;
pub use frame::{Frame, HEADER};

pub mod hal;
pub use hal::{Bus, Session, SpiBus};

pub mod register;
pub use register::Register;
