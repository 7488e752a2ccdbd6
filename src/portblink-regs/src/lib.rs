//! Byte-register overlay for 8-bit GPIO ports.
//!
//! A [`Register`] exposes the same storage through a whole-byte view ([`Register::read`],
//! [`Register::write`]) and a single-bit view ([`Register::bit`], [`Register::set_bit`]).
//! The bit view is implemented with read-modify-write masking, so writing one bit leaves the
//! other seven untouched.
//!
//! Registers are reached through a [`RegisterAccess`] backend: [`Mmio`] talks to the device's
//! data space, [`RegisterFile`] keeps the bytes in RAM.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

mod access;
pub mod atmega328p;
mod bit;
mod port;
mod register;

pub use access::{Mmio, RegisterAccess, RegisterFile};
pub use bit::{Bit, BitOutOfRange};
pub use port::{Direction, Level, PortBlock};
pub use register::Register;

/// Address in the device's data space.
///
/// The AVR data space is 16 bits wide.
pub type Address = u16;
