//! Toggles a GPIO port between a fixed bit pattern and zero, forever.
//!
//! [`init()`] configures the direction registers once, then a [`Blinker`] alternates the
//! output register of the primary port between [`BlinkConfig::pattern`] and `0x00`, blocking
//! for [`BlinkConfig::hold_ms`] in each phase.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(asm_experimental_arch))]
#![deny(missing_docs)]

mod blink;
pub mod config;
mod delay;

pub use blink::{blink_forever, init, Blinker, Phase};
pub use config::BlinkConfig;
pub use delay::BusyWait;

pub use embedded_hal::delay::DelayNs;
pub use portblink_regs as regs;
