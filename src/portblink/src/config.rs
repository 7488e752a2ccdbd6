//! Build-time configuration.
//!
//! | variable            | default      | meaning                                 |
//! |---------------------|--------------|-----------------------------------------|
//! | `PORTBLINK_PATTERN` | 170 (`0xAA`) | direction and high-phase output pattern |
//! | `PORTBLINK_HOLD_MS` | 1000         | hold time of each phase                 |
//! | `PORTBLINK_CPU_HZ`  | 16000000     | processor clock driving [`BusyWait`]    |
//!
//! Values are parsed as decimal integers at compile time.
//!
//! [`BusyWait`]: crate::BusyWait

use portblink_utils::{u32_from_env_or, u8_from_env_or};

/// Processor clock frequency in Hz.
pub const CPU_HZ: u32 = u32_from_env_or!("PORTBLINK_CPU_HZ", 16_000_000);

/// Settings of the toggle loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    /// Bits configured as outputs and driven high during [`Phase::High`](crate::Phase::High).
    pub pattern: u8,
    /// Duration of each phase in milliseconds.
    pub hold_ms: u32,
}

impl BlinkConfig {
    /// Odd-indexed pins, one second per phase, unless overridden at build time.
    pub const DEFAULT: Self = Self {
        pattern: u8_from_env_or!("PORTBLINK_PATTERN", 0b1010_1010),
        hold_ms: u32_from_env_or!("PORTBLINK_HOLD_MS", 1000),
    };
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
