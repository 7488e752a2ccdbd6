//! Port register map of the ATmega328P.
//!
//! Each base address can be overridden at build time through the named environment variable
//! (decimal), for porting to a device with a different I/O map.

use portblink_utils::u16_from_env_or;

use crate::Address;

/// Port B: `PINB` 0x23, `DDRB` 0x24, `PORTB` 0x25.
pub const PORTB: Address = u16_from_env_or!("PORTBLINK_PORTB_BASE", 0x23);

/// Port D: `PIND` 0x29, `DDRD` 0x2A, `PORTD` 0x2B.
pub const PORTD: Address = u16_from_env_or!("PORTBLINK_PORTD_BASE", 0x29);
