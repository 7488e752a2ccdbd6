use crate::{Address, Bit, Register, RegisterAccess};

const PIN_OFFSET: Address = 0;
const DDR_OFFSET: Address = 1;
const PORT_OFFSET: Address = 2;

/// Pin direction as encoded in a direction register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Bit value 0.
    Input,
    /// Bit value 1.
    Output,
}

impl From<Direction> for bool {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Input => false,
            Direction::Output => true,
        }
    }
}

impl From<bool> for Direction {
    fn from(boolean: bool) -> Self {
        if boolean {
            Direction::Output
        } else {
            Direction::Input
        }
    }
}

/// Digital level of an output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Bit value 0.
    Low,
    /// Bit value 1.
    High,
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => false,
            Level::High => true,
        }
    }
}

impl From<bool> for Level {
    fn from(boolean: bool) -> Self {
        if boolean {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Register block of one I/O port.
///
/// Three consecutive byte registers starting at `base`, in this fixed order (wrapping around
/// at the end of the address space):
///
/// | offset | register | meaning                          |
/// |--------|----------|----------------------------------|
/// | 0      | `PIN`    | input state of the pins          |
/// | 1      | `DDR`    | direction, 1 = output, 0 = input |
/// | 2      | `PORT`   | output level, 1 = high, 0 = low  |
#[derive(Debug)]
pub struct PortBlock<'a, A: RegisterAccess> {
    access: &'a A,
    base: Address,
}

impl<A: RegisterAccess> Clone for PortBlock<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: RegisterAccess> Copy for PortBlock<'_, A> {}

impl<'a, A: RegisterAccess> PortBlock<'a, A> {
    /// Creates the register block of the port located at `base`.
    pub const fn new(access: &'a A, base: Address) -> Self {
        Self { access, base }
    }

    /// Returns the address of the first register of the block.
    pub const fn base(&self) -> Address {
        self.base
    }

    /// Input-state register.
    pub const fn pin(&self) -> Register<'a, A> {
        Register::new(self.access, self.base.wrapping_add(PIN_OFFSET))
    }

    /// Direction register.
    pub const fn ddr(&self) -> Register<'a, A> {
        Register::new(self.access, self.base.wrapping_add(DDR_OFFSET))
    }

    /// Output register.
    pub const fn port(&self) -> Register<'a, A> {
        Register::new(self.access, self.base.wrapping_add(PORT_OFFSET))
    }

    /// Configures the direction of a single pin.
    pub fn set_direction(&self, bit: Bit, direction: Direction) {
        self.ddr().set_bit(bit, direction.into());
    }

    /// Returns the configured direction of a single pin.
    pub fn direction(&self, bit: Bit) -> Direction {
        self.ddr().bit(bit).into()
    }

    /// Drives a single pin to `level`.
    pub fn drive(&self, bit: Bit, level: Level) {
        self.port().set_bit(bit, level.into());
    }

    /// Samples the input state of a single pin.
    pub fn level(&self, bit: Bit) -> Level {
        self.pin().bit(bit).into()
    }
}
