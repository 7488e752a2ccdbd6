use core::cell::Cell;

use crate::Address;

/// Byte-granular access to a register address space.
///
/// Accesses take `&self`: registers are shared hardware state, so backends provide their own
/// interior mutability.
pub trait RegisterAccess {
    /// Reads the byte at `address`.
    fn read(&self, address: Address) -> u8;

    /// Writes `value` to the byte at `address`.
    fn write(&self, address: Address, value: u8);
}

impl<A: RegisterAccess + ?Sized> RegisterAccess for &A {
    fn read(&self, address: Address) -> u8 {
        (**self).read(address)
    }

    fn write(&self, address: Address, value: u8) {
        (**self).write(address, value);
    }
}

/// Memory-mapped access to the device's data space.
///
/// Every access is a single volatile load or store.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Creates the memory-mapped backend.
    ///
    /// # Safety
    ///
    /// Every [`Address`] later passed to this backend must be a valid, byte-addressable location
    /// of the running device (I/O registers on the target MCU), and nothing else may hold
    /// references into that memory.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterAccess for Mmio {
    #[inline(always)]
    fn read(&self, address: Address) -> u8 {
        // SAFETY: `Mmio::new()` requires all addresses to be valid device registers.
        unsafe { core::ptr::read_volatile(usize::from(address) as *const u8) }
    }

    #[inline(always)]
    fn write(&self, address: Address, value: u8) {
        // SAFETY: `Mmio::new()` requires all addresses to be valid device registers.
        unsafe { core::ptr::write_volatile(usize::from(address) as *mut u8, value) }
    }
}

/// RAM-backed register window of `N` bytes starting at `base`.
///
/// Reads outside of the window return `0`, writes outside of it are dropped.
#[derive(Debug)]
pub struct RegisterFile<const N: usize> {
    base: Address,
    cells: [Cell<u8>; N],
}

impl<const N: usize> RegisterFile<N> {
    /// Creates a window with all bytes cleared.
    pub const fn new(base: Address) -> Self {
        Self {
            base,
            cells: [const { Cell::new(0) }; N],
        }
    }

    /// Returns the first address covered by this window.
    pub fn base(&self) -> Address {
        self.base
    }

    /// Returns whether `address` lies inside this window.
    pub fn contains(&self, address: Address) -> bool {
        self.cell(address).is_some()
    }

    fn cell(&self, address: Address) -> Option<&Cell<u8>> {
        let offset = address.checked_sub(self.base)?;
        self.cells.get(usize::from(offset))
    }
}

impl<const N: usize> RegisterAccess for RegisterFile<N> {
    fn read(&self, address: Address) -> u8 {
        self.cell(address).map_or(0, Cell::get)
    }

    fn write(&self, address: Address, value: u8) {
        if let Some(cell) = self.cell(address) {
            cell.set(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_file_window() {
        let regs: RegisterFile<3> = RegisterFile::new(0x23);
        assert_eq!(regs.base(), 0x23);
        assert!(!regs.contains(0x22));
        assert!(regs.contains(0x23));
        assert!(regs.contains(0x25));
        assert!(!regs.contains(0x26));

        for address in 0x23..=0x25 {
            assert_eq!(regs.read(address), 0);
        }
    }

    #[test]
    fn register_file_byte_round_trip() {
        let regs: RegisterFile<3> = RegisterFile::new(0x23);
        for value in 0..=u8::MAX {
            regs.write(0x24, value);
            assert_eq!(regs.read(0x24), value);
        }
        // Neighbouring bytes are separate storage.
        assert_eq!(regs.read(0x23), 0);
        assert_eq!(regs.read(0x25), 0);
    }

    #[test]
    fn register_file_ignores_outside_accesses() {
        let regs: RegisterFile<2> = RegisterFile::new(0x10);
        regs.write(0x0F, 0xFF);
        regs.write(0x12, 0xFF);
        assert_eq!(regs.read(0x0F), 0);
        assert_eq!(regs.read(0x12), 0);
        assert_eq!(regs.read(0x10), 0);
        assert_eq!(regs.read(0x11), 0);
    }

    #[test]
    fn access_through_reference() {
        fn poke(access: impl RegisterAccess) {
            access.write(0x01, 0x5A);
        }

        let regs: RegisterFile<4> = RegisterFile::new(0x00);
        poke(&regs);
        assert_eq!(regs.read(0x01), 0x5A);
    }
}
