use crate::{Address, Bit, RegisterAccess};

/// One byte register at a fixed address.
///
/// The whole-byte view and the single-bit view observe and mutate the same storage.
#[derive(Debug)]
pub struct Register<'a, A: RegisterAccess> {
    access: &'a A,
    address: Address,
}

impl<A: RegisterAccess> Clone for Register<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: RegisterAccess> Copy for Register<'_, A> {}

impl<'a, A: RegisterAccess> Register<'a, A> {
    /// Creates a register handle for `address`.
    pub const fn new(access: &'a A, address: Address) -> Self {
        Self { access, address }
    }

    /// Returns the address of this register.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Reads the whole byte.
    #[inline]
    pub fn read(&self) -> u8 {
        self.access.read(self.address)
    }

    /// Writes the whole byte.
    #[inline]
    pub fn write(&self, value: u8) {
        self.access.write(self.address, value);
    }

    /// Replaces the byte with `f(current)`.
    #[inline]
    pub fn modify<F: FnOnce(u8) -> u8>(&self, f: F) {
        self.write(f(self.read()));
    }

    /// Reads a single bit.
    #[inline]
    pub fn bit(&self, bit: Bit) -> bool {
        self.read() & bit.mask() != 0
    }

    /// Writes a single bit, leaving the other seven unchanged.
    #[inline]
    pub fn set_bit(&self, bit: Bit, value: bool) {
        self.modify(|byte| {
            if value {
                byte | bit.mask()
            } else {
                byte & !bit.mask()
            }
        });
    }

    /// Sets a single bit to 1.
    #[inline]
    pub fn set(&self, bit: Bit) {
        self.set_bit(bit, true);
    }

    /// Clears a single bit to 0.
    #[inline]
    pub fn clear(&self, bit: Bit) {
        self.set_bit(bit, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegisterFile;

    #[test]
    fn byte_round_trip() {
        let regs: RegisterFile<1> = RegisterFile::new(0x24);
        let reg = Register::new(&regs, 0x24);
        assert_eq!(reg.address(), 0x24);

        for value in 0..=u8::MAX {
            reg.write(value);
            assert_eq!(reg.read(), value);
        }
    }

    #[test]
    fn bit_writes_preserve_other_bits() {
        let regs: RegisterFile<1> = RegisterFile::new(0x24);
        let reg = Register::new(&regs, 0x24);

        for start in [0x00u8, 0xFF, 0xAA, 0x55, 0x3C] {
            for bit in Bit::ALL {
                for value in [false, true] {
                    reg.write(start);
                    reg.set_bit(bit, value);

                    let after = reg.read();
                    assert_eq!(after & !bit.mask(), start & !bit.mask());
                    assert_eq!(reg.bit(bit), value);
                }
            }
        }
    }

    #[test]
    fn byte_view_reflects_bit_writes() {
        let regs: RegisterFile<1> = RegisterFile::new(0x00);
        let reg = Register::new(&regs, 0x00);

        reg.set(Bit::Bit1);
        reg.set(Bit::Bit3);
        reg.set(Bit::Bit5);
        reg.set(Bit::Bit7);
        assert_eq!(reg.read(), 0xAA);

        reg.clear(Bit::Bit7);
        assert_eq!(reg.read(), 0x2A);

        for bit in Bit::ALL {
            assert_eq!(reg.bit(bit), 0x2A & bit.mask() != 0);
        }
    }

    #[test]
    fn modify() {
        let regs: RegisterFile<1> = RegisterFile::new(0x00);
        let reg = Register::new(&regs, 0x00);
        reg.write(0x0F);
        reg.modify(|byte| byte << 4);
        assert_eq!(reg.read(), 0xF0);
    }
}
