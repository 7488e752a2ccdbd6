/// Position of a single bit inside a byte register.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Bit {
    Bit0 = 0,
    Bit1 = 1,
    Bit2 = 2,
    Bit3 = 3,
    Bit4 = 4,
    Bit5 = 5,
    Bit6 = 6,
    Bit7 = 7,
}

impl Bit {
    /// All bit positions, least significant first.
    pub const ALL: [Bit; 8] = [
        Bit::Bit0,
        Bit::Bit1,
        Bit::Bit2,
        Bit::Bit3,
        Bit::Bit4,
        Bit::Bit5,
        Bit::Bit6,
        Bit::Bit7,
    ];

    /// Returns the position as an index in `0..8`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the single-bit mask for this position.
    pub const fn mask(self) -> u8 {
        1 << self.index()
    }
}

impl TryFrom<u8> for Bit {
    type Error = BitOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Bit::Bit0),
            1 => Ok(Bit::Bit1),
            2 => Ok(Bit::Bit2),
            3 => Ok(Bit::Bit3),
            4 => Ok(Bit::Bit4),
            5 => Ok(Bit::Bit5),
            6 => Ok(Bit::Bit6),
            7 => Ok(Bit::Bit7),
            _ => Err(BitOutOfRange(index)),
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.index()
    }
}

/// A bit index outside of `0..8` was given.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitOutOfRange(pub u8);

impl core::fmt::Display for BitOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "bit index {} is out of range for a byte register", self.0)
    }
}

impl core::error::Error for BitOutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks() {
        assert_eq!(Bit::Bit0.mask(), 0b0000_0001);
        assert_eq!(Bit::Bit3.mask(), 0b0000_1000);
        assert_eq!(Bit::Bit7.mask(), 0b1000_0000);

        let all = Bit::ALL.iter().fold(0u8, |acc, bit| acc | bit.mask());
        assert_eq!(all, 0xFF);
    }

    #[test]
    fn try_from_index() {
        for (i, bit) in Bit::ALL.iter().enumerate() {
            assert_eq!(Bit::try_from(i as u8), Ok(*bit));
            assert_eq!(u8::from(*bit), i as u8);
        }
        assert_eq!(Bit::try_from(8), Err(BitOutOfRange(8)));
        assert_eq!(Bit::try_from(255), Err(BitOutOfRange(255)));
    }

    #[test]
    fn out_of_range_message() {
        assert_eq!(
            BitOutOfRange(9).to_string(),
            "bit index 9 is out of range for a byte register"
        );
    }
}
