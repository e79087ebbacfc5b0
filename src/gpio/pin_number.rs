use crate::registers::{Bank, Register, RegisterFamily};

/// One of the sixteen expander pins, P0 to P15.
///
/// Construct with [`PinNumber::new`] or `TryFrom<u8>`, both of which reject
/// numbers above 15 rather than wrapping them into the other bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PinNumber(u8);

impl PinNumber {
    /// Highest valid pin number.
    pub const MAX: u8 = 15;

    /// All sixteen pins, P0 first.
    pub const ALL: [PinNumber; 16] = [
        PinNumber(0),
        PinNumber(1),
        PinNumber(2),
        PinNumber(3),
        PinNumber(4),
        PinNumber(5),
        PinNumber(6),
        PinNumber(7),
        PinNumber(8),
        PinNumber(9),
        PinNumber(10),
        PinNumber(11),
        PinNumber(12),
        PinNumber(13),
        PinNumber(14),
        PinNumber(15),
    ];

    /// Validate a pin number. Returns `None` for anything above 15.
    pub const fn new(pin: u8) -> Option<Self> {
        if pin <= Self::MAX {
            Some(Self(pin))
        } else {
            None
        }
    }

    /// All sixteen pins in order.
    pub fn all() -> impl Iterator<Item = PinNumber> {
        Self::ALL.into_iter()
    }

    /// The bank of registers holding this pin's bits.
    pub const fn bank(self) -> Bank {
        if self.0 < 8 { Bank::Low } else { Bank::High }
    }

    /// This pin's bit within its bank's registers.
    pub const fn bit(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Pick the register of `family` that holds this pin, and the bit within it.
    pub const fn resolve(self, family: RegisterFamily) -> (Register, usize) {
        (Register::new(family, self.bank()), self.bit())
    }
}

impl TryFrom<u8> for PinNumber {
    type Error = u8;

    /// Fails with the rejected number if it is above 15.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PinNumber::new(value).ok_or(value)
    }
}

impl From<PinNumber> for u8 {
    fn from(value: PinNumber) -> Self {
        value.0
    }
}
