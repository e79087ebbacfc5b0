use bit_field::BitField;

use super::{LogicLevel, PinNumber};

/// Logic levels of all sixteen pins.
///
/// Bit _n_ holds pin P_n_, so the low byte is the low-bank register and the
/// high byte is the high-bank register.
///
/// Returned by [`Xra1405::read_port`] with the levels from the GPIO State
/// registers, and accepted by [`Xra1405::write_port`] for the Output Control
/// registers.
///
/// [`Xra1405::read_port`]: crate::Xra1405::read_port
/// [`Xra1405::write_port`]: crate::Xra1405::write_port
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PortValues(u16);

impl PortValues {
    /// All pins low.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build from the raw 16-bit value, P0 in bit 0.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Build from the low-bank (P0-P7) and high-bank (P8-P15) register bytes.
    pub fn from_registers(low: u8, high: u8) -> Self {
        Self(u16::from_le_bytes([low, high]))
    }

    /// The raw 16-bit value, P0 in bit 0.
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Split into the low-bank and high-bank register bytes.
    pub fn to_registers(&self) -> (u8, u8) {
        let [low, high] = self.0.to_le_bytes();
        (low, high)
    }

    /// Level of one pin.
    pub fn level(&self, pin: PinNumber) -> LogicLevel {
        self.0.get_bit(u8::from(pin) as usize).into()
    }

    /// Set the level of one pin.
    pub fn with_level(&mut self, pin: PinNumber, level: LogicLevel) -> &mut Self {
        self.0.set_bit(u8::from(pin) as usize, level.into());
        self
    }
}

/// Latched interrupt flags read from the Input Interrupt Status registers.
///
/// Bit _n_ is set if pin P_n_ raised an interrupt since the registers were last
/// read.
///
/// ## Datasheet
///
/// See the Input Interrupt Status Register (ISR) description: the flags are
/// cleared by reading the register.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InterruptStatus(u16);

impl InterruptStatus {
    pub(crate) fn from_registers(low: u8, high: u8) -> Self {
        Self(u16::from_le_bytes([low, high]))
    }

    /// The raw 16-bit flags, P0 in bit 0.
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// True if the given pin has a latched interrupt.
    pub fn is_pending(&self, pin: PinNumber) -> bool {
        self.0.get_bit(u8::from(pin) as usize)
    }

    /// True if any pin has a latched interrupt.
    pub fn any(&self) -> bool {
        self.0 != 0
    }

    /// The pins with a latched interrupt, lowest first.
    pub fn pending(&self) -> impl Iterator<Item = PinNumber> + '_ {
        PinNumber::all().filter(|pin| self.is_pending(*pin))
    }
}
