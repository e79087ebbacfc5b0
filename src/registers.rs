//! The XRA1405 register file.
//!
//! Every register is 8 bits wide with one bit per pin. Each function the device
//! offers is split across a pair of registers: one for pins P0-P7 (the low bank)
//! and one for pins P8-P15 (the high bank).
//!
//! ## Datasheet
//!
//! See the register map in the XRA1405 datasheet for the addresses below.

/// Which half of the 16 pins a register covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    /// Pins P0-P7.
    Low,
    /// Pins P8-P15.
    High,
}

/// A register function, independent of bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFamily {
    /// GPIO State (GSR). Read-only. 1 = pin is high.
    State,
    /// Output Control (OCR). 1 = drive high.
    OutputControl,
    /// Input Polarity Inversion (PIR). 1 = inverted.
    PolarityInversion,
    /// GPIO Configuration (GCR). 1 = input, 0 = output.
    Configuration,
    /// Pull-up Resistor Enable (PUR). 1 = enabled.
    PullUp,
    /// Input Interrupt Enable (IER). 1 = interrupt armed.
    InterruptEnable,
    /// Three-State Control (TSCR). 1 = output is high impedance.
    ThreeState,
    /// Input Interrupt Status (ISR). Read-only, cleared on read.
    InterruptStatus,
    /// Rising Edge Interrupt Enable (REIR).
    RisingEdge,
    /// Falling Edge Interrupt Enable (FEIR).
    FallingEdge,
    /// Input Filter Enable (IFR). 1 = filter on.
    InputFilter,
}

impl RegisterFamily {
    /// Every register family, in address order.
    pub const ALL: [RegisterFamily; 11] = [
        RegisterFamily::State,
        RegisterFamily::OutputControl,
        RegisterFamily::PolarityInversion,
        RegisterFamily::Configuration,
        RegisterFamily::PullUp,
        RegisterFamily::InterruptEnable,
        RegisterFamily::ThreeState,
        RegisterFamily::InterruptStatus,
        RegisterFamily::RisingEdge,
        RegisterFamily::FallingEdge,
        RegisterFamily::InputFilter,
    ];
}

/// Register addresses within the device.
///
/// The discriminant is the 6-bit register address, before it is shifted into
/// bits 6:1 of the SPI command byte.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// GPIO State, P0-P7.
    GSR1 = 0x00,
    /// GPIO State, P8-P15.
    GSR2 = 0x01,
    /// Output Control, P0-P7.
    OCR1 = 0x02,
    /// Output Control, P8-P15.
    OCR2 = 0x03,
    /// Input Polarity Inversion, P0-P7.
    PIR1 = 0x04,
    /// Input Polarity Inversion, P8-P15.
    PIR2 = 0x05,
    /// GPIO Configuration, P0-P7.
    GCR1 = 0x06,
    /// GPIO Configuration, P8-P15.
    GCR2 = 0x07,
    /// Pull-up Resistor Enable, P0-P7.
    PUR1 = 0x08,
    /// Pull-up Resistor Enable, P8-P15.
    PUR2 = 0x09,
    /// Input Interrupt Enable, P0-P7.
    IER1 = 0x0A,
    /// Input Interrupt Enable, P8-P15.
    IER2 = 0x0B,
    /// Three-State Control, P0-P7.
    TSCR1 = 0x0C,
    /// Three-State Control, P8-P15.
    TSCR2 = 0x0D,
    /// Input Interrupt Status, P0-P7.
    ISR1 = 0x0E,
    /// Input Interrupt Status, P8-P15.
    ISR2 = 0x0F,
    /// Rising Edge Interrupt Enable, P0-P7.
    REIR1 = 0x10,
    /// Rising Edge Interrupt Enable, P8-P15.
    REIR2 = 0x11,
    /// Falling Edge Interrupt Enable, P0-P7.
    FEIR1 = 0x12,
    /// Falling Edge Interrupt Enable, P8-P15.
    FEIR2 = 0x13,
    /// Input Filter Enable, P0-P7.
    IFR1 = 0x14,
    /// Input Filter Enable, P8-P15.
    IFR2 = 0x15,
}

impl Register {
    /// Look up the register for a family in the given bank.
    pub const fn new(family: RegisterFamily, bank: Bank) -> Self {
        use Bank::{High, Low};
        use Register::*;
        use RegisterFamily as F;

        match (family, bank) {
            (F::State, Low) => GSR1,
            (F::State, High) => GSR2,
            (F::OutputControl, Low) => OCR1,
            (F::OutputControl, High) => OCR2,
            (F::PolarityInversion, Low) => PIR1,
            (F::PolarityInversion, High) => PIR2,
            (F::Configuration, Low) => GCR1,
            (F::Configuration, High) => GCR2,
            (F::PullUp, Low) => PUR1,
            (F::PullUp, High) => PUR2,
            (F::InterruptEnable, Low) => IER1,
            (F::InterruptEnable, High) => IER2,
            (F::ThreeState, Low) => TSCR1,
            (F::ThreeState, High) => TSCR2,
            (F::InterruptStatus, Low) => ISR1,
            (F::InterruptStatus, High) => ISR2,
            (F::RisingEdge, Low) => REIR1,
            (F::RisingEdge, High) => REIR2,
            (F::FallingEdge, Low) => FEIR1,
            (F::FallingEdge, High) => FEIR2,
            (F::InputFilter, Low) => IFR1,
            (F::InputFilter, High) => IFR2,
        }
    }

    /// The 7-bit register address.
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Which bank of pins this register covers.
    ///
    /// Low-bank registers sit at even addresses and their high-bank partner
    /// immediately after.
    pub const fn bank(self) -> Bank {
        if self.address() & 1 == 0 {
            Bank::Low
        } else {
            Bank::High
        }
    }

    /// The function of this register.
    pub const fn family(self) -> RegisterFamily {
        RegisterFamily::ALL[(self.address() >> 1) as usize]
    }

    /// True for registers that can't be written: GPIO State and Interrupt Status.
    pub const fn is_read_only(self) -> bool {
        matches!(
            self.family(),
            RegisterFamily::State | RegisterFamily::InterruptStatus
        )
    }
}
