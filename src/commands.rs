use bit_field::BitField;

use crate::registers::Register;

/// Bit 7 of the command byte selects the transfer direction.
const READ_WRITE_BIT: usize = 7;
/// Bits 6:1 of the command byte carry the register address. Bit 0 is reserved.
const ADDRESS_BITS: core::ops::RangeInclusive<usize> = 1..=6;

/// A single register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    /// Read one byte from the register.
    Read(Register),
    /// Write one byte to the register.
    Write(Register),
}

impl Command {
    /// The register this command addresses.
    pub(crate) fn register(&self) -> Register {
        match self {
            Command::Read(register) | Command::Write(register) => *register,
        }
    }

    /// Returns true if the second byte of the frame is clocked in from the device.
    pub(crate) fn is_read(&self) -> bool {
        matches!(self, Command::Read(_))
    }

    /// The first byte sent on the bus for this command.
    ///
    /// ## Datasheet
    ///
    /// See the "SPI Command Byte" description: bit 7 is 1 for read and 0 for
    /// write, bits 6:1 are the register address and bit 0 is reserved (0).
    pub(crate) fn command_byte(&self) -> u8 {
        let mut byte = 0u8;
        byte.set_bits(ADDRESS_BITS, self.register().address());
        byte.set_bit(READ_WRITE_BIT, self.is_read());
        byte
    }
}

/// The two bytes exchanged while the device is selected.
///
/// For a read, the second byte is a dummy that is overwritten by the register
/// value clocked out of the device. For a write, it is the payload.
pub(crate) struct SpiFrame {
    command: Command,
    pub(crate) buffer: [u8; 2],
}

impl SpiFrame {
    pub(crate) fn new(command: Command) -> Self {
        Self {
            command,
            buffer: [command.command_byte(), 0x00],
        }
    }

    /// Set the payload byte of a write.
    pub(crate) fn with_data_byte(mut self, value: u8) -> Self {
        debug_assert!(!self.command.is_read(), "Data byte on a read frame.");
        self.buffer[1] = value;
        self
    }

    /// The byte clocked back from the device during the second half of the frame.
    pub(crate) fn response_byte(&self) -> u8 {
        self.buffer[1]
    }

    pub(crate) fn command(&self) -> Command {
        self.command
    }
}
