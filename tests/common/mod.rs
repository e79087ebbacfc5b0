//! A simulated XRA1405 for driving the driver without hardware.
//!
//! The register file decodes command bytes the same way the device does, keeps
//! the GPIO State registers in step with the pin configuration, and clears the
//! interrupt status registers when they are read.
#![allow(dead_code)]

use embedded_hal::spi::{self, Operation, SpiDevice};

pub const GSR1: usize = 0x00;
pub const GSR2: usize = 0x01;
pub const OCR1: usize = 0x02;
pub const OCR2: usize = 0x03;
pub const PIR1: usize = 0x04;
pub const PIR2: usize = 0x05;
pub const GCR1: usize = 0x06;
pub const GCR2: usize = 0x07;
pub const PUR1: usize = 0x08;
pub const PUR2: usize = 0x09;
pub const IER1: usize = 0x0A;
pub const IER2: usize = 0x0B;
pub const TSCR1: usize = 0x0C;
pub const TSCR2: usize = 0x0D;
pub const ISR1: usize = 0x0E;
pub const ISR2: usize = 0x0F;
pub const REIR1: usize = 0x10;
pub const REIR2: usize = 0x11;
pub const FEIR1: usize = 0x12;
pub const FEIR2: usize = 0x13;
pub const IFR1: usize = 0x14;
pub const IFR2: usize = 0x15;

/// Error returned by the simulated device when told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

impl spi::Error for BusFault {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

/// One register access seen on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(usize),
    Write(usize, u8),
}

#[derive(Debug)]
pub struct SimulatedXra1405 {
    pub registers: [u8; 22],
    /// Level applied to each pin from outside, P0 in bit 0.
    pub external_levels: u16,
    pub accesses: Vec<Access>,
    /// Fail the transaction with this index (0-based), without touching registers.
    pub fail_transaction: Option<usize>,
    transactions: usize,
}

impl SimulatedXra1405 {
    /// Power-on state: all pins inputs with the input filter enabled.
    pub fn new() -> Self {
        let mut registers = [0u8; 22];
        registers[GCR1] = 0xFF;
        registers[GCR2] = 0xFF;
        registers[IFR1] = 0xFF;
        registers[IFR2] = 0xFF;
        Self {
            registers,
            external_levels: 0,
            accesses: Vec::new(),
            fail_transaction: None,
            transactions: 0,
        }
    }

    pub fn with_register(mut self, address: usize, value: u8) -> Self {
        self.registers[address] = value;
        self
    }

    pub fn writes(&self) -> Vec<(usize, u8)> {
        self.accesses
            .iter()
            .filter_map(|a| match a {
                Access::Write(address, value) => Some((*address, *value)),
                Access::Read(_) => None,
            })
            .collect()
    }

    fn state_register(&self, bank: usize) -> u8 {
        let configuration = self.registers[GCR1 + bank];
        let output = self.registers[OCR1 + bank];
        let inversion = self.registers[PIR1 + bank];
        let external = self.external_levels.to_le_bytes()[bank];
        // Inputs (configuration bit set) show the external level, outputs the
        // output latch.
        let level = (configuration & external) | (!configuration & output);
        level ^ (inversion & configuration)
    }

    fn read(&mut self, address: usize) -> u8 {
        self.accesses.push(Access::Read(address));
        match address {
            GSR1 => self.state_register(0),
            GSR2 => self.state_register(1),
            ISR1 | ISR2 => core::mem::take(&mut self.registers[address]),
            _ => self.registers[address],
        }
    }

    fn write(&mut self, address: usize, value: u8) {
        self.accesses.push(Access::Write(address, value));
        match address {
            GSR1 | GSR2 | ISR1 | ISR2 => {}
            _ => self.registers[address] = value,
        }
    }
}

impl spi::ErrorType for SimulatedXra1405 {
    type Error = BusFault;
}

impl SpiDevice for SimulatedXra1405 {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let index = self.transactions;
        self.transactions += 1;
        if self.fail_transaction == Some(index) {
            return Err(BusFault);
        }

        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    assert_eq!(bytes.len(), 2, "write frame is command + data");
                    let command = bytes[0];
                    assert_eq!(command & 0x80, 0, "write command with read bit set");
                    assert_eq!(command & 0x01, 0, "reserved bit set");
                    self.write(((command >> 1) & 0x3F) as usize, bytes[1]);
                }
                Operation::TransferInPlace(buf) => {
                    assert_eq!(buf.len(), 2, "read frame is command + dummy");
                    let command = buf[0];
                    assert_eq!(command & 0x80, 0x80, "read command without read bit");
                    assert_eq!(command & 0x01, 0, "reserved bit set");
                    buf[1] = self.read(((command >> 1) & 0x3F) as usize);
                }
                other => panic!("unexpected SPI operation {other:?}"),
            }
        }
        Ok(())
    }
}
