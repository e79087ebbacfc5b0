use core::cell::{Cell, RefCell};

use bit_field::BitField;
use embedded_hal::spi::SpiDevice;
use log::{debug, trace};

use crate::commands::{Command, SpiFrame};
use crate::error::Error;
use crate::gpio::PinNumber;
use crate::registers::{Register, RegisterFamily};

mod gpio;
mod interrupts;

/// Driver for the XRA1405.
///
/// # Quick start
///
/// Create the driver with [`Xra1405::new`] from an [`SpiDevice`] that owns the
/// expander's chip-select line. If several devices share one SPI bus, use
/// [`SharedBus`] to hand out one `SpiDevice` per chip-select.
///
/// Pins are addressed by number, 0 to 15. Pins 0-7 are the device's P0-P7 and live
/// in the low bank of registers; 8-15 are P8-P15 in the high bank. Any other number
/// is rejected with [`Error::InvalidPin`].
///
/// ```
/// # use embedded_hal_mock::eh1::spi::{Mock, Transaction};
/// # let spi = Mock::new(&[
/// #     Transaction::transaction_start(),
/// #     Transaction::transfer_in_place(vec![0x8C, 0x00], vec![0x00, 0xFF]),
/// #     Transaction::transaction_end(),
/// #     Transaction::transaction_start(),
/// #     Transaction::write_vec(vec![0x0C, 0xF7]),
/// #     Transaction::transaction_end(),
/// #     Transaction::transaction_start(),
/// #     Transaction::transfer_in_place(vec![0x84, 0x00], vec![0x00, 0x00]),
/// #     Transaction::transaction_end(),
/// #     Transaction::transaction_start(),
/// #     Transaction::write_vec(vec![0x04, 0x08]),
/// #     Transaction::transaction_end(),
/// # ]);
/// use xra1405_hal::Xra1405;
/// use xra1405_hal::gpio::{LogicLevel, PinMode};
///
/// let expander = Xra1405::new(spi);
/// expander.set_pin_mode(3, PinMode::Output)?;
/// expander.digital_write(3, LogicLevel::High)?;
/// # expander.release().done();
/// # Ok::<(), xra1405_hal::Error<embedded_hal::spi::ErrorKind>>(())
/// ```
///
/// For individual pins that implement the [`embedded_hal::digital`] traits, use
/// [`Xra1405::take_pins`].
///
/// # Register access
///
/// Every register packs the bits of eight pins, so every single-pin change is a
/// read-modify-write: the register is read, one bit is changed and the whole byte
/// is written back. Nothing is cached, so the device is always the source of truth.
///
/// The read and the write are two separate SPI transactions. The driver is `!Sync`
/// and each method holds the bus for its whole read-modify-write, so a single
/// driver can't interleave with itself. If you need to reach the same expander
/// from several threads, put the driver behind one mutex rather than creating a
/// second driver for the same chip-select.
///
/// [`SharedBus`]: crate::bus::SharedBus
#[derive(Debug)]
pub struct Xra1405<SPI> {
    /// SPI device with the expander's chip-select.
    ///
    /// Borrowed mutably for the length of one operation. The driver methods only
    /// need a shared reference so that the pin wrappers can all refer to it.
    spi: RefCell<SPI>,
    /// Marker for whether the pin structs have been taken from the driver.
    ///
    /// See [`Self::take_pins`] for the only place it is used.
    pins_taken: Cell<bool>,
}

impl<SPI: SpiDevice> Xra1405<SPI> {
    ////////////////////////////////////////////////////////////////////////////////
    // Constructors
    ////////////////////////////////////////////////////////////////////////////////

    /// Create a driver for the expander behind `spi`.
    ///
    /// No bus traffic is generated.
    pub fn new(spi: SPI) -> Self {
        Self {
            spi: RefCell::new(spi),
            pins_taken: Cell::new(false),
        }
    }

    /// Destroy the driver and return the SPI device.
    pub fn release(self) -> SPI {
        self.spi.into_inner()
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Register transactions
    ////////////////////////////////////////////////////////////////////////////////

    /// Read one register.
    ///
    /// Reading an Input Interrupt Status register clears the flags it reports.
    pub fn read_register(&self, register: Register) -> Result<u8, Error<SPI::Error>> {
        read(&mut *self.spi.borrow_mut(), register)
    }

    /// Write one register, replacing all eight bits.
    ///
    /// # Errors
    ///
    /// [`Error::ReadOnlyRegister`] is returned without touching the bus if the
    /// register is one of the GPIO State or Input Interrupt Status registers.
    pub fn write_register(&self, register: Register, value: u8) -> Result<(), Error<SPI::Error>> {
        if register.is_read_only() {
            return Err(Error::ReadOnlyRegister(register));
        }
        write(&mut *self.spi.borrow_mut(), register, value)
    }

    /// Read both registers of a family, low bank first.
    pub(crate) fn read_pair(&self, family: RegisterFamily) -> Result<(u8, u8), Error<SPI::Error>> {
        use crate::registers::Bank;

        let mut spi = self.spi.borrow_mut();
        let low = read(&mut *spi, Register::new(family, Bank::Low))?;
        let high = read(&mut *spi, Register::new(family, Bank::High))?;
        Ok((low, high))
    }

    /// Read the bit for `pin` in the register of `family`.
    pub(crate) fn read_pin_bit(
        &self,
        pin: PinNumber,
        family: RegisterFamily,
    ) -> Result<bool, Error<SPI::Error>> {
        let (register, bit) = pin.resolve(family);
        Ok(self.read_register(register)?.get_bit(bit))
    }

    /// Set or clear the bit for `pin` in the register of `family`.
    ///
    /// The register is read and written back with only that bit changed. The bus
    /// is held for both transfers.
    pub(crate) fn write_pin_bit(
        &self,
        pin: PinNumber,
        family: RegisterFamily,
        value: bool,
    ) -> Result<(), Error<SPI::Error>> {
        let (register, bit) = pin.resolve(family);
        let mut spi = self.spi.borrow_mut();

        let current = read(&mut *spi, register)?;
        let mut updated = current;
        updated.set_bit(bit, value);
        write(&mut *spi, register, updated)?;

        if updated != current {
            debug!("{register:?}: {current:#010b} -> {updated:#010b} ({pin:?})");
        }
        Ok(())
    }
}

/// Validate a pin number from the public API.
pub(crate) fn pin_number<E>(pin: u8) -> Result<PinNumber, Error<E>> {
    PinNumber::new(pin).ok_or(Error::InvalidPin(pin))
}

/// One framed exchange: select, command byte, data byte, deselect.
///
/// The [`SpiDevice`] drives the chip-select around the transaction.
fn transfer<SPI: SpiDevice>(spi: &mut SPI, frame: &mut SpiFrame) -> Result<(), Error<SPI::Error>> {
    let command = frame.command();
    let result = if command.is_read() {
        spi.transfer_in_place(&mut frame.buffer)
    } else {
        spi.write(&frame.buffer)
    };
    result.map_err(Error::Spi)?;
    trace!("{command:?}: {:02X?}", frame.buffer);
    Ok(())
}

fn read<SPI: SpiDevice>(spi: &mut SPI, register: Register) -> Result<u8, Error<SPI::Error>> {
    let mut frame = SpiFrame::new(Command::Read(register));
    transfer(spi, &mut frame)?;
    Ok(frame.response_byte())
}

fn write<SPI: SpiDevice>(
    spi: &mut SPI,
    register: Register,
    value: u8,
) -> Result<(), Error<SPI::Error>> {
    let mut frame = SpiFrame::new(Command::Write(register)).with_data_byte(value);
    transfer(spi, &mut frame)
}
