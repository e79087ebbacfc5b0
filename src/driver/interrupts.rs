use embedded_hal::spi::SpiDevice;

use super::{Xra1405, pin_number};
use crate::error::Error;
use crate::gpio::{InterruptMode, InterruptStatus, PinNumber};
use crate::registers::RegisterFamily;

/// # Input interrupts
impl<SPI: SpiDevice> Xra1405<SPI> {
    /// Set which edges on an input pin raise an interrupt.
    ///
    /// The Input Interrupt Enable bit is always set. The rising and falling edge
    /// enable bits are then set to match `mode`, so a pin set to
    /// [`InterruptMode::Disabled`] stays enabled with neither edge selected:
    ///
    /// | Mode                         | `IER` | `REIR` | `FEIR` |
    /// |------------------------------|:-----:|:------:|:------:|
    /// | [`InterruptMode::Disabled`]  |  `H`  |  `L`   |  `L`   |
    /// | [`InterruptMode::Rising`]    |  `H`  |  `H`   |  `L`   |
    /// | [`InterruptMode::Falling`]   |  `H`  |  `L`   |  `H`   |
    /// | [`InterruptMode::Both`]      |  `H`  |  `H`   |  `H`   |
    ///
    /// Each bit is its own read-modify-write, in the order of the columns.
    pub fn set_interrupt(&self, pin: u8, mode: InterruptMode) -> Result<(), Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.write_pin_bit(pin, RegisterFamily::InterruptEnable, true)?;
        self.configure_edges(pin, mode)
    }

    /// Read back the interrupt mode of a pin.
    pub fn interrupt_mode(&self, pin: u8) -> Result<InterruptMode, Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        let enabled = self.read_pin_bit(pin, RegisterFamily::InterruptEnable)?;
        let rising = self.read_pin_bit(pin, RegisterFamily::RisingEdge)?;
        let falling = self.read_pin_bit(pin, RegisterFamily::FallingEdge)?;
        Ok(InterruptMode::from_bits(enabled, rising, falling))
    }

    /// Read and clear the latched interrupt flags of all pins.
    ///
    /// Both Input Interrupt Status registers are read, low bank first. The device
    /// clears the flags as a side effect of the read; nothing is written back.
    ///
    /// The returned flags can be ignored if you only need to clear them.
    pub fn clear_interrupts(&self) -> Result<InterruptStatus, Error<SPI::Error>> {
        let (low, high) = self.read_pair(RegisterFamily::InterruptStatus)?;
        let status = InterruptStatus::from_registers(low, high);
        if status.any() {
            log::debug!("Cleared interrupt flags {:#06X}", status.bits());
        }
        Ok(status)
    }

    /// Set the rising-edge bit, then the falling-edge bit, for `mode`.
    fn configure_edges(
        &self,
        pin: PinNumber,
        mode: InterruptMode,
    ) -> Result<(), Error<SPI::Error>> {
        self.write_pin_bit(pin, RegisterFamily::RisingEdge, mode.rising_edge())?;
        self.write_pin_bit(pin, RegisterFamily::FallingEdge, mode.falling_edge())
    }
}
