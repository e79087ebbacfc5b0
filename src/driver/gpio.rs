use embedded_hal::spi::SpiDevice;

use super::{Xra1405, pin_number};
use crate::error::Error;
use crate::gpio::{GpioDirection, LogicLevel, PinMode, Pins, PortValues};
use crate::registers::{Bank, Register, RegisterFamily};

/// # GPIO configuration and digital IO
impl<SPI: SpiDevice> Xra1405<SPI> {
    /// Take the sixteen pin structs for individual GPIO operation.
    ///
    /// This can only be done once, and will return `None` afterwards.
    pub fn take_pins(&self) -> Option<Pins<'_, SPI>> {
        if self.pins_taken.get() {
            None
        } else {
            self.pins_taken.set(true);
            Some(Pins::new(self))
        }
    }

    /// Configure a pin as an output or an input.
    ///
    /// [`PinMode::InputPullUp`] also enables the pin's pull-up resistor, with a
    /// second read-modify-write. The other modes leave the pull-up as it is, so a
    /// pin moved from `InputPullUp` to `Input` keeps its pull-up. Use
    /// [`Xra1405::set_pull_up`] to turn it off.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPin`] if `pin` is above 15.
    pub fn set_pin_mode(&self, pin: u8, mode: PinMode) -> Result<(), Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.write_pin_bit(pin, RegisterFamily::Configuration, mode.direction().into())?;
        if mode == PinMode::InputPullUp {
            self.write_pin_bit(pin, RegisterFamily::PullUp, true)?;
        }
        Ok(())
    }

    /// Read back how a pin is configured.
    ///
    /// An input is reported as [`PinMode::InputPullUp`] if its pull-up is enabled.
    /// An output's pull-up bit is not reported.
    pub fn pin_mode(&self, pin: u8) -> Result<PinMode, Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        let direction: GpioDirection = self
            .read_pin_bit(pin, RegisterFamily::Configuration)?
            .into();
        if direction.is_output() {
            return Ok(PinMode::Output);
        }
        if self.read_pin_bit(pin, RegisterFamily::PullUp)? {
            Ok(PinMode::InputPullUp)
        } else {
            Ok(PinMode::Input)
        }
    }

    /// Set the output level of a pin.
    ///
    /// This changes the Output Control register whatever the pin's direction, so
    /// the level can be set before the pin is switched to an output.
    pub fn digital_write(&self, pin: u8, level: LogicLevel) -> Result<(), Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.write_pin_bit(pin, RegisterFamily::OutputControl, level.into())
    }

    /// Read the level present on a pin.
    ///
    /// This is read from the GPIO State register, so it is the level on the pin
    /// for inputs and outputs alike, after any polarity inversion.
    pub fn digital_read(&self, pin: u8) -> Result<LogicLevel, Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.read_pin_bit(pin, RegisterFamily::State).map(LogicLevel::from)
    }

    /// Read the level a pin is set to drive, from the Output Control register.
    pub fn output_level(&self, pin: u8) -> Result<LogicLevel, Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.read_pin_bit(pin, RegisterFamily::OutputControl)
            .map(LogicLevel::from)
    }

    /// Enable or disable the internal pull-up resistor of a pin.
    pub fn set_pull_up(&self, pin: u8, enabled: bool) -> Result<(), Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.write_pin_bit(pin, RegisterFamily::PullUp, enabled)
    }

    /// Invert the level reported for an input pin.
    pub fn set_polarity_inversion(&self, pin: u8, inverted: bool) -> Result<(), Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.write_pin_bit(pin, RegisterFamily::PolarityInversion, inverted)
    }

    /// Put an output pin into the high-impedance state, or drive it again.
    pub fn set_three_state(&self, pin: u8, enabled: bool) -> Result<(), Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.write_pin_bit(pin, RegisterFamily::ThreeState, enabled)
    }

    /// Enable or disable the glitch filter on an input pin.
    ///
    /// The filter is enabled on all pins at power-up.
    pub fn set_input_filter(&self, pin: u8, enabled: bool) -> Result<(), Error<SPI::Error>> {
        let pin = pin_number(pin)?;
        self.write_pin_bit(pin, RegisterFamily::InputFilter, enabled)
    }

    /// Read the level on all sixteen pins from both GPIO State registers.
    pub fn read_port(&self) -> Result<PortValues, Error<SPI::Error>> {
        let (low, high) = self.read_pair(RegisterFamily::State)?;
        Ok(PortValues::from_registers(low, high))
    }

    /// Set the output level of all sixteen pins.
    ///
    /// Both Output Control registers are overwritten, with no read first.
    pub fn write_port(&self, values: PortValues) -> Result<(), Error<SPI::Error>> {
        let (low, high) = values.to_registers();
        self.write_register(Register::new(RegisterFamily::OutputControl, Bank::Low), low)?;
        self.write_register(Register::new(RegisterFamily::OutputControl, Bank::High), high)
    }
}
