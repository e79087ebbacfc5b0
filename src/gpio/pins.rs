use embedded_hal::spi::SpiDevice;

use super::{LogicLevel, PinMode, PinNumber};
use crate::{Error, Xra1405};

/// An expander pin that can be configured for digital input or output.
#[derive(Debug)]
pub struct ExpanderPin<'a, SPI> {
    driver: &'a Xra1405<SPI>,
    pin_number: PinNumber,
}

impl<'a, SPI: SpiDevice> ExpanderPin<'a, SPI> {
    /// The number of this pin, 0 to 15.
    pub fn number(&self) -> PinNumber {
        self.pin_number
    }

    /// Set up the pin as a digital input, leaving its pull-up as it is.
    ///
    /// You can retrieve the pin (for reconfiguration as an output) by calling
    /// [`Input::destroy`].
    pub fn configure_as_digital_input(self) -> Result<Input<'a, SPI>, Error<SPI::Error>> {
        self.set_mode(PinMode::Input)?;
        Ok(Input(self))
    }

    /// Set up the pin as a digital input with its pull-up enabled.
    pub fn configure_as_pulled_up_input(self) -> Result<Input<'a, SPI>, Error<SPI::Error>> {
        self.set_mode(PinMode::InputPullUp)?;
        Ok(Input(self))
    }

    /// Set up the pin as a digital output.
    ///
    /// The output drives whatever level is already in the Output Control register.
    /// You can retrieve the pin (for reconfiguration as an input) by calling
    /// [`Output::destroy`].
    pub fn configure_as_digital_output(self) -> Result<Output<'a, SPI>, Error<SPI::Error>> {
        self.set_mode(PinMode::Output)?;
        Ok(Output(self))
    }

    fn set_mode(&self, mode: PinMode) -> Result<(), Error<SPI::Error>> {
        self.driver.set_pin_mode(self.pin_number.into(), mode)
    }
}

impl<'a, SPI: SpiDevice> TryFrom<ExpanderPin<'a, SPI>> for Input<'a, SPI> {
    type Error = Error<SPI::Error>;
    fn try_from(pin: ExpanderPin<'a, SPI>) -> Result<Self, Self::Error> {
        pin.configure_as_digital_input()
    }
}

impl<'a, SPI: SpiDevice> TryFrom<ExpanderPin<'a, SPI>> for Output<'a, SPI> {
    type Error = Error<SPI::Error>;
    fn try_from(pin: ExpanderPin<'a, SPI>) -> Result<Self, Self::Error> {
        pin.configure_as_digital_output()
    }
}

impl<'a, SPI> From<Input<'a, SPI>> for ExpanderPin<'a, SPI> {
    fn from(value: Input<'a, SPI>) -> Self {
        value.0
    }
}

impl<'a, SPI> From<Output<'a, SPI>> for ExpanderPin<'a, SPI> {
    fn from(value: Output<'a, SPI>) -> Self {
        value.0
    }
}

/// An expander pin in digital input mode.
#[derive(Debug)]
pub struct Input<'a, SPI>(ExpanderPin<'a, SPI>);

impl<'a, SPI: SpiDevice> Input<'a, SPI> {
    /// Get the input level of this pin.
    pub fn get_level(&self) -> Result<LogicLevel, Error<SPI::Error>> {
        self.0.driver.digital_read(self.0.pin_number.into())
    }

    /// Return the underlying pin object, so that it can be reconfigured.
    ///
    /// This method does not change any XRA1405 registers.
    pub fn destroy(self) -> ExpanderPin<'a, SPI> {
        self.0
    }

    /// Switch the pin from input to output.
    pub fn try_into_output(self) -> Result<Output<'a, SPI>, Error<SPI::Error>> {
        self.0.configure_as_digital_output()
    }
}

impl<SPI: SpiDevice> embedded_hal::digital::ErrorType for Input<'_, SPI> {
    type Error = Error<SPI::Error>;
}

impl<SPI: SpiDevice> embedded_hal::digital::InputPin for Input<'_, SPI> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.get_level().map(LogicLevel::is_high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.get_level().map(LogicLevel::is_low)
    }
}

/// An expander pin in digital output mode.
#[derive(Debug)]
pub struct Output<'a, SPI>(ExpanderPin<'a, SPI>);

impl<'a, SPI: SpiDevice> Output<'a, SPI> {
    /// Fail if the pin has been switched to an input behind this wrapper's back.
    fn ensure_output(&self) -> Result<(), Error<SPI::Error>> {
        match self.0.driver.pin_mode(self.0.pin_number.into())? {
            PinMode::Output => Ok(()),
            PinMode::Input | PinMode::InputPullUp => Err(Error::PinModeChanged),
        }
    }

    /// Set the output level of this pin.
    pub fn set_level(&self, level: LogicLevel) -> Result<(), Error<SPI::Error>> {
        self.ensure_output()?;
        self.0.driver.digital_write(self.0.pin_number.into(), level)
    }

    /// Get the currently set output level of this pin.
    pub fn get_output_level(&self) -> Result<LogicLevel, Error<SPI::Error>> {
        self.ensure_output()?;
        self.0.driver.output_level(self.0.pin_number.into())
    }

    /// Return the underlying pin object, so that it can be reconfigured.
    pub fn destroy(self) -> ExpanderPin<'a, SPI> {
        self.0
    }

    /// Switch the pin from output to input, leaving its pull-up as it is.
    pub fn try_into_input(self) -> Result<Input<'a, SPI>, Error<SPI::Error>> {
        self.0.configure_as_digital_input()
    }
}

impl<SPI: SpiDevice> embedded_hal::digital::ErrorType for Output<'_, SPI> {
    type Error = Error<SPI::Error>;
}

impl<SPI: SpiDevice> embedded_hal::digital::OutputPin for Output<'_, SPI> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(LogicLevel::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(LogicLevel::High)
    }
}

impl<SPI: SpiDevice> embedded_hal::digital::StatefulOutputPin for Output<'_, SPI> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.get_output_level().map(LogicLevel::is_high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.get_output_level().map(LogicLevel::is_low)
    }
}

impl<'a, SPI: SpiDevice> TryFrom<Output<'a, SPI>> for Input<'a, SPI> {
    type Error = Error<SPI::Error>;

    fn try_from(value: Output<'a, SPI>) -> Result<Self, Self::Error> {
        value.try_into_input()
    }
}

impl<'a, SPI: SpiDevice> TryFrom<Input<'a, SPI>> for Output<'a, SPI> {
    type Error = Error<SPI::Error>;

    fn try_from(value: Input<'a, SPI>) -> Result<Self, Self::Error> {
        value.try_into_output()
    }
}

/// The sixteen XRA1405 pins.
///
/// Fields `p0` to `p7` are in the low register bank and `p8` to `p15` in the high
/// bank.
#[allow(missing_docs)]
#[derive(Debug)]
pub struct Pins<'a, SPI> {
    pub p0: ExpanderPin<'a, SPI>,
    pub p1: ExpanderPin<'a, SPI>,
    pub p2: ExpanderPin<'a, SPI>,
    pub p3: ExpanderPin<'a, SPI>,
    pub p4: ExpanderPin<'a, SPI>,
    pub p5: ExpanderPin<'a, SPI>,
    pub p6: ExpanderPin<'a, SPI>,
    pub p7: ExpanderPin<'a, SPI>,
    pub p8: ExpanderPin<'a, SPI>,
    pub p9: ExpanderPin<'a, SPI>,
    pub p10: ExpanderPin<'a, SPI>,
    pub p11: ExpanderPin<'a, SPI>,
    pub p12: ExpanderPin<'a, SPI>,
    pub p13: ExpanderPin<'a, SPI>,
    pub p14: ExpanderPin<'a, SPI>,
    pub p15: ExpanderPin<'a, SPI>,
}

impl<'a, SPI> Pins<'a, SPI> {
    pub(crate) fn new(driver: &'a Xra1405<SPI>) -> Self {
        let [
            p0,
            p1,
            p2,
            p3,
            p4,
            p5,
            p6,
            p7,
            p8,
            p9,
            p10,
            p11,
            p12,
            p13,
            p14,
            p15,
        ] = PinNumber::ALL.map(|pin_number| ExpanderPin { driver, pin_number });
        Self {
            p0,
            p1,
            p2,
            p3,
            p4,
            p5,
            p6,
            p7,
            p8,
            p9,
            p10,
            p11,
            p12,
            p13,
            p14,
            p15,
        }
    }
}
