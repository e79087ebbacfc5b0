use crate::registers::Register;

/// Wrapper for problems when communicating with the XRA1405.
///
/// `E` is the error type of the underlying [`SpiDevice`].
///
/// [`SpiDevice`]: embedded_hal::spi::SpiDevice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The SPI transfer to or from the XRA1405 failed.
    ///
    /// For a read-modify-write, a failure on the read means nothing was written,
    /// and a failure on the write leaves the register at its previous value.
    Spi(E),
    /// The pin number given was not in the range 0..=15.
    InvalidPin(u8),
    /// Attempt to write a register the device only allows to be read.
    ///
    /// This is the GPIO State and Input Interrupt Status registers.
    ReadOnlyRegister(Register),
    /// An [`Output`] pin was found to be configured as an input.
    ///
    /// The pin was reconfigured through the driver after the [`Output`] wrapper was
    /// created.
    ///
    /// [`Output`]: crate::gpio::Output
    PinModeChanged,
}

impl<E: core::fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Spi(e) => write!(f, "SPI transfer failed: {e:?}"),
            Error::InvalidPin(pin) => write!(f, "pin {pin} is not in the range 0..=15"),
            Error::ReadOnlyRegister(register) => {
                write!(f, "register {register:?} is read-only")
            }
            Error::PinModeChanged => write!(f, "output pin has been reconfigured as an input"),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}
