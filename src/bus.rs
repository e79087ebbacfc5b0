//! SPI bus settings and sharing one bus between several expanders.
//!
//! The XRA1405 is selected by its own chip-select line, so several devices can sit
//! on one SPI bus. [`SharedBus`] owns the bus and the [`BusConfig`] it was set up
//! with, and hands out one [`Xra1405`] driver per chip-select.
//!
//! embedded-hal has no way to change the clock of a bus after it is created, so
//! the frequency and mode in [`BusConfig`] are for you to pass to your HAL when
//! creating the bus.

use core::cell::RefCell;
use core::ops::RangeInclusive;

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{MODE_0, Mode, SpiBus};
use embedded_hal_bus::spi::{NoDelay, RefCellDevice};
use log::warn;

use crate::Xra1405;

/// SPI clock used when no valid frequency is given, in Hz.
pub const DEFAULT_FREQUENCY_HZ: u32 = 26_000_000;

/// SPI clock frequencies accepted by [`BusConfig::new`], in Hz.
pub const FREQUENCY_RANGE_HZ: RangeInclusive<u32> = 24_000_000..=26_000_000;

/// SPI mode of the XRA1405: clock idles low, data sampled on the rising edge.
///
/// Data is sent most significant bit first.
pub const MODE: Mode = MODE_0;

/// Host GPIO numbers of the SPI bus lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusPins {
    /// Serial clock.
    pub sck: u8,
    /// Data from the expander to the host.
    pub miso: u8,
    /// Data from the host to the expander.
    pub mosi: u8,
}

/// Settings for the SPI bus the expanders are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    frequency_hz: u32,
    pins: Option<BusPins>,
}

impl BusConfig {
    /// Settings with the given SPI clock frequency.
    ///
    /// A frequency outside of [`FREQUENCY_RANGE_HZ`] is replaced with
    /// [`DEFAULT_FREQUENCY_HZ`], and a warning is logged.
    pub fn new(frequency_hz: u32) -> Self {
        let frequency_hz = if FREQUENCY_RANGE_HZ.contains(&frequency_hz) {
            frequency_hz
        } else {
            warn!(
                "SPI clock {frequency_hz} Hz out of range, using {DEFAULT_FREQUENCY_HZ} Hz"
            );
            DEFAULT_FREQUENCY_HZ
        };
        Self {
            frequency_hz,
            pins: None,
        }
    }

    /// Record which host pins carry the bus.
    pub fn with_pins(mut self, sck: u8, miso: u8, mosi: u8) -> Self {
        self.pins = Some(BusPins { sck, miso, mosi });
        self
    }

    /// The SPI clock frequency to use, in Hz.
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    /// The host pins, if they were given.
    pub fn pins(&self) -> Option<BusPins> {
        self.pins
    }

    /// The SPI mode to use. Always [`MODE`].
    pub fn mode(&self) -> Mode {
        MODE
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY_HZ)
    }
}

/// An SPI bus shared by any number of XRA1405s, each with its own chip-select.
///
/// Transactions to different devices can't overlap: each driver borrows the bus
/// for one transaction at a time. This type is `!Sync`; with the `std` feature,
/// [`MutexSharedBus`] can be shared between threads.
#[derive(Debug)]
pub struct SharedBus<BUS> {
    bus: RefCell<BUS>,
    config: BusConfig,
}

impl<BUS: SpiBus> SharedBus<BUS> {
    /// Take ownership of a bus set up according to `config`.
    pub fn initialize(bus: BUS, config: BusConfig) -> Self {
        log::debug!("SPI bus at {} Hz", config.frequency_hz());
        Self {
            bus: RefCell::new(bus),
            config,
        }
    }

    /// The settings the bus was set up with.
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Create a driver for the expander selected by `cs`.
    ///
    /// # Errors
    ///
    /// The chip-select is driven high (deselected) before the driver is returned,
    /// and any error doing so is returned.
    #[allow(clippy::type_complexity)]
    pub fn device<CS: OutputPin>(
        &self,
        cs: CS,
    ) -> Result<Xra1405<RefCellDevice<'_, BUS, CS, NoDelay>>, CS::Error> {
        let device = RefCellDevice::new_no_delay(&self.bus, cs)?;
        Ok(Xra1405::new(device))
    }

    /// Destroy the shared bus and return the SPI bus.
    ///
    /// Every driver borrowed from it must have been dropped first.
    pub fn release(self) -> BUS {
        self.bus.into_inner()
    }
}

#[cfg(feature = "std")]
pub use mutex::MutexSharedBus;

#[cfg(feature = "std")]
mod mutex {
    use std::sync::{Mutex, PoisonError};

    use embedded_hal::digital::OutputPin;
    use embedded_hal::spi::SpiBus;
    use embedded_hal_bus::spi::{MutexDevice, NoDelay};

    use super::BusConfig;
    use crate::Xra1405;

    /// An SPI bus shared by XRA1405s on several threads.
    ///
    /// Each bus transaction locks the mutex. A driver's read-modify-write is two
    /// transactions, so a second thread can use the bus between them, but only
    /// to talk to a different chip-select. Keep each driver on one thread, or
    /// behind its own mutex.
    #[derive(Debug)]
    pub struct MutexSharedBus<BUS> {
        bus: Mutex<BUS>,
        config: BusConfig,
    }

    impl<BUS: SpiBus> MutexSharedBus<BUS> {
        /// Take ownership of a bus set up according to `config`.
        pub fn initialize(bus: BUS, config: BusConfig) -> Self {
            log::debug!("SPI bus at {} Hz", config.frequency_hz());
            Self {
                bus: Mutex::new(bus),
                config,
            }
        }

        /// The settings the bus was set up with.
        pub fn config(&self) -> &BusConfig {
            &self.config
        }

        /// Create a driver for the expander selected by `cs`.
        #[allow(clippy::type_complexity)]
        pub fn device<CS: OutputPin>(
            &self,
            cs: CS,
        ) -> Result<Xra1405<MutexDevice<'_, BUS, CS, NoDelay>>, CS::Error> {
            let device = MutexDevice::new_no_delay(&self.bus, cs)?;
            Ok(Xra1405::new(device))
        }

        /// Destroy the shared bus and return the SPI bus.
        ///
        /// A bus poisoned by a panicking thread is still returned.
        pub fn release(self) -> BUS {
            self.bus.into_inner().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
