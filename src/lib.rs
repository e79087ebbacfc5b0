#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod bus;
mod commands;
mod driver;
mod error;
pub mod gpio;
pub mod registers;

pub use bus::{BusConfig, SharedBus};
pub use driver::Xra1405;
pub use error::Error;
