//! Pin numbering, configuration values and per-pin GPIO handles.

mod common;
mod pin_number;
mod pins;
mod values;

pub use common::{GpioDirection, InterruptMode, LogicLevel, PinMode};
pub use pin_number::PinNumber;
pub use pins::{ExpanderPin, Input, Output, Pins};
pub use values::{InterruptStatus, PortValues};
