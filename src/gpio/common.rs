#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// GPIO pin level.
pub enum LogicLevel {
    /// Logic high.
    High,
    /// Logic low.
    Low,
}

impl LogicLevel {
    /// Returns true if the level is [`LogicLevel::High`].
    pub fn is_high(self) -> bool {
        matches!(self, LogicLevel::High)
    }

    /// Returns true if the level is [`LogicLevel::Low`].
    pub fn is_low(self) -> bool {
        matches!(self, LogicLevel::Low)
    }
}

impl From<bool> for LogicLevel {
    fn from(value: bool) -> Self {
        if value { Self::High } else { Self::Low }
    }
}

impl From<LogicLevel> for bool {
    fn from(value: LogicLevel) -> Self {
        match value {
            LogicLevel::High => true,
            LogicLevel::Low => false,
        }
    }
}

impl From<LogicLevel> for u8 {
    /// Convert a [`LogicLevel`] to 1 (if high) or 0 (if low).
    fn from(value: LogicLevel) -> Self {
        match value {
            LogicLevel::High => 1,
            LogicLevel::Low => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// GPIO pin direction, as held in the GPIO Configuration register.
pub enum GpioDirection {
    /// Configuration bit set.
    Input,
    /// Configuration bit clear.
    Output,
}

impl GpioDirection {
    /// Returns true if the direction is [`GpioDirection::Output`].
    pub fn is_output(self) -> bool {
        matches!(self, GpioDirection::Output)
    }
}

impl From<bool> for GpioDirection {
    fn from(value: bool) -> Self {
        if value { Self::Input } else { Self::Output }
    }
}

impl From<GpioDirection> for bool {
    fn from(value: GpioDirection) -> Self {
        match value {
            GpioDirection::Input => true,
            GpioDirection::Output => false,
        }
    }
}

/// Pin configuration requested through [`Xra1405::set_pin_mode`].
///
/// [`Xra1405::set_pin_mode`]: crate::Xra1405::set_pin_mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Digital output.
    Output,
    /// Digital input. The pull-up is left as it was.
    Input,
    /// Digital input with the internal pull-up resistor enabled.
    InputPullUp,
}

impl PinMode {
    /// The direction this mode puts into the configuration register.
    pub fn direction(self) -> GpioDirection {
        match self {
            PinMode::Output => GpioDirection::Output,
            PinMode::Input | PinMode::InputPullUp => GpioDirection::Input,
        }
    }
}

/// Which input edges raise an interrupt for a pin.
///
/// The device holds this as a pair of bits, one in the Rising Edge Interrupt
/// Enable register and one in the Falling Edge Interrupt Enable register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptMode {
    /// No interrupt for this pin: neither edge is selected.
    ///
    /// [`Xra1405::set_interrupt`] still sets the pin's interrupt-enable bit.
    ///
    /// [`Xra1405::set_interrupt`]: crate::Xra1405::set_interrupt
    Disabled,
    /// Interrupt on a low-to-high transition.
    Rising,
    /// Interrupt on a high-to-low transition.
    Falling,
    /// Interrupt on any transition.
    Both,
}

impl InterruptMode {
    /// The rising-edge bit for this mode.
    pub fn rising_edge(self) -> bool {
        matches!(self, InterruptMode::Rising | InterruptMode::Both)
    }

    /// The falling-edge bit for this mode.
    pub fn falling_edge(self) -> bool {
        matches!(self, InterruptMode::Falling | InterruptMode::Both)
    }

    /// Rebuild the mode from the interrupt-enable bit and the two edge bits.
    ///
    /// A pin whose interrupt-enable bit is clear is [`InterruptMode::Disabled`]
    /// whatever its edge bits say.
    pub fn from_bits(enabled: bool, rising: bool, falling: bool) -> Self {
        match (enabled, rising, falling) {
            (false, _, _) => InterruptMode::Disabled,
            (true, true, true) => InterruptMode::Both,
            (true, true, false) => InterruptMode::Rising,
            (true, false, true) => InterruptMode::Falling,
            (true, false, false) => InterruptMode::Disabled,
        }
    }
}
