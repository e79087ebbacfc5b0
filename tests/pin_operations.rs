//! Pin configuration and digital IO against the simulated register file.

mod common;

use common::*;
use xra1405_hal::gpio::{LogicLevel, PinMode, PortValues};
use xra1405_hal::registers::Register;
use xra1405_hal::{Error, Xra1405};

type Driver = Xra1405<SimulatedXra1405>;

/// Bank offset and bit of a pin.
fn bank_and_bit(pin: u8) -> (usize, u8) {
    ((pin / 8) as usize, pin % 8)
}

#[test]
fn single_pin_operations_only_touch_their_bit() {
    // (register for the low bank, operation setting the bit to `value`)
    type Op = fn(&Driver, u8, bool) -> Result<(), Error<BusFault>>;
    let operations: [(usize, Op); 6] = [
        (OCR1, |d: &Driver, pin: u8, v: bool| d.digital_write(pin, v.into())),
        (PIR1, |d: &Driver, pin: u8, v: bool| d.set_polarity_inversion(pin, v)),
        (GCR1, |d: &Driver, pin: u8, v: bool| {
            let mode = if v { PinMode::Input } else { PinMode::Output };
            d.set_pin_mode(pin, mode)
        }),
        (PUR1, |d: &Driver, pin: u8, v: bool| d.set_pull_up(pin, v)),
        (TSCR1, |d: &Driver, pin: u8, v: bool| d.set_three_state(pin, v)),
        (IFR1, |d: &Driver, pin: u8, v: bool| d.set_input_filter(pin, v)),
    ];

    for (low_register, operation) in operations {
        for pin in 0..16 {
            for (initial, value) in [
                (0b1010_0101, true),
                (0b1010_0101, false),
                (0xFF, false),
                (0x00, true),
            ] {
                let device = SimulatedXra1405::new()
                    .with_register(low_register, initial)
                    .with_register(low_register + 1, initial);
                let driver = Xra1405::new(device);

                operation(&driver, pin, value).unwrap();

                let device = driver.release();
                let (bank, bit) = bank_and_bit(pin);
                let expected = if value {
                    initial | (1 << bit)
                } else {
                    initial & !(1 << bit)
                };
                assert_eq!(
                    device.registers[low_register + bank],
                    expected,
                    "register {low_register:#04x} pin {pin} initial {initial:#010b} value {value}"
                );
                assert_eq!(
                    device.registers[low_register + (1 - bank)],
                    initial,
                    "other bank changed for pin {pin}"
                );
            }
        }
    }
}

#[test]
fn every_mutation_is_read_then_write_of_the_same_register() {
    let driver = Xra1405::new(SimulatedXra1405::new());
    driver.set_pull_up(13, true).unwrap();

    let device = driver.release();
    assert_eq!(
        device.accesses,
        [Access::Read(PUR2), Access::Write(PUR2, 0b0010_0000)]
    );
}

#[test]
fn output_then_input_restores_configuration_bit() {
    let driver = Xra1405::new(SimulatedXra1405::new());

    driver.set_pin_mode(9, PinMode::Output).unwrap();
    assert_eq!(driver.read_register(Register::GCR2).unwrap(), 0b1111_1101);
    assert_eq!(driver.pin_mode(9).unwrap(), PinMode::Output);

    driver.set_pin_mode(9, PinMode::Input).unwrap();
    assert_eq!(driver.read_register(Register::GCR2).unwrap(), 0xFF);
    assert_eq!(driver.pin_mode(9).unwrap(), PinMode::Input);
}

#[test]
fn input_pull_up_sets_configuration_and_pull_up() {
    let device = SimulatedXra1405::new().with_register(GCR2, 0x00);
    let driver = Xra1405::new(device);

    driver.set_pin_mode(10, PinMode::InputPullUp).unwrap();
    assert_eq!(driver.pin_mode(10).unwrap(), PinMode::InputPullUp);

    let device = driver.release();
    assert_eq!(device.registers[GCR2], 0b0000_0100);
    assert_eq!(device.registers[PUR2], 0b0000_0100);
    assert_eq!(device.registers[PUR1], 0x00);
    assert_eq!(
        device.writes()[..2],
        [(GCR2, 0b0000_0100), (PUR2, 0b0000_0100)]
    );
}

#[test]
fn plain_input_keeps_an_enabled_pull_up() {
    let driver = Xra1405::new(SimulatedXra1405::new());

    driver.set_pin_mode(2, PinMode::InputPullUp).unwrap();
    driver.set_pin_mode(2, PinMode::Input).unwrap();
    assert_eq!(driver.pin_mode(2).unwrap(), PinMode::InputPullUp);

    driver.set_pull_up(2, false).unwrap();
    assert_eq!(driver.pin_mode(2).unwrap(), PinMode::Input);
}

#[test]
fn output_mode_does_not_touch_pull_up() {
    let driver = Xra1405::new(SimulatedXra1405::new());
    driver.set_pin_mode(4, PinMode::Output).unwrap();

    let device = driver.release();
    assert_eq!(device.writes(), [(GCR1, 0b1110_1111)]);
}

#[test]
fn configure_write_and_read_back_pin_three() {
    let device = SimulatedXra1405::new()
        .with_register(GCR1, 0xFF)
        .with_register(OCR1, 0x00);
    let driver = Xra1405::new(device);

    driver.set_pin_mode(3, PinMode::Output).unwrap();
    driver.digital_write(3, LogicLevel::High).unwrap();
    assert_eq!(driver.digital_read(3).unwrap(), LogicLevel::High);

    let device = driver.release();
    assert_eq!(device.registers[GCR1], 0b1111_0111);
    assert_eq!(device.registers[OCR1], 0b0000_1000);
    assert_eq!(device.registers[GCR2], 0xFF);
    assert_eq!(device.registers[OCR2], 0x00);
}

#[test]
fn digital_read_reports_inputs_and_inversion() {
    let mut device = SimulatedXra1405::new();
    device.external_levels = 0b1000_0000_0000_0001;
    let driver = Xra1405::new(device);

    assert_eq!(driver.digital_read(0).unwrap(), LogicLevel::High);
    assert_eq!(driver.digital_read(1).unwrap(), LogicLevel::Low);
    assert_eq!(driver.digital_read(15).unwrap(), LogicLevel::High);

    driver.set_polarity_inversion(15, true).unwrap();
    assert_eq!(driver.digital_read(15).unwrap(), LogicLevel::Low);
}

#[test]
fn output_level_reads_the_output_latch() {
    let device = SimulatedXra1405::new().with_register(OCR2, 0b0100_0000);
    let driver = Xra1405::new(device);

    assert_eq!(driver.output_level(14).unwrap(), LogicLevel::High);
    assert_eq!(driver.output_level(13).unwrap(), LogicLevel::Low);
}

#[test]
fn port_read_and_write() {
    let mut device = SimulatedXra1405::new().with_register(GCR2, 0x00);
    device.external_levels = 0x00A5;
    let driver = Xra1405::new(device);

    driver
        .write_port(PortValues::from_bits(0x3C00))
        .unwrap();
    assert_eq!(driver.read_port().unwrap().bits(), 0x3CA5);

    let device = driver.release();
    assert_eq!(device.writes(), [(OCR1, 0x00), (OCR2, 0x3C)]);
}

#[test]
fn pins_above_fifteen_are_rejected_without_bus_traffic() {
    let driver = Xra1405::new(SimulatedXra1405::new());

    assert_eq!(
        driver.set_pin_mode(16, PinMode::Output),
        Err(Error::InvalidPin(16))
    );
    assert_eq!(
        driver.digital_write(200, LogicLevel::High),
        Err(Error::InvalidPin(200))
    );
    assert_eq!(driver.digital_read(16), Err(Error::InvalidPin(16)));
    assert_eq!(driver.set_pull_up(255, true), Err(Error::InvalidPin(255)));

    assert!(driver.release().accesses.is_empty());
}

#[test]
fn bus_fault_on_read_leaves_register_untouched() {
    let mut device = SimulatedXra1405::new();
    device.fail_transaction = Some(0);
    let driver = Xra1405::new(device);

    assert_eq!(
        driver.set_pin_mode(1, PinMode::Output),
        Err(Error::Spi(BusFault))
    );

    let device = driver.release();
    assert_eq!(device.registers[GCR1], 0xFF);
    assert!(device.accesses.is_empty());
}

#[test]
fn bus_fault_on_write_is_reported() {
    let mut device = SimulatedXra1405::new();
    device.fail_transaction = Some(1);
    let driver = Xra1405::new(device);

    assert_eq!(
        driver.digital_write(5, LogicLevel::High),
        Err(Error::Spi(BusFault))
    );

    let device = driver.release();
    assert_eq!(device.registers[OCR1], 0x00);
    assert_eq!(device.accesses, [Access::Read(OCR1)]);
}

#[test]
fn pull_up_step_failure_stops_set_pin_mode() {
    let mut device = SimulatedXra1405::new().with_register(GCR1, 0x00);
    // Transactions: GCR read, GCR write, PUR read.
    device.fail_transaction = Some(2);
    let driver = Xra1405::new(device);

    assert_eq!(
        driver.set_pin_mode(6, PinMode::InputPullUp),
        Err(Error::Spi(BusFault))
    );

    let device = driver.release();
    assert_eq!(device.registers[GCR1], 0b0100_0000);
    assert_eq!(device.registers[PUR1], 0x00);
}
