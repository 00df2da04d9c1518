//! Platform-agnostic Rust driver for the Microchip MCP79412 real-time clock,
//! based on the [`embedded-hal`](https://crates.io/crates/embedded-hal) traits.
//!
//! The MCP79412 is an I2C RTC with battery backup, 64 bytes of battery-backed
//! SRAM, 128 bytes of EEPROM and a factory-programmed 8-byte unique ID. The
//! chip answers on two bus addresses: one for the clock register map and SRAM,
//! one for the EEPROM block.
//!
//! This driver provides:
//!
//! - Date and time access through the [`rtcc`](https://crates.io/crates/rtcc)
//!   traits ([`DateTimeAccess`] and [`Rtcc`]), always in 24-hour mode.
//! - Oscillator status and the digital trimming (calibration) register.
//! - Byte and block access to the battery-backed SRAM window, with silent
//!   modulo-64 address wrapping on the single-byte operations.
//! - Byte, page and block access to the EEPROM, including the post-write
//!   busy poll, plus the read-only unique ID.

#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

pub use rtcc::{
    DateTimeAccess, Datelike, Hours, NaiveDate, NaiveDateTime, NaiveTime, Rtcc, Timelike,
};

/// All possible errors in this crate
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// I²C bus error
    Comm(E),
    /// Invalid input data provided
    ///
    /// An address, transfer length or value was outside the range the device
    /// accepts. No bus traffic is generated in this case.
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// It was not possible to read a valid date and/or time.
    /// The device is probably missing initialization.
    InvalidDeviceState,
    /// The EEPROM did not acknowledge within the configured retry budget
    /// after a write. See [`Mcp79412::set_eeprom_write_retries`].
    WriteTimeout,
}

struct Register;

impl Register {
    const SECONDS: u8 = 0x00;
    const MINUTES: u8 = 0x01;
    const HOURS: u8 = 0x02;
    const WEEKDAY: u8 = 0x03;
    const DAY: u8 = 0x04;
    const MONTH: u8 = 0x05;
    const YEAR: u8 = 0x06;
    const CALIBRATION: u8 = 0x08;
}

struct BitFlags;

impl BitFlags {
    /// Oscillator start (seconds register)
    const ST: u8 = 0b1000_0000;
    /// 12/24-hour mode select (hours register)
    const H24_H12: u8 = 0b0100_0000;
    /// Oscillator running status (weekday register)
    const OSCON: u8 = 0b0010_0000;
    /// Power failed on battery status (weekday register)
    const VBAT: u8 = 0b0001_0000;
    /// Battery backup enable (weekday register)
    const VBATEN: u8 = 0b0000_1000;
    /// Leap year status (month register)
    const LPYR: u8 = 0b0010_0000;
    /// Sign bit of the sign-magnitude calibration register
    const CALIB_SIGN: u8 = 0b1000_0000;
}

const RTC_DEVICE_ADDRESS: u8 = 0b110_1111;
const EEPROM_DEVICE_ADDRESS: u8 = 0b101_0111;

const SRAM_BASE_ADDRESS: u8 = 0x20;
const SRAM_SIZE: u8 = 64;
const EEPROM_SIZE: u8 = 128;
const EEPROM_PAGE_SIZE: u8 = 8;
const UNIQUE_ID_ADDRESS: u8 = 0xF0;

/// Largest number of data bytes moved in a single transaction.
const MAX_TRANSFER_SIZE: u8 = 31;

const DEFAULT_EEPROM_WRITE_RETRIES: u8 = 100;

/// MCP79412 RTC driver
#[derive(Debug)]
pub struct Mcp79412<I2C> {
    i2c: I2C,
    eeprom_write_retries: u8,
}

mod mcp79412;
