//! Platform-agnostic Rust driver for the DS1338 real-time clock, based on
//! the [`embedded-hal`](https://crates.io/crates/embedded-hal) traits.
//!
//! This driver allows you to:
//! - Read and set the date and time. See: [`time()`](Ds1338::time).
//! - Read and write the battery-backed NVRAM. See: [`read_ram()`](Ds1338::read_ram).
//! - Enable and disable the square-wave output and select its frequency.
//!   See: [`enable_square_wave()`](Ds1338::enable_square_wave).
//! - Query and clear the oscillator-stop flag.
//!   See: [`has_been_stopped()`](Ds1338::has_been_stopped).

#![deny(unsafe_code)]
#![no_std]

pub use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// All possible errors in this crate
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// I²C bus error
    Comm(E),
    /// NVRAM address and/or length outside of the valid range
    OutOfRange,
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// It was not possible to read a valid date and/or time.
    /// The device is probably missing initialization.
    InvalidDeviceState,
}

/// Square-wave output frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqWFreq {
    /// 1 Hz (default)
    _1Hz,
    /// 4.096 kHz
    _4_096Hz,
    /// 8.192 kHz
    _8_192Hz,
    /// 32.768 kHz
    _32_768Hz,
}

/// Date and time in the clock's own representation: 24-hour form,
/// years counted from 2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    /// Years since 2000 (0-199, covering 2000-2199)
    pub year: u8,
    /// Month (1-12)
    pub month: u8,
    /// Day of the month (1-31)
    pub day: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl DateTime {
    pub fn new(year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// Fixed-width `YYYY-MM-DDTHH:MM:SS` rendering, zero-padded.
impl core::fmt::Display for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            2000 + u16::from(self.year),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

struct Register;

impl Register {
    const SECONDS: u8 = 0x00;
    const MINUTES: u8 = 0x01;
    const HOURS: u8 = 0x02;
    const DOM: u8 = 0x04;
    const MONTH: u8 = 0x05;
    const YEAR: u8 = 0x06;
    const CONTROL: u8 = 0x07;
    const RAM_BEGIN: u8 = 0x08;
    const RAM_END: u8 = 0x3F;
}

struct BitFlags;

impl BitFlags {
    const H24_H12: u8 = 0b0100_0000;
    const AM_PM: u8 = 0b0010_0000;
    const CENTURY: u8 = 0b1000_0000;
    const SQWE: u8 = 0b0001_0000;
    const RS_MASK: u8 = 0b0000_0011;
    const OSC_STOP: u8 = 0b0010_0000;
    const EOSC: u8 = 0b1000_0000;
}

const DEVICE_ADDRESS: u8 = 0b110_1000;

/// DS1338 RTC driver
#[derive(Debug)]
pub struct Ds1338<I2C> {
    i2c: I2C,
    address: u8,
}

mod ds1338;
