//! Date and time access

use crate::{BitFlags, DateTime, Ds1338, Error, Register};
use embedded_hal::i2c::I2c;
use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, Timelike};

impl<I2C, E> Ds1338<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Read the date and time.
    ///
    /// The hour is returned in 24-hour form, also when the device hour
    /// register happens to be configured for 12-hour mode.
    pub fn time(&mut self) -> Result<DateTime, Error<E>> {
        let mut data = [0; 7];
        self.read_data(Register::SECONDS, &mut data)?;
        let century = if data[Register::MONTH as usize] & BitFlags::CENTURY != 0 {
            100
        } else {
            0
        };
        Ok(DateTime {
            second: packed_bcd_to_decimal(data[Register::SECONDS as usize]),
            minute: packed_bcd_to_decimal(data[Register::MINUTES as usize]),
            hour: hour_from_register(data[Register::HOURS as usize]),
            day: packed_bcd_to_decimal(data[Register::DOM as usize]),
            month: packed_bcd_to_decimal(data[Register::MONTH as usize] & 0x1F),
            year: century + packed_bcd_to_decimal(data[Register::YEAR as usize]),
        })
    }

    /// Set the date and time.
    ///
    /// The hour is always stored in 24-hour form; the device is left in
    /// 24-hour mode. Returns `Error::InvalidInputData` if any field is out
    /// of range.
    pub fn set_time(&mut self, datetime: &DateTime) -> Result<(), Error<E>> {
        if datetime.year > 199
            || datetime.month < 1
            || datetime.month > 12
            || datetime.day < 1
            || datetime.day > 31
            || datetime.hour > 23
            || datetime.minute > 59
            || datetime.second > 59
        {
            return Err(Error::InvalidInputData);
        }
        let century = if datetime.year > 99 {
            BitFlags::CENTURY
        } else {
            0
        };
        let payload = [
            Register::SECONDS,
            decimal_to_packed_bcd(datetime.second),
            decimal_to_packed_bcd(datetime.minute),
            decimal_to_packed_bcd(datetime.hour),
            1, // day of week, unused by this driver
            decimal_to_packed_bcd(datetime.day),
            century | decimal_to_packed_bcd(datetime.month),
            decimal_to_packed_bcd(datetime.year % 100),
        ];
        self.write_data(&payload)
    }
}

impl<I2C, E> DateTimeAccess for Ds1338<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = Error<E>;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        let time = self.time()?;
        NaiveDate::from_ymd_opt(
            2000 + i32::from(time.year),
            time.month.into(),
            time.day.into(),
        )
        .and_then(|date| date.and_hms_opt(time.hour.into(), time.minute.into(), time.second.into()))
        .ok_or(Error::InvalidDeviceState)
    }

    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        if datetime.year() < 2000 || datetime.year() > 2199 {
            return Err(Error::InvalidInputData);
        }
        self.set_time(&DateTime {
            year: (datetime.year() - 2000) as u8,
            month: datetime.month() as u8,
            day: datetime.day() as u8,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second() as u8,
        })
    }
}

fn hour_from_register(hours: u8) -> u8 {
    if hours & BitFlags::H24_H12 != 0 {
        // 12-hour mode: BCD 1-12 in the low five bits plus an AM/PM flag
        let hour = packed_bcd_to_decimal(hours & 0x1F) % 12;
        if hours & BitFlags::AM_PM != 0 {
            hour + 12
        } else {
            hour
        }
    } else {
        packed_bcd_to_decimal(hours)
    }
}

fn packed_bcd_to_decimal(input: u8) -> u8 {
    (input >> 4) * 10 + (input & 0x0F)
}

fn decimal_to_packed_bcd(input: u8) -> u8 {
    (((input / 10) & 0x0F) << 4) | (input % 10)
}
