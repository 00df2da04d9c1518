//! Date and time access.
//!
//! The MCP79412 multiplexes control and status bits into the timekeeping
//! registers: the oscillator start bit lives in the seconds register, the
//! 12/24-hour mode select in the hours register, and the oscillator/battery
//! status plus the battery backup enable in the weekday register. This module
//! masks those on read and re-asserts the relevant ones on write. The clock
//! is always operated in 24-hour mode.

use super::{bcd_to_decimal, decimal_to_bcd};
use crate::{
    BitFlags, Datelike, Error, Hours, Mcp79412, NaiveDate, NaiveDateTime, NaiveTime, Register,
    Timelike, RTC_DEVICE_ADDRESS,
};
use rtcc::{DateTimeAccess, Rtcc};

impl<I2C, E> DateTimeAccess for Mcp79412<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = Error<E>;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        let mut data = [0; 7];
        self.read_data(RTC_DEVICE_ADDRESS, Register::SECONDS, &mut data)?;
        let second = bcd_to_decimal(data[0] & !BitFlags::ST);
        let minute = bcd_to_decimal(data[1]);
        let hour = bcd_to_decimal(data[2] & !BitFlags::H24_H12);
        let day = bcd_to_decimal(data[4]);
        let month = bcd_to_decimal(data[5] & !BitFlags::LPYR);
        let year = 2000 + i32::from(bcd_to_decimal(data[6]));
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .and_then(|date| {
                date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            })
            .ok_or(Error::InvalidDeviceState)
    }

    /// Set the date and time.
    ///
    /// The transfer is split in two: the first transaction stops the
    /// oscillator by writing a cleared seconds register and loads the
    /// remaining timekeeping registers, the second one writes the seconds
    /// value together with the start bit so the clock begins ticking exactly
    /// on the requested second. Battery backup is (re-)enabled as part of the
    /// weekday write.
    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        if datetime.year() < 2000 || datetime.year() > 2099 {
            return Err(Error::InvalidInputData);
        }
        let payload = [
            Register::SECONDS,
            0,
            decimal_to_bcd(datetime.minute() as u8),
            decimal_to_bcd(datetime.hour() as u8),
            decimal_to_bcd(datetime.weekday().number_from_sunday() as u8) | BitFlags::VBATEN,
            decimal_to_bcd(datetime.day() as u8),
            decimal_to_bcd(datetime.month() as u8),
            decimal_to_bcd((datetime.year() - 2000) as u8),
        ];
        self.write_data(RTC_DEVICE_ADDRESS, &payload)?;
        self.write_data(
            RTC_DEVICE_ADDRESS,
            &[
                Register::SECONDS,
                decimal_to_bcd(datetime.second() as u8) | BitFlags::ST,
            ],
        )
    }
}

impl<I2C, E> Rtcc for Mcp79412<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    fn seconds(&mut self) -> Result<u8, Self::Error> {
        let data = self.read_register(Register::SECONDS)?;
        Ok(bcd_to_decimal(data & !BitFlags::ST))
    }

    fn minutes(&mut self) -> Result<u8, Self::Error> {
        let data = self.read_register(Register::MINUTES)?;
        Ok(bcd_to_decimal(data))
    }

    fn hours(&mut self) -> Result<Hours, Self::Error> {
        let data = self.read_register(Register::HOURS)?;
        Ok(Hours::H24(bcd_to_decimal(data & !BitFlags::H24_H12)))
    }

    fn time(&mut self) -> Result<NaiveTime, Self::Error> {
        let mut data = [0; 3];
        self.read_data(RTC_DEVICE_ADDRESS, Register::SECONDS, &mut data)?;
        let second = bcd_to_decimal(data[0] & !BitFlags::ST);
        let minute = bcd_to_decimal(data[1]);
        let hour = bcd_to_decimal(data[2] & !BitFlags::H24_H12);
        NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            .ok_or(Error::InvalidDeviceState)
    }

    fn weekday(&mut self) -> Result<u8, Self::Error> {
        let data = self.read_register(Register::WEEKDAY)?;
        Ok(bcd_to_decimal(
            data & !(BitFlags::OSCON | BitFlags::VBAT | BitFlags::VBATEN),
        ))
    }

    fn day(&mut self) -> Result<u8, Self::Error> {
        let data = self.read_register(Register::DAY)?;
        Ok(bcd_to_decimal(data))
    }

    fn month(&mut self) -> Result<u8, Self::Error> {
        let data = self.read_register(Register::MONTH)?;
        Ok(bcd_to_decimal(data & !BitFlags::LPYR))
    }

    fn year(&mut self) -> Result<u16, Self::Error> {
        let data = self.read_register(Register::YEAR)?;
        Ok(2000 + u16::from(bcd_to_decimal(data)))
    }

    fn date(&mut self) -> Result<NaiveDate, Self::Error> {
        let mut data = [0; 3];
        self.read_data(RTC_DEVICE_ADDRESS, Register::DAY, &mut data)?;
        let day = bcd_to_decimal(data[0]);
        let month = bcd_to_decimal(data[1] & !BitFlags::LPYR);
        let year = 2000 + i32::from(bcd_to_decimal(data[2]));
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .ok_or(Error::InvalidDeviceState)
    }

    /// Set the seconds, keeping the oscillator start bit as it is.
    fn set_seconds(&mut self, seconds: u8) -> Result<(), Self::Error> {
        if seconds > 59 {
            return Err(Error::InvalidInputData);
        }
        let start = self.read_register(Register::SECONDS)? & BitFlags::ST;
        self.write_register(Register::SECONDS, decimal_to_bcd(seconds) | start)
    }

    fn set_minutes(&mut self, minutes: u8) -> Result<(), Self::Error> {
        if minutes > 59 {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::MINUTES, decimal_to_bcd(minutes))
    }

    /// Set the hours. The value is always stored in 24-hour mode.
    fn set_hours(&mut self, hours: Hours) -> Result<(), Self::Error> {
        let value = hours_as_h24(hours)?;
        self.write_register(Register::HOURS, decimal_to_bcd(value))
    }

    fn set_time(&mut self, time: &NaiveTime) -> Result<(), Self::Error> {
        self.set_hours(Hours::H24(time.hour() as u8))?;
        self.set_minutes(time.minute() as u8)?;
        self.set_seconds(time.second() as u8)
    }

    /// Set the weekday [1-7]. Battery backup is (re-)enabled by this write.
    fn set_weekday(&mut self, weekday: u8) -> Result<(), Self::Error> {
        if !(1..=7).contains(&weekday) {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::WEEKDAY, decimal_to_bcd(weekday) | BitFlags::VBATEN)
    }

    fn set_day(&mut self, day: u8) -> Result<(), Self::Error> {
        if !(1..=31).contains(&day) {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::DAY, decimal_to_bcd(day))
    }

    fn set_month(&mut self, month: u8) -> Result<(), Self::Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::MONTH, decimal_to_bcd(month))
    }

    /// Set the year [2000-2099].
    fn set_year(&mut self, year: u16) -> Result<(), Self::Error> {
        if !(2000..=2099).contains(&year) {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::YEAR, decimal_to_bcd((year - 2000) as u8))
    }

    fn set_date(&mut self, date: &NaiveDate) -> Result<(), Self::Error> {
        if date.year() < 2000 || date.year() > 2099 {
            return Err(Error::InvalidInputData);
        }
        self.set_year(date.year() as u16)?;
        self.set_month(date.month() as u8)?;
        self.set_day(date.day() as u8)
    }
}

fn hours_as_h24<E>(hours: Hours) -> Result<u8, Error<E>> {
    match hours {
        Hours::H24(h) if h < 24 => Ok(h),
        Hours::AM(h) if (1..=12).contains(&h) => Ok(h % 12),
        Hours::PM(h) if (1..=12).contains(&h) => Ok(h % 12 + 12),
        _ => Err(Error::InvalidInputData),
    }
}
