use embedded_hal_mock::eh1::i2c::Transaction as I2cTrans;
use mcp79412::{DateTimeAccess, Error, Hours, NaiveDate, Rtcc};

mod common;
use crate::common::{destroy, new, RTC_ADDR};

// Bits multiplexed into the timekeeping registers.
const ST: u8 = 0b1000_0000;
const H24_H12: u8 = 0b0100_0000;
const OSCON: u8 = 0b0010_0000;
const VBAT: u8 = 0b0001_0000;
const VBATEN: u8 = 0b0000_1000;
const LPYR: u8 = 0b0010_0000;

#[test]
fn can_read_datetime_masking_control_bits() {
    // 2026-08-26 (a Wednesday) 23:45:25, with every status/control bit set
    // in the raw registers.
    let transactions = [I2cTrans::write_read(
        RTC_ADDR,
        vec![0x00],
        vec![
            0x25 | ST,
            0x45,
            0x23 | H24_H12,
            0x04 | OSCON | VBAT | VBATEN,
            0x26,
            0x08 | LPYR,
            0x26,
        ],
    )];
    let mut rtc = new(&transactions);
    let datetime = rtc.datetime().unwrap();
    assert_eq!(
        datetime,
        NaiveDate::from_ymd_opt(2026, 8, 26)
            .unwrap()
            .and_hms_opt(23, 45, 25)
            .unwrap()
    );
    destroy(rtc);
}

#[test]
fn read_datetime_with_invalid_month_returns_error() {
    let transactions = [I2cTrans::write_read(
        RTC_ADDR,
        vec![0x00],
        vec![0x00, 0x00, 0x00, 0x01, 0x01, 0x13, 0x26],
    )];
    let mut rtc = new(&transactions);
    assert_eq!(rtc.datetime(), Err(Error::InvalidDeviceState));
    destroy(rtc);
}

#[test]
fn set_datetime_stops_then_restarts_oscillator() {
    // The bulk write must clear the seconds register (oscillator stopped)
    // and a second transaction must write the BCD seconds with the start
    // bit set.
    let datetime = NaiveDate::from_ymd_opt(2026, 8, 26)
        .unwrap()
        .and_hms_opt(23, 45, 25)
        .unwrap();
    let transactions = [
        I2cTrans::write(
            RTC_ADDR,
            vec![
                0x00,
                0x00,
                0x45,
                0x23,
                0x04 | VBATEN, // Wednesday, battery backup enabled
                0x26,
                0x08,
                0x26,
            ],
        ),
        I2cTrans::write(RTC_ADDR, vec![0x00, 0x25 | ST]),
    ];
    let mut rtc = new(&transactions);
    rtc.set_datetime(&datetime).unwrap();
    destroy(rtc);
}

#[test]
fn set_datetime_rejects_year_outside_device_range() {
    let datetime = NaiveDate::from_ymd_opt(1999, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let mut rtc = new(&[]);
    assert_eq!(rtc.set_datetime(&datetime), Err(Error::InvalidInputData));
    destroy(rtc);
}

#[test]
fn weekday_is_masked_on_read() {
    let transactions = [I2cTrans::write_read(
        RTC_ADDR,
        vec![0x03],
        vec![0x03 | OSCON | VBAT | VBATEN],
    )];
    let mut rtc = new(&transactions);
    assert_eq!(rtc.weekday().unwrap(), 3);
    destroy(rtc);
}

#[test]
fn set_weekday_always_enables_battery_backup() {
    let transactions = [I2cTrans::write(RTC_ADDR, vec![0x03, 0x03 | VBATEN])];
    let mut rtc = new(&transactions);
    rtc.set_weekday(3).unwrap();
    destroy(rtc);
}

#[test]
fn hours_are_always_read_as_h24() {
    let transactions = [I2cTrans::write_read(
        RTC_ADDR,
        vec![0x02],
        vec![0x23 | H24_H12],
    )];
    let mut rtc = new(&transactions);
    assert_eq!(rtc.hours().unwrap(), Hours::H24(23));
    destroy(rtc);
}

#[test]
fn set_hours_converts_pm_to_h24() {
    let transactions = [I2cTrans::write(RTC_ADDR, vec![0x02, 0x15])];
    let mut rtc = new(&transactions);
    rtc.set_hours(Hours::PM(3)).unwrap();
    destroy(rtc);
}

#[test]
fn set_seconds_preserves_oscillator_start_bit() {
    let transactions = [
        I2cTrans::write_read(RTC_ADDR, vec![0x00], vec![0x17 | ST]),
        I2cTrans::write(RTC_ADDR, vec![0x00, 0x12 | ST]),
    ];
    let mut rtc = new(&transactions);
    rtc.set_seconds(12).unwrap();
    destroy(rtc);
}

#[test]
fn can_read_date() {
    let transactions = [I2cTrans::write_read(
        RTC_ADDR,
        vec![0x04],
        vec![0x26, 0x08 | LPYR, 0x26],
    )];
    let mut rtc = new(&transactions);
    assert_eq!(
        rtc.date().unwrap(),
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    );
    destroy(rtc);
}

#[test]
fn can_read_year() {
    let transactions = [I2cTrans::write_read(RTC_ADDR, vec![0x06], vec![0x26])];
    let mut rtc = new(&transactions);
    assert_eq!(rtc.year().unwrap(), 2026);
    destroy(rtc);
}

#[test]
fn set_month_rejects_out_of_range() {
    let mut rtc = new(&[]);
    assert_eq!(rtc.set_month(13), Err(Error::InvalidInputData));
    destroy(rtc);
}
