use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use mcp79412::Mcp79412;

pub const RTC_ADDR: u8 = 0b110_1111;
pub const EEPROM_ADDR: u8 = 0b101_0111;

pub fn new(transactions: &[I2cTrans]) -> Mcp79412<I2cMock> {
    Mcp79412::new(I2cMock::new(transactions))
}

pub fn destroy(rtc: Mcp79412<I2cMock>) {
    rtc.destroy().done();
}
