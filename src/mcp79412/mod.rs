//! Common device communication and the BCD codec.

use crate::{Error, Mcp79412, DEFAULT_EEPROM_WRITE_RETRIES, RTC_DEVICE_ADDRESS};

mod configuration;
mod datetime;
mod memory;

impl<I2C> Mcp79412<I2C> {
    /// Create a new instance of the driver, taking ownership of the bus handle.
    pub fn new(i2c: I2C) -> Self {
        Mcp79412 {
            i2c,
            eeprom_write_retries: DEFAULT_EEPROM_WRITE_RETRIES,
        }
    }

    /// Destroy the driver instance and return the I²C bus handle.
    pub fn destroy(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Mcp79412<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    pub(crate) fn write_data(&mut self, device: u8, payload: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(device, payload).map_err(Error::Comm)
    }

    pub(crate) fn read_data(
        &mut self,
        device: u8,
        address: u8,
        payload: &mut [u8],
    ) -> Result<(), Error<E>> {
        self.i2c
            .write_read(device, &[address], payload)
            .map_err(Error::Comm)
    }

    pub(crate) fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error<E>> {
        self.write_data(RTC_DEVICE_ADDRESS, &[register, data])
    }

    pub(crate) fn read_register(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut data = [0];
        self.read_data(RTC_DEVICE_ADDRESS, register, &mut data)?;
        Ok(data[0])
    }
}

pub(crate) fn decimal_to_bcd(dec: u8) -> u8 {
    ((dec / 10) << 4) | (dec % 10)
}

pub(crate) fn bcd_to_decimal(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}
