//! Access to the battery-backed SRAM window and the EEPROM block.
//!
//! SRAM lives inside the RTC register address space (0x20..0x5F); the EEPROM
//! answers on its own bus address. EEPROM writes trigger an internal write
//! cycle during which the device does not acknowledge, so every write is
//! followed by an ACK poll with a bounded retry budget.

use crate::{
    Error, Mcp79412, EEPROM_DEVICE_ADDRESS, EEPROM_PAGE_SIZE, EEPROM_SIZE, MAX_TRANSFER_SIZE,
    RTC_DEVICE_ADDRESS, SRAM_BASE_ADDRESS, SRAM_SIZE,
};

impl<I2C, E> Mcp79412<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Write multiple bytes at an absolute RTC-space address.
    ///
    /// The address is not validated; the transfer length must be in [1, 31].
    pub fn ram_write(&mut self, address: u8, data: &[u8]) -> Result<(), Error<E>> {
        if data.is_empty() || data.len() > MAX_TRANSFER_SIZE as usize {
            return Err(Error::InvalidInputData);
        }
        let mut payload = [0; 1 + MAX_TRANSFER_SIZE as usize];
        payload[0] = address;
        payload[1..=data.len()].copy_from_slice(data);
        self.write_data(RTC_DEVICE_ADDRESS, &payload[..=data.len()])
    }

    /// Read multiple bytes from an absolute RTC-space address.
    ///
    /// The address is not validated; the transfer length must be in [1, 31].
    pub fn ram_read(&mut self, address: u8, data: &mut [u8]) -> Result<(), Error<E>> {
        if data.is_empty() || data.len() > MAX_TRANSFER_SIZE as usize {
            return Err(Error::InvalidInputData);
        }
        self.read_data(RTC_DEVICE_ADDRESS, address, data)
    }

    /// Write a single byte to SRAM. The address wraps modulo 64.
    pub fn sram_write_byte(&mut self, address: u8, value: u8) -> Result<(), Error<E>> {
        self.ram_write(sram_address(address), &[value])
    }

    /// Read a single byte from SRAM. The address wraps modulo 64.
    pub fn sram_read_byte(&mut self, address: u8) -> Result<u8, Error<E>> {
        let mut data = [0];
        self.ram_read(sram_address(address), &mut data)?;
        Ok(data[0])
    }

    /// Write multiple bytes to SRAM.
    ///
    /// The transfer length must be in [1, 31] and `address + data.len()` must
    /// not reach past the end of the 64-byte window.
    pub fn sram_write(&mut self, address: u8, data: &[u8]) -> Result<(), Error<E>> {
        if data.is_empty()
            || data.len() > MAX_TRANSFER_SIZE as usize
            || usize::from(address) + data.len() > SRAM_SIZE as usize
        {
            return Err(Error::InvalidInputData);
        }
        self.ram_write(sram_address(address), data)
    }

    /// Read multiple bytes from SRAM.
    ///
    /// The transfer length must be in [1, 31] and `address + data.len()` must
    /// not reach past the end of the 64-byte window.
    pub fn sram_read(&mut self, address: u8, data: &mut [u8]) -> Result<(), Error<E>> {
        if data.is_empty()
            || data.len() > MAX_TRANSFER_SIZE as usize
            || usize::from(address) + data.len() > SRAM_SIZE as usize
        {
            return Err(Error::InvalidInputData);
        }
        self.ram_read(sram_address(address), data)
    }

    /// Write a single byte to EEPROM, then wait for the write cycle to
    /// complete. The address is constrained to [0, 127].
    ///
    /// A write cannot start mid-page, so this does not go through the page
    /// write path.
    pub fn eeprom_write_byte(&mut self, address: u8, value: u8) -> Result<(), Error<E>> {
        self.write_data(
            EEPROM_DEVICE_ADDRESS,
            &[address & (EEPROM_SIZE - 1), value],
        )?;
        self.eeprom_wait()?;
        Ok(())
    }

    /// Write up to one 8-byte page to EEPROM, then wait for the write cycle
    /// to complete.
    ///
    /// The transfer length must be in [1, 8]. `address` should be a page
    /// start (0, 8, ..., 120); other values are rounded down to the start of
    /// the containing page, so the bytes may land lower than the literal
    /// address given.
    pub fn eeprom_write_page(&mut self, address: u8, data: &[u8]) -> Result<(), Error<E>> {
        if data.is_empty() || data.len() > EEPROM_PAGE_SIZE as usize {
            return Err(Error::InvalidInputData);
        }
        let mut payload = [0; 1 + EEPROM_PAGE_SIZE as usize];
        payload[0] = address & !(EEPROM_PAGE_SIZE - 1) & (EEPROM_SIZE - 1);
        payload[1..=data.len()].copy_from_slice(data);
        self.write_data(EEPROM_DEVICE_ADDRESS, &payload[..=data.len()])?;
        self.eeprom_wait()?;
        Ok(())
    }

    /// Read a single byte from EEPROM. The address is constrained to
    /// [0, 127].
    pub fn eeprom_read_byte(&mut self, address: u8) -> Result<u8, Error<E>> {
        let mut data = [0];
        self.read_data(EEPROM_DEVICE_ADDRESS, address & (EEPROM_SIZE - 1), &mut data)?;
        Ok(data[0])
    }

    /// Read multiple bytes from EEPROM.
    ///
    /// The transfer length must be in [1, 31] and `address + data.len()` must
    /// not reach past the end of the 128-byte array.
    pub fn eeprom_read(&mut self, address: u8, data: &mut [u8]) -> Result<(), Error<E>> {
        if data.is_empty()
            || data.len() > MAX_TRANSFER_SIZE as usize
            || usize::from(address) + data.len() > EEPROM_SIZE as usize
        {
            return Err(Error::InvalidInputData);
        }
        self.read_data(EEPROM_DEVICE_ADDRESS, address & (EEPROM_SIZE - 1), data)
    }

    /// Poll the EEPROM until a pending write cycle completes.
    ///
    /// The device NACKs its EEPROM address while busy. Returns the number of
    /// attempts needed, or [`Error::WriteTimeout`] once the retry budget is
    /// exhausted (see [`Mcp79412::set_eeprom_write_retries`]).
    pub fn eeprom_wait(&mut self) -> Result<u8, Error<E>> {
        for attempt in 1..=self.eeprom_write_retries {
            if self.write_data(EEPROM_DEVICE_ADDRESS, &[0]).is_ok() {
                return Ok(attempt);
            }
        }
        Err(Error::WriteTimeout)
    }
}

fn sram_address(address: u8) -> u8 {
    (address & (SRAM_SIZE - 1)) + SRAM_BASE_ADDRESS
}
