//! Oscillator status, calibration and unique ID.

use crate::{BitFlags, Error, Mcp79412, Register, EEPROM_DEVICE_ADDRESS, UNIQUE_ID_ADDRESS};

impl<I2C> Mcp79412<I2C> {
    /// Set the retry budget for the EEPROM write-completion poll.
    ///
    /// The device does not acknowledge its EEPROM bus address while an
    /// internal write cycle is in progress, so after every EEPROM write the
    /// driver polls until it gets an ACK. Each poll is one short bus
    /// transaction; a write cycle takes a few milliseconds. The default
    /// budget of 100 attempts leaves a generous margin on top of that.
    /// When the budget is exhausted the pending operation fails with
    /// [`Error::WriteTimeout`].
    pub fn set_eeprom_write_retries(&mut self, retries: u8) {
        self.eeprom_write_retries = retries;
    }
}

impl<I2C, E> Mcp79412<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Return whether the oscillator is running (ST bit in the seconds
    /// register is set).
    pub fn oscillator_running(&mut self) -> Result<bool, Error<E>> {
        let seconds = self.read_register(Register::SECONDS)?;
        Ok((seconds & BitFlags::ST) != 0)
    }

    /// Read the calibration (digital trimming) register.
    ///
    /// The register is not two's complement: bit 7 is the sign and bits 0-6
    /// hold the magnitude. The value is converted to a regular signed
    /// integer in [-127, 127].
    pub fn calibration(&mut self) -> Result<i8, Error<E>> {
        let value = self.read_register(Register::CALIBRATION)?;
        if (value & BitFlags::CALIB_SIGN) != 0 {
            Ok(-((value & 0x7F) as i8))
        } else {
            Ok(value as i8)
        }
    }

    /// Write the calibration (digital trimming) register.
    ///
    /// The value must be in [-127, 127]; -128 has no sign-magnitude
    /// representation and is rejected.
    pub fn set_calibration(&mut self, value: i8) -> Result<(), Error<E>> {
        if value == i8::MIN {
            return Err(Error::InvalidInputData);
        }
        let mut raw = value.unsigned_abs();
        if value < 0 {
            raw |= BitFlags::CALIB_SIGN;
        }
        self.write_register(Register::CALIBRATION, raw)
    }

    /// Read the factory-programmed 8-byte unique ID (EUI-48/EUI-64 node
    /// address) from the protected EEPROM block.
    pub fn unique_id(&mut self) -> Result<[u8; 8], Error<E>> {
        let mut id = [0; 8];
        self.read_data(EEPROM_DEVICE_ADDRESS, UNIQUE_ID_ADDRESS, &mut id)?;
        Ok(id)
    }
}
