//! Common device communication

use crate::{Ds1338, Error, DEVICE_ADDRESS};
use embedded_hal::i2c::I2c;

mod configuration;
mod datetime;
mod nvram;
mod status;

impl<I2C, E> Ds1338<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Create a new instance of the device using the default bus address 0x68.
    pub fn new(i2c: I2C) -> Self {
        Ds1338 {
            i2c,
            address: DEVICE_ADDRESS,
        }
    }

    /// Create a new instance of the device using an alternate bus address.
    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Ds1338 { i2c, address }
    }

    /// Destroy driver instance, return I²C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub(crate) fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error<E>> {
        let payload: [u8; 2] = [register, data];
        self.i2c.write(self.address, &payload).map_err(Error::Comm)
    }

    pub(crate) fn read_register(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut data = [0];
        self.i2c
            .write_read(self.address, &[register], &mut data)
            .map_err(Error::Comm)?;
        Ok(data[0])
    }

    pub(crate) fn write_data(&mut self, payload: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(self.address, payload).map_err(Error::Comm)
    }

    pub(crate) fn read_data(&mut self, register: u8, payload: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(self.address, &[register], payload)
            .map_err(Error::Comm)
    }
}
