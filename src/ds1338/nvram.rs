//! Battery-backed NVRAM access

use crate::{Ds1338, Error, Register};
use embedded_hal::i2c::I2c;

const RAM_BYTE_COUNT: usize = (Register::RAM_END - Register::RAM_BEGIN + 1) as usize;

impl<I2C, E> Ds1338<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Read from the battery-backed NVRAM (addresses 0x08-0x3F).
    ///
    /// The bounds check runs before any bus traffic: an out-of-range
    /// request produces no partial transfer.
    pub fn read_ram(&mut self, address: u8, data: &mut [u8]) -> Result<(), Error<E>> {
        check_ram_bounds(address, data.len())?;
        self.read_data(address, data)
    }

    /// Write to the battery-backed NVRAM (addresses 0x08-0x3F).
    pub fn write_ram(&mut self, address: u8, data: &[u8]) -> Result<(), Error<E>> {
        check_ram_bounds(address, data.len())?;
        let mut payload = [0; 1 + RAM_BYTE_COUNT];
        payload[0] = address;
        payload[1..=data.len()].copy_from_slice(data);
        self.write_data(&payload[..=data.len()])
    }
}

fn check_ram_bounds<E>(address: u8, length: usize) -> Result<(), Error<E>> {
    if address < Register::RAM_BEGIN || address > Register::RAM_END {
        return Err(Error::OutOfRange);
    }
    if usize::from(address) + length > usize::from(Register::RAM_END) {
        return Err(Error::OutOfRange);
    }
    Ok(())
}
