//! Device status

use crate::{BitFlags, Ds1338, Error, Register};
use embedded_hal::i2c::I2c;

impl<I2C, E> Ds1338<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Read whether the oscillator has stopped since the flag was last cleared.
    ///
    /// The flag is sticky: once the hardware sets it, it stays set until
    /// cleared with [`clear_has_been_stopped()`](Ds1338::clear_has_been_stopped).
    pub fn has_been_stopped(&mut self) -> Result<bool, Error<E>> {
        let control = self.read_register(Register::CONTROL)?;
        Ok(control & BitFlags::OSC_STOP != 0)
    }

    /// Clear the oscillator-stop flag.
    pub fn clear_has_been_stopped(&mut self) -> Result<(), Error<E>> {
        self.clear_control_bits(BitFlags::OSC_STOP)
    }
}
