//! Device configuration

use crate::{BitFlags, Ds1338, Error, Register, SqWFreq};
use embedded_hal::i2c::I2c;

impl<I2C, E> Ds1338<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Enable the oscillator (set the clock running) (default).
    pub fn enable_oscillator(&mut self) -> Result<(), Error<E>> {
        let control = self.read_register(Register::CONTROL)?;
        self.write_register(Register::CONTROL, control & !BitFlags::EOSC)
    }

    /// Disable the oscillator (stops the clock).
    pub fn disable_oscillator(&mut self) -> Result<(), Error<E>> {
        self.set_control_bits(BitFlags::EOSC)
    }

    /// Enable the square-wave output with the given frequency.
    pub fn enable_square_wave(&mut self, frequency: SqWFreq) -> Result<(), Error<E>> {
        let rs = match frequency {
            SqWFreq::_1Hz => 0b00,
            SqWFreq::_4_096Hz => 0b01,
            SqWFreq::_8_192Hz => 0b10,
            SqWFreq::_32_768Hz => 0b11,
        };
        self.clear_control_bits(BitFlags::RS_MASK)?;
        self.set_control_bits(rs | BitFlags::SQWE)
    }

    /// Disable the square-wave output.
    pub fn disable_square_wave(&mut self) -> Result<(), Error<E>> {
        self.clear_control_bits(BitFlags::SQWE | BitFlags::RS_MASK)
    }

    /// Read the control register.
    pub fn control(&mut self) -> Result<u8, Error<E>> {
        self.read_register(Register::CONTROL)
    }

    /// Write the control register.
    pub fn set_control(&mut self, control: u8) -> Result<(), Error<E>> {
        self.write_register(Register::CONTROL, control)
    }

    pub(crate) fn set_control_bits(&mut self, mask: u8) -> Result<(), Error<E>> {
        let control = self.read_register(Register::CONTROL)?;
        self.write_register(Register::CONTROL, control | mask)
    }

    /// Writes the complement of `mask` wholesale: bits inside the mask end
    /// up cleared, every bit outside it is written as set.
    pub(crate) fn clear_control_bits(&mut self, mask: u8) -> Result<(), Error<E>> {
        self.write_register(Register::CONTROL, !mask)
    }
}
