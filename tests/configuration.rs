mod common;

use crate::common::{destroy, new, DEV_ADDR};
use ds1338::{Error, SqWFreq};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::Transaction as I2cTrans;

const CONTROL: u8 = 0x07;

#[test]
fn can_enable_square_wave() {
    // the rate-select clear rewrites the register wholesale, then the
    // enable bit is ORed in via read-modify-write
    let mut dev = new(&[
        I2cTrans::write(DEV_ADDR, vec![CONTROL, 0xFC]),
        I2cTrans::write_read(DEV_ADDR, vec![CONTROL], vec![0xFC]),
        I2cTrans::write(DEV_ADDR, vec![CONTROL, 0xFE]),
    ]);
    dev.enable_square_wave(SqWFreq::_8_192Hz).unwrap();
    destroy(dev);
}

#[test]
fn can_enable_square_wave_at_32_768khz() {
    let mut dev = new(&[
        I2cTrans::write(DEV_ADDR, vec![CONTROL, 0xFC]),
        I2cTrans::write_read(DEV_ADDR, vec![CONTROL], vec![0xFC]),
        I2cTrans::write(DEV_ADDR, vec![CONTROL, 0xFF]),
    ]);
    dev.enable_square_wave(SqWFreq::_32_768Hz).unwrap();
    destroy(dev);
}

#[test]
fn can_disable_square_wave() {
    let mut dev = new(&[I2cTrans::write(DEV_ADDR, vec![CONTROL, 0xEC])]);
    dev.disable_square_wave().unwrap();
    destroy(dev);
}

#[test]
fn can_enable_oscillator() {
    let mut dev = new(&[
        I2cTrans::write_read(DEV_ADDR, vec![CONTROL], vec![0x93]),
        I2cTrans::write(DEV_ADDR, vec![CONTROL, 0x13]),
    ]);
    dev.enable_oscillator().unwrap();
    destroy(dev);
}

#[test]
fn can_disable_oscillator() {
    let mut dev = new(&[
        I2cTrans::write_read(DEV_ADDR, vec![CONTROL], vec![0x13]),
        I2cTrans::write(DEV_ADDR, vec![CONTROL, 0x93]),
    ]);
    dev.disable_oscillator().unwrap();
    destroy(dev);
}

#[test]
fn can_read_and_write_control() {
    let mut dev = new(&[
        I2cTrans::write_read(DEV_ADDR, vec![CONTROL], vec![0x10]),
        I2cTrans::write(DEV_ADDR, vec![CONTROL, 0x03]),
    ]);
    assert_eq!(dev.control().unwrap(), 0x10);
    dev.set_control(0x03).unwrap();
    destroy(dev);
}

#[test]
fn enable_square_wave_stops_after_a_failed_transaction() {
    let mut dev =
        new(&[I2cTrans::write(DEV_ADDR, vec![CONTROL, 0xFC]).with_error(ErrorKind::Other)]);
    assert_eq!(
        dev.enable_square_wave(SqWFreq::_1Hz),
        Err(Error::Comm(ErrorKind::Other))
    );
    destroy(dev);
}
