use ds1338::Ds1338;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x68;

pub fn new(transactions: &[I2cTrans]) -> Ds1338<I2cMock> {
    Ds1338::new(I2cMock::new(transactions))
}

pub fn destroy(device: Ds1338<I2cMock>) {
    device.destroy().done();
}
