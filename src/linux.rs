//! Soporte para buses I2C de Linux (`/dev/i2c-N`)

use linux_embedded_hal::i2cdev::linux::LinuxI2CError;
use linux_embedded_hal::{Delay, I2cdev};

use crate::device::{Lsm9ds1, Lsm9ds1Error};
use crate::interface::I2cInterface;

/// Driver sobre un bus I2C de Linux
pub type LinuxLsm9ds1 = Lsm9ds1<I2cInterface<I2cdev>, Delay>;

/// Abre el bus indicado e inicializa el sensor
///
/// Un fallo al abrir el dispositivo se devuelve como error de interfaz.
pub fn open(path: &str) -> Result<LinuxLsm9ds1, Lsm9ds1Error<LinuxI2CError>> {
    let i2c = I2cdev::new(path).map_err(Lsm9ds1Error::Interface)?;
    crate::new_i2c_device(i2c, Delay {})
}
