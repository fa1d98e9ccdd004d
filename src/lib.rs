//! Biblioteca Rust para el sensor de movimiento ST LSM9DS1
//!
//! Esta biblioteca proporciona una interfaz para controlar el LSM9DS1,
//! un IMU de 9 ejes con acelerómetro, giroscopio y magnetómetro
//! accesible por I2C. El driver trabaja por sondeo: cada lectura es
//! independiente y devuelve valores en unidades físicas.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

pub mod conversion;
pub mod device;
pub mod interface;
pub mod register;
pub mod types;

#[cfg(feature = "linux")]
pub mod linux;

// Re-exports públicos
pub use conversion::{accel_raw_to_ms2, gyro_raw_to_dps, mag_raw_to_gauss, twos_complement};
pub use device::{Lsm9ds1, Lsm9ds1Error};
pub use interface::{I2cInterface, Interface};
pub use types::{AccelRange, GyroScale, MagGain, Vector3};

/// Crea e inicializa un LSM9DS1 usando el bus I2C
pub fn new_i2c_device<I, D, E>(
    i2c: I,
    delay: D,
) -> Result<Lsm9ds1<I2cInterface<I>, D>, Lsm9ds1Error<E>>
where
    I: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
    D: DelayMs<u16>,
{
    Lsm9ds1::new(I2cInterface::new(i2c), delay)
}
