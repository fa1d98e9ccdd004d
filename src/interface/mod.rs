//! Módulo de abstracción para el bus de comunicación con el LSM9DS1

use embedded_hal::blocking::i2c;

/// Trait para abstraer el transporte de dos hilos
///
/// Cada operación indica la dirección del subdispositivo, ya que el
/// acelerómetro/giroscopio y el magnetómetro comparten el mismo bus.
pub trait Interface {
    /// Tipo de error que puede producir el transporte
    type Error;

    /// Escribe un byte en un registro
    fn write_byte(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Lee un byte de un registro
    fn read_byte(&mut self, addr: u8, reg: u8) -> Result<u8, Self::Error> {
        let mut data = [0u8];
        self.read_block(addr, reg, &mut data)?;
        Ok(data[0])
    }

    /// Lee `data.len()` bytes consecutivos a partir de `reg`
    fn read_block(&mut self, addr: u8, reg: u8, data: &mut [u8]) -> Result<(), Self::Error>;
}

/// Implementación de Interface para I2C
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C, E> I2cInterface<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    /// Crea una nueva interfaz I2C
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume la interfaz y devuelve el dispositivo I2C subyacente
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Interface for I2cInterface<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    type Error = E;

    fn write_byte(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(addr, &[reg, value])
    }

    fn read_block(&mut self, addr: u8, reg: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(addr, &[reg], data)
    }
}
