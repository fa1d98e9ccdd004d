//! Definiciones de tipos comunes para el LSM9DS1

use crate::register::{accel_mg_lsb, gyro_dps_digit, mag_mgauss_lsb};

/// Rangos de escala completa del acelerómetro
///
/// La codificación del campo FS_XL no sigue el orden de los rangos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AccelRange {
    /// ±2g
    #[default]
    G2 = 0b00,
    /// ±16g
    G16 = 0b01,
    /// ±4g
    G4 = 0b10,
    /// ±8g
    G8 = 0b11,
}

impl AccelRange {
    /// Valor de 2 bits del campo FS_XL
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Sensibilidad en mg/LSB
    pub fn scale(self) -> f64 {
        match self {
            AccelRange::G2 => accel_mg_lsb::G2,
            AccelRange::G4 => accel_mg_lsb::G4,
            AccelRange::G8 => accel_mg_lsb::G8,
            AccelRange::G16 => accel_mg_lsb::G16,
        }
    }
}

impl From<u8> for AccelRange {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0b00 => AccelRange::G2,
            0b01 => AccelRange::G16,
            0b10 => AccelRange::G4,
            _ => AccelRange::G8,
        }
    }
}

/// Ganancias del magnetómetro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MagGain {
    /// ±4 gauss
    #[default]
    Gauss4 = 0b00,
    /// ±8 gauss
    Gauss8 = 0b01,
    /// ±12 gauss
    Gauss12 = 0b10,
    /// ±16 gauss
    Gauss16 = 0b11,
}

impl MagGain {
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Sensibilidad en mGauss/LSB
    pub fn scale(self) -> f64 {
        match self {
            MagGain::Gauss4 => mag_mgauss_lsb::GAUSS4,
            MagGain::Gauss8 => mag_mgauss_lsb::GAUSS8,
            MagGain::Gauss12 => mag_mgauss_lsb::GAUSS12,
            MagGain::Gauss16 => mag_mgauss_lsb::GAUSS16,
        }
    }
}

impl From<u8> for MagGain {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0b00 => MagGain::Gauss4,
            0b01 => MagGain::Gauss8,
            0b10 => MagGain::Gauss12,
            _ => MagGain::Gauss16,
        }
    }
}

/// Escalas del giroscopio
///
/// El valor 0b10 de FS_G no está disponible en el dispositivo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum GyroScale {
    /// ±245 dps
    #[default]
    Dps245 = 0b00,
    /// ±500 dps
    Dps500 = 0b01,
    /// ±2000 dps
    Dps2000 = 0b11,
}

impl GyroScale {
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Sensibilidad en dps/dígito
    pub fn scale(self) -> f64 {
        match self {
            GyroScale::Dps245 => gyro_dps_digit::DPS245,
            GyroScale::Dps500 => gyro_dps_digit::DPS500,
            GyroScale::Dps2000 => gyro_dps_digit::DPS2000,
        }
    }
}

impl TryFrom<u8> for GyroScale {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value & 0x03 {
            0b00 => Ok(GyroScale::Dps245),
            0b01 => Ok(GyroScale::Dps500),
            0b11 => Ok(GyroScale::Dps2000),
            other => Err(other),
        }
    }
}

/// Muestra de tres ejes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Copy> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Aplica `f` a cada eje
    pub fn map<U, F>(self, f: F) -> Vector3<U>
    where
        F: Fn(T) -> U,
    {
        Vector3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Copy> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

/// Rangos seleccionados actualmente en el dispositivo
///
/// Siempre refleja los bits escritos por última vez en los registros de control;
/// los factores de escala se derivan de aquí.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorState {
    pub accel_range: AccelRange,
    pub mag_gain: MagGain,
    pub gyro_scale: GyroScale,
}
