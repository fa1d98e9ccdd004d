//! Mapa de registros del LSM9DS1
//!
//! El LSM9DS1 expone dos dispositivos en el mismo bus: el acelerómetro/giroscopio
//! y el magnetómetro, cada uno con su propia dirección I2C. Cada registro se
//! accede nombrando el subdispositivo a nivel de tipo, igual que los bancos del
//! ICM20948.

/// Trait para los subdispositivos del paquete
pub trait SubDevice {
    /// Dirección I2C de 7 bits
    const ADDRESS: u8;
    /// Contenido esperado del registro WHO_AM_I
    const ID: u8;
}

/// Registros del acelerómetro y giroscopio (comparten dirección)
pub mod accel_gyro {
    use super::SubDevice;

    /// Subdispositivo acelerómetro/giroscopio
    pub struct Device;
    impl SubDevice for Device {
        const ADDRESS: u8 = 0x6B;
        const ID: u8 = 0b0110_1000;
    }

    // Identificación
    pub const WHO_AM_I_XG: u8 = 0x0F;

    // Control del giroscopio
    pub const CTRL_REG1_G: u8 = 0x10;
    pub const CTRL_REG2_G: u8 = 0x11;
    pub const CTRL_REG3_G: u8 = 0x12;

    // Temperatura y estado
    pub const TEMP_OUT_L: u8 = 0x15;
    pub const TEMP_OUT_H: u8 = 0x16;
    pub const STATUS_REG: u8 = 0x17;

    // Salida del giroscopio
    pub const OUT_X_L_G: u8 = 0x18;
    pub const OUT_X_H_G: u8 = 0x19;
    pub const OUT_Y_L_G: u8 = 0x1A;
    pub const OUT_Y_H_G: u8 = 0x1B;
    pub const OUT_Z_L_G: u8 = 0x1C;
    pub const OUT_Z_H_G: u8 = 0x1D;

    // Control del acelerómetro y generales
    pub const CTRL_REG4: u8 = 0x1E;
    pub const CTRL_REG5_XL: u8 = 0x1F;
    pub const CTRL_REG6_XL: u8 = 0x20;
    pub const CTRL_REG7_XL: u8 = 0x21;
    pub const CTRL_REG8: u8 = 0x22;
    pub const CTRL_REG9: u8 = 0x23;
    pub const CTRL_REG10: u8 = 0x24;

    // Salida del acelerómetro
    pub const OUT_X_L_XL: u8 = 0x28;
    pub const OUT_X_H_XL: u8 = 0x29;
    pub const OUT_Y_L_XL: u8 = 0x2A;
    pub const OUT_Y_H_XL: u8 = 0x2B;
    pub const OUT_Z_L_XL: u8 = 0x2C;
    pub const OUT_Z_H_XL: u8 = 0x2D;
}

/// Registros del magnetómetro
pub mod mag {
    use super::SubDevice;

    /// Subdispositivo magnetómetro
    pub struct Device;
    impl SubDevice for Device {
        const ADDRESS: u8 = 0x1E;
        const ID: u8 = 0b0011_1101;
    }

    pub const WHO_AM_I_M: u8 = 0x0F;

    pub const CTRL_REG1_M: u8 = 0x20;
    pub const CTRL_REG2_M: u8 = 0x21;
    pub const CTRL_REG3_M: u8 = 0x22;
    pub const CTRL_REG4_M: u8 = 0x23;
    pub const CTRL_REG5_M: u8 = 0x24;
    pub const STATUS_REG_M: u8 = 0x27;

    pub const OUT_X_L_M: u8 = 0x28;
    pub const OUT_X_H_M: u8 = 0x29;
    pub const OUT_Y_L_M: u8 = 0x2A;
    pub const OUT_Y_H_M: u8 = 0x2B;
    pub const OUT_Z_L_M: u8 = 0x2C;
    pub const OUT_Z_H_M: u8 = 0x2D;

    pub const CFG_M: u8 = 0x30;
    pub const INT_SRC_M: u8 = 0x31;
}

/// Bits de control y valores fijos de configuración
pub mod bits {
    // CTRL_REG8: SW_RESET | IF_ADD_INC
    pub const XG_SOFT_RESET: u8 = 0x05;
    // CTRL_REG2_M: SOFT_RST | REBOOT
    pub const MAG_SOFT_RESET: u8 = 0x0C;

    // Habilitación en modo continuo
    pub const GYRO_ENABLE_952HZ: u8 = 0xC0; // CTRL_REG1_G: ODR 952 Hz
    pub const ACCEL_ENABLE_XYZ: u8 = 0x38; // CTRL_REG5_XL: Xen | Yen | Zen
    pub const ACCEL_ENABLE_952HZ: u8 = 0xC0; // CTRL_REG6_XL: ODR 952 Hz
    pub const MAG_CONTINUOUS: u8 = 0x00; // CTRL_REG3_M: conversión continua

    // STATUS_REG
    pub const XLDA: u8 = 0x01;
    pub const GDA: u8 = 0x02;
    // STATUS_REG_M
    pub const ZYXDA: u8 = 0x08;
}

/// Campo de 2 bits dentro de un registro de control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeField {
    pub shift: u8,
}

impl RangeField {
    /// Máscara del campo ya desplazada
    pub const fn mask(&self) -> u8 {
        0b11 << self.shift
    }

    /// Coloca `value` en el campo conservando el resto de bits de `reg`
    pub const fn insert(&self, reg: u8, value: u8) -> u8 {
        (reg & !self.mask()) | ((value << self.shift) & self.mask())
    }

    /// Extrae los 2 bits del campo
    pub const fn extract(&self, reg: u8) -> u8 {
        (reg & self.mask()) >> self.shift
    }
}

/// FS_XL en CTRL_REG6_XL
pub const ACCEL_RANGE_FIELD: RangeField = RangeField { shift: 3 };
/// FS_G en CTRL_REG1_G
pub const GYRO_SCALE_FIELD: RangeField = RangeField { shift: 3 };
/// FS en CTRL_REG2_M
pub const MAG_GAIN_FIELD: RangeField = RangeField { shift: 5 };

/// Sensibilidad del acelerómetro (mg/LSB)
pub mod accel_mg_lsb {
    pub const G2: f64 = 0.061;
    pub const G4: f64 = 0.122;
    pub const G8: f64 = 0.244;
    pub const G16: f64 = 0.732;
}

/// Sensibilidad del magnetómetro (mGauss/LSB)
pub mod mag_mgauss_lsb {
    pub const GAUSS4: f64 = 0.14;
    pub const GAUSS8: f64 = 0.29;
    pub const GAUSS12: f64 = 0.43;
    pub const GAUSS16: f64 = 0.58;
}

/// Sensibilidad del giroscopio (dps/dígito)
pub mod gyro_dps_digit {
    pub const DPS245: f64 = 0.00875;
    pub const DPS500: f64 = 0.01750;
    pub const DPS2000: f64 = 0.07000;
}

/// Gravedad estándar en m/s²
pub const GRAVITY_STANDARD: f64 = 9.80665;

/// LSB por grado Celsius del sensor de temperatura
pub const TEMP_LSB_DEGREE_CELSIUS: f64 = 8.0;

/// Tiempo de estabilización tras el soft reset (ms)
pub const SOFT_RESET_SETTLE_MS: u16 = 500;
