use core::fmt;

use embedded_hal::blocking::delay::DelayMs;

use crate::conversion::{
    accel_raw_to_ms2, combine_le, decode_triple, gyro_raw_to_dps, mag_raw_to_gauss,
    temp_raw_to_celsius,
};
use crate::interface::Interface;
use crate::register::{
    accel_gyro, bits, mag, RangeField, SubDevice, ACCEL_RANGE_FIELD, GYRO_SCALE_FIELD,
    MAG_GAIN_FIELD, SOFT_RESET_SETTLE_MS,
};
use crate::types::{AccelRange, GyroScale, MagGain, SensorState, Vector3};

/// Driver del LSM9DS1
///
/// Posee el bus en exclusiva. Las operaciones de cambio de rango hacen
/// lectura-modificación-escritura y no son atómicas: no compartir entre
/// hilos sin serialización externa.
pub struct Lsm9ds1<I, D> {
    pub(crate) interface: I,
    pub(crate) delay: D,
    pub(crate) state: SensorState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lsm9ds1Error<E> {
    /// Error del transporte, sin modificar
    Interface(E),
    /// Algún WHO_AM_I no coincide con el valor esperado
    DeviceNotFound { accel_gyro: u8, mag: u8 },
    /// Valor reservado en un campo de rango
    InvalidRangeBits(u8),
}

impl<E: fmt::Debug> fmt::Display for Lsm9ds1Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lsm9ds1Error::Interface(e) => write!(f, "error de bus: {:?}", e),
            Lsm9ds1Error::DeviceNotFound { accel_gyro, mag } => write!(
                f,
                "LSM9DS1 no encontrado (WHO_AM_I_XG={:#04x}, WHO_AM_I_M={:#04x}), revisar el cableado",
                accel_gyro, mag
            ),
            Lsm9ds1Error::InvalidRangeBits(bits) => {
                write!(f, "valor de rango reservado: {:#04b}", bits)
            }
        }
    }
}

impl<E: fmt::Debug> std::error::Error for Lsm9ds1Error<E> {}

impl<I, D, E> Lsm9ds1<I, D>
where
    I: Interface<Error = E>,
    D: DelayMs<u16>,
{
    /// Crea el driver y ejecuta la inicialización completa:
    /// detección, soft reset, rangos por defecto y modo continuo.
    pub fn new(interface: I, delay: D) -> Result<Self, Lsm9ds1Error<E>> {
        let mut device = Self {
            interface,
            delay,
            state: SensorState::default(),
        };

        device.detect()?;
        device.soft_reset()?;
        device.set_defaults()?;
        device.enable_all_continuous()?;

        Ok(device)
    }

    /// Consume el driver y devuelve el transporte y el proveedor de retardos
    pub fn release(self) -> (I, D) {
        (self.interface, self.delay)
    }

    /// Escribe un registro del subdispositivo `S`
    pub fn write_reg<S: SubDevice>(&mut self, reg: u8, value: u8) -> Result<(), Lsm9ds1Error<E>> {
        self.interface
            .write_byte(S::ADDRESS, reg, value)
            .map_err(Lsm9ds1Error::Interface)
    }

    /// Lee un registro del subdispositivo `S`
    pub fn read_reg<S: SubDevice>(&mut self, reg: u8) -> Result<u8, Lsm9ds1Error<E>> {
        self.interface
            .read_byte(S::ADDRESS, reg)
            .map_err(Lsm9ds1Error::Interface)
    }

    /// Lee varios registros consecutivos del subdispositivo `S`
    pub fn read_regs<S: SubDevice>(
        &mut self,
        reg: u8,
        data: &mut [u8],
    ) -> Result<(), Lsm9ds1Error<E>> {
        self.interface
            .read_block(S::ADDRESS, reg, data)
            .map_err(Lsm9ds1Error::Interface)
    }

    /// Modifica bits específicos de un registro
    pub fn modify_reg<S: SubDevice, F>(&mut self, reg: u8, f: F) -> Result<(), Lsm9ds1Error<E>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_reg::<S>(reg)?;
        self.write_reg::<S>(reg, f(value))
    }

    fn write_range_field<S: SubDevice>(
        &mut self,
        reg: u8,
        field: RangeField,
        value: u8,
    ) -> Result<(), Lsm9ds1Error<E>> {
        self.modify_reg::<S, _>(reg, |current| field.insert(current, value))
    }

    fn read_range_field<S: SubDevice>(
        &mut self,
        reg: u8,
        field: RangeField,
    ) -> Result<u8, Lsm9ds1Error<E>> {
        Ok(field.extract(self.read_reg::<S>(reg)?))
    }

    /// Lee los registros WHO_AM_I de ambos subdispositivos
    pub fn who_am_i(&mut self) -> Result<(u8, u8), Lsm9ds1Error<E>> {
        let xg = self.read_reg::<accel_gyro::Device>(accel_gyro::WHO_AM_I_XG)?;
        let m = self.read_reg::<mag::Device>(mag::WHO_AM_I_M)?;
        Ok((xg, m))
    }

    /// Comprueba que ambos subdispositivos responden con su identificador
    fn detect(&mut self) -> Result<(), Lsm9ds1Error<E>> {
        let (xg, m) = self.who_am_i()?;
        if xg != accel_gyro::Device::ID || m != mag::Device::ID {
            log::warn!(
                "LSM9DS1 no encontrado: WHO_AM_I_XG={:#04x} (esperado {:#04x}), WHO_AM_I_M={:#04x} (esperado {:#04x})",
                xg,
                accel_gyro::Device::ID,
                m,
                mag::Device::ID
            );
            return Err(Lsm9ds1Error::DeviceNotFound { accel_gyro: xg, mag: m });
        }
        log::debug!("LSM9DS1 encontrado");
        Ok(())
    }

    /// Envía la señal de reset a ambos subdispositivos y espera a que se estabilicen
    pub fn soft_reset(&mut self) -> Result<(), Lsm9ds1Error<E>> {
        self.write_reg::<accel_gyro::Device>(accel_gyro::CTRL_REG8, bits::XG_SOFT_RESET)?;
        self.write_reg::<mag::Device>(mag::CTRL_REG2_M, bits::MAG_SOFT_RESET)?;
        self.delay.delay_ms(SOFT_RESET_SETTLE_MS);
        log::debug!("Soft reset completado");
        Ok(())
    }

    fn set_defaults(&mut self) -> Result<(), Lsm9ds1Error<E>> {
        self.set_accel_range(AccelRange::default())?;
        self.set_mag_gain(MagGain::default())?;
        self.set_gyro_scale(GyroScale::default())
    }

    /// Configura los tres sensores en modo de salida continua
    fn enable_all_continuous(&mut self) -> Result<(), Lsm9ds1Error<E>> {
        self.write_reg::<accel_gyro::Device>(accel_gyro::CTRL_REG1_G, bits::GYRO_ENABLE_952HZ)?;
        self.write_reg::<accel_gyro::Device>(accel_gyro::CTRL_REG5_XL, bits::ACCEL_ENABLE_XYZ)?;
        self.write_reg::<accel_gyro::Device>(accel_gyro::CTRL_REG6_XL, bits::ACCEL_ENABLE_952HZ)?;
        // Resto de la configuración del magnetómetro en valores de power-on
        self.write_reg::<mag::Device>(mag::CTRL_REG3_M, bits::MAG_CONTINUOUS)
    }

    /// Set accel full-scale range
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Lsm9ds1Error<E>> {
        self.write_range_field::<accel_gyro::Device>(
            accel_gyro::CTRL_REG6_XL,
            ACCEL_RANGE_FIELD,
            range.bits(),
        )?;
        self.state.accel_range = range;
        log::debug!("Rango del acelerómetro: {:?}", range);
        Ok(())
    }

    /// Set magnetometer gain
    pub fn set_mag_gain(&mut self, gain: MagGain) -> Result<(), Lsm9ds1Error<E>> {
        self.write_range_field::<mag::Device>(mag::CTRL_REG2_M, MAG_GAIN_FIELD, gain.bits())?;
        self.state.mag_gain = gain;
        log::debug!("Ganancia del magnetómetro: {:?}", gain);
        Ok(())
    }

    /// Set gyro full-scale range
    pub fn set_gyro_scale(&mut self, scale: GyroScale) -> Result<(), Lsm9ds1Error<E>> {
        self.write_range_field::<accel_gyro::Device>(
            accel_gyro::CTRL_REG1_G,
            GYRO_SCALE_FIELD,
            scale.bits(),
        )?;
        self.state.gyro_scale = scale;
        log::debug!("Escala del giroscopio: {:?}", scale);
        Ok(())
    }

    pub fn accel_range(&self) -> AccelRange {
        self.state.accel_range
    }

    pub fn mag_gain(&self) -> MagGain {
        self.state.mag_gain
    }

    pub fn gyro_scale(&self) -> GyroScale {
        self.state.gyro_scale
    }

    /// Rango del acelerómetro configurado en CTRL_REG6_XL
    ///
    /// Lee el dispositivo; no modifica el estado en memoria.
    pub fn read_accel_range(&mut self) -> Result<AccelRange, Lsm9ds1Error<E>> {
        let value = self.read_range_field::<accel_gyro::Device>(
            accel_gyro::CTRL_REG6_XL,
            ACCEL_RANGE_FIELD,
        )?;
        Ok(AccelRange::from(value))
    }

    /// Ganancia del magnetómetro configurada en CTRL_REG2_M
    pub fn read_mag_gain(&mut self) -> Result<MagGain, Lsm9ds1Error<E>> {
        let value = self.read_range_field::<mag::Device>(mag::CTRL_REG2_M, MAG_GAIN_FIELD)?;
        Ok(MagGain::from(value))
    }

    /// Escala del giroscopio configurada en CTRL_REG1_G
    ///
    /// El valor reservado 0b10 devuelve `InvalidRangeBits`.
    pub fn read_gyro_scale(&mut self) -> Result<GyroScale, Lsm9ds1Error<E>> {
        let value = self.read_range_field::<accel_gyro::Device>(
            accel_gyro::CTRL_REG1_G,
            GYRO_SCALE_FIELD,
        )?;
        GyroScale::try_from(value).map_err(Lsm9ds1Error::InvalidRangeBits)
    }

    /// Sensibilidad activa del acelerómetro (mg/LSB)
    pub fn accel_mg_lsb(&self) -> f64 {
        self.state.accel_range.scale()
    }

    /// Sensibilidad activa del magnetómetro (mGauss/LSB)
    pub fn mag_mgauss_lsb(&self) -> f64 {
        self.state.mag_gain.scale()
    }

    /// Sensibilidad activa del giroscopio (dps/dígito)
    pub fn gyro_dps_digit(&self) -> f64 {
        self.state.gyro_scale.scale()
    }

    /// Lee una muestra de 3 ejes a partir del registro X bajo
    fn read_xyz<S: SubDevice>(&mut self, start: u8) -> Result<Vector3<i16>, Lsm9ds1Error<E>> {
        let mut data = [0u8; 6];
        self.read_regs::<S>(start, &mut data)?;
        Ok(decode_triple(&data))
    }

    pub fn read_accelerometer_raw(&mut self) -> Result<Vector3<i16>, Lsm9ds1Error<E>> {
        self.read_xyz::<accel_gyro::Device>(accel_gyro::OUT_X_L_XL)
    }

    pub fn read_gyroscope_raw(&mut self) -> Result<Vector3<i16>, Lsm9ds1Error<E>> {
        self.read_xyz::<accel_gyro::Device>(accel_gyro::OUT_X_L_G)
    }

    pub fn read_magnetometer_raw(&mut self) -> Result<Vector3<i16>, Lsm9ds1Error<E>> {
        self.read_xyz::<mag::Device>(mag::OUT_X_L_M)
    }

    /// Lee el acelerómetro en m/s²
    pub fn read_accelerometer(&mut self) -> Result<Vector3<f32>, Lsm9ds1Error<E>> {
        let raw = self.read_accelerometer_raw()?;
        Ok(accel_raw_to_ms2(raw, self.accel_mg_lsb()))
    }

    /// Lee el giroscopio en grados/segundo
    pub fn read_gyroscope(&mut self) -> Result<Vector3<f32>, Lsm9ds1Error<E>> {
        let raw = self.read_gyroscope_raw()?;
        Ok(gyro_raw_to_dps(raw, self.gyro_dps_digit()))
    }

    /// Lee el magnetómetro en gauss
    pub fn read_magnetometer(&mut self) -> Result<Vector3<f32>, Lsm9ds1Error<E>> {
        let raw = self.read_magnetometer_raw()?;
        Ok(mag_raw_to_gauss(raw, self.mag_mgauss_lsb()))
    }

    /// Leer los datos de temperatura sin procesar
    pub fn read_temperature_raw(&mut self) -> Result<i16, Lsm9ds1Error<E>> {
        let mut data = [0u8; 2];
        self.read_regs::<accel_gyro::Device>(accel_gyro::TEMP_OUT_L, &mut data)?;
        Ok(combine_le(data[0], data[1]))
    }

    /// Lee la temperatura en grados Celsius
    pub fn read_temperature(&mut self) -> Result<f32, Lsm9ds1Error<E>> {
        let raw = self.read_temperature_raw()?;
        Ok(temp_raw_to_celsius(raw))
    }

    pub fn accel_data_ready(&mut self) -> Result<bool, Lsm9ds1Error<E>> {
        let status = self.read_reg::<accel_gyro::Device>(accel_gyro::STATUS_REG)?;
        Ok(status & bits::XLDA != 0)
    }

    pub fn gyro_data_ready(&mut self) -> Result<bool, Lsm9ds1Error<E>> {
        let status = self.read_reg::<accel_gyro::Device>(accel_gyro::STATUS_REG)?;
        Ok(status & bits::GDA != 0)
    }

    pub fn mag_data_ready(&mut self) -> Result<bool, Lsm9ds1Error<E>> {
        let status = self.read_reg::<mag::Device>(mag::STATUS_REG_M)?;
        Ok(status & bits::ZYXDA != 0)
    }
}
