//! Funciones de conversión para datos del sensor LSM9DS1
//!
//! Este módulo decodifica las muestras raw (tres enteros de 16 bits en
//! little-endian) y las convierte a unidades físicas: m/s² para el
//! acelerómetro, grados por segundo para el giroscopio y gauss para el
//! magnetómetro. Todos los resultados se redondean a 2 decimales.

use crate::register::{GRAVITY_STANDARD, TEMP_LSB_DEGREE_CELSIUS};
use crate::types::Vector3;

/// Temperatura de referencia con salida cero (°C)
pub const TEMP_ZERO_LEVEL_CELSIUS: f64 = 25.0;

/// Interpreta un valor de 16 bits en complemento a dos
#[inline]
pub fn twos_complement(value: u16) -> i16 {
    if value & 0x8000 != 0 {
        (value as i32 - 0x1_0000) as i16
    } else {
        value as i16
    }
}

/// Combina un par de bytes bajo/alto en un entero con signo
#[inline]
pub fn combine_le(low: u8, high: u8) -> i16 {
    twos_complement(low as u16 | ((high as u16) << 8))
}

/// Decodifica 6 bytes consecutivos (X, Y, Z) en una muestra de tres ejes
pub fn decode_triple(data: &[u8; 6]) -> Vector3<i16> {
    Vector3 {
        x: combine_le(data[0], data[1]),
        y: combine_le(data[2], data[3]),
        z: combine_le(data[4], data[5]),
    }
}

/// Redondea a 2 decimales sobre el valor binario exacto, empates al par
///
/// `(v * 100.0).round()` falla en valores cercanos a un empate porque el
/// producto ya está redondeado; aquí se trabaja con la mantisa en enteros.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let bits = value.to_bits();
    let negative = bits >> 63 != 0;
    let exp_bits = ((bits >> 52) & 0x7FF) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };
    if exp >= 0 {
        // Ya es entero
        return value;
    }

    // |value| * 100 = mantissa * 100 * 2^exp
    let scaled = mantissa as u128 * 100;
    let shift = (-exp) as u32;
    let hundredths = if shift >= 64 {
        // scaled < 2^60, por debajo de medio céntimo
        0
    } else {
        let q = scaled >> shift;
        let rem = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if rem > half || (rem == half && q & 1 == 1) {
            q + 1
        } else {
            q
        }
    };

    let magnitude = hundredths as f64 / 100.0;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Aceleración en m/s² para un eje, con `mg_lsb` en mg/LSB
#[inline]
pub fn accel_lsb_to_ms2(raw: i16, mg_lsb: f64) -> f64 {
    round2(raw as f64 * (mg_lsb / 1000.0) * GRAVITY_STANDARD)
}

/// Valor en la unidad base (dps o gauss) para un eje, con `scale` en milésimas por LSB
#[inline]
pub fn lsb_to_unit(raw: i16, scale: f64) -> f64 {
    round2(raw as f64 * (scale / 1000.0))
}

/// Convierte datos brutos del acelerómetro a m/s²
///
/// # Arguments
/// * `raw` - Valores brutos del acelerómetro
/// * `mg_lsb` - Sensibilidad activa en mg/LSB
pub fn accel_raw_to_ms2(raw: Vector3<i16>, mg_lsb: f64) -> Vector3<f32> {
    raw.map(|r| accel_lsb_to_ms2(r, mg_lsb) as f32)
}

/// Convierte datos brutos del giroscopio a grados/segundo
pub fn gyro_raw_to_dps(raw: Vector3<i16>, dps_digit: f64) -> Vector3<f32> {
    raw.map(|r| lsb_to_unit(r, dps_digit) as f32)
}

/// Convierte datos brutos del magnetómetro a gauss
pub fn mag_raw_to_gauss(raw: Vector3<i16>, mgauss_lsb: f64) -> Vector3<f32> {
    raw.map(|r| lsb_to_unit(r, mgauss_lsb) as f32)
}

/// Convierte el valor raw de temperatura a grados Celsius
pub fn temp_raw_to_celsius(raw: i16) -> f32 {
    round2(TEMP_ZERO_LEVEL_CELSIUS + raw as f64 / TEMP_LSB_DEGREE_CELSIUS) as f32
}
