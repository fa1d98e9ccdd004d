//! Unit tests for sample decoding and unit conversion

use crate::common::{create_initialized_driver, Operation, ACCEL_GYRO_ADDR, MAG_ADDR};
use lsm9ds1_rs::register::{accel_gyro, mag};
use lsm9ds1_rs::{GyroScale, MagGain, Vector3};

#[test]
fn test_block_read_decodes_signed_axes() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_raw_bytes(
        ACCEL_GYRO_ADDR,
        accel_gyro::OUT_X_L_XL,
        &[0x00, 0x40, 0x00, 0xC0, 0xFF, 0x7F],
    );

    let raw = driver.read_accelerometer_raw().unwrap();
    assert_eq!(raw, Vector3::new(16384, -16384, 32767));

    // One block read of six bytes
    assert_eq!(
        bus.operations(),
        vec![Operation::Read {
            addr: ACCEL_GYRO_ADDR,
            reg: accel_gyro::OUT_X_L_XL,
            len: 6
        }]
    );
}

#[test]
fn test_extreme_negative_value() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_raw_bytes(MAG_ADDR, mag::OUT_X_L_M, &[0x00, 0x80, 0x00, 0x80, 0x00, 0x80]);

    let raw = driver.read_magnetometer_raw().unwrap();
    assert_eq!(raw.to_array(), [-32768, -32768, -32768]);
}

#[test]
fn test_accelerometer_in_ms2() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_sample(ACCEL_GYRO_ADDR, accel_gyro::OUT_X_L_XL, 1000, -1000, 0);

    let accel = driver.read_accelerometer().unwrap();
    assert_eq!(accel.x, 0.6);
    assert_eq!(accel.y, -0.6);
    assert_eq!(accel.z, 0.0);
}

#[test]
fn test_gyroscope_reads_its_own_registers() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_sample(ACCEL_GYRO_ADDR, accel_gyro::OUT_X_L_G, 20000, -20000, 0);
    driver.set_gyro_scale(GyroScale::Dps500).unwrap();

    // 20000 * 0.0175 / 1000 = 0.35
    let gyro = driver.read_gyroscope().unwrap();
    assert!((gyro.x - 0.35).abs() < 1e-6);
    assert!((gyro.y + 0.35).abs() < 1e-6);
    assert_eq!(gyro.z, 0.0);
}

#[test]
fn test_magnetometer_in_gauss() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_sample(MAG_ADDR, mag::OUT_X_L_M, 10000, 0, -10000);
    driver.set_mag_gain(MagGain::Gauss16).unwrap();

    // 10000 * 0.58 / 1000 = 5.8
    let m = driver.read_magnetometer().unwrap();
    assert!((m.x - 5.8).abs() < 1e-5);
    assert!((m.z + 5.8).abs() < 1e-5);

    let (x, y, z): (f32, f32, f32) = m.into();
    assert_eq!((x, y, z), (m.x, m.y, m.z));
}

#[test]
fn test_reads_are_idempotent() {
    let (mut driver, bus) = create_initialized_driver();
    bus.set_sample(ACCEL_GYRO_ADDR, accel_gyro::OUT_X_L_XL, 1234, -4321, 77);
    bus.set_sample(ACCEL_GYRO_ADDR, accel_gyro::OUT_X_L_G, -5, 6000, 12345);
    bus.set_sample(MAG_ADDR, mag::OUT_X_L_M, 3000, 2000, -1000);

    assert_eq!(
        driver.read_accelerometer().unwrap(),
        driver.read_accelerometer().unwrap()
    );
    assert_eq!(driver.read_gyroscope().unwrap(), driver.read_gyroscope().unwrap());
    assert_eq!(
        driver.read_magnetometer().unwrap(),
        driver.read_magnetometer().unwrap()
    );
}

#[test]
fn test_temperature() {
    let (mut driver, bus) = create_initialized_driver();
    // -24 LSB -> 25 - 3 = 22 °C
    bus.set_raw_bytes(ACCEL_GYRO_ADDR, accel_gyro::TEMP_OUT_L, &(-24i16).to_le_bytes());

    assert_eq!(driver.read_temperature_raw().unwrap(), -24);
    assert_eq!(driver.read_temperature().unwrap(), 22.0);
}

#[test]
fn test_data_ready_flags() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_register(ACCEL_GYRO_ADDR, accel_gyro::STATUS_REG, 0x01);
    assert!(driver.accel_data_ready().unwrap());
    assert!(!driver.gyro_data_ready().unwrap());

    bus.set_register(ACCEL_GYRO_ADDR, accel_gyro::STATUS_REG, 0x02);
    assert!(!driver.accel_data_ready().unwrap());
    assert!(driver.gyro_data_ready().unwrap());

    assert!(!driver.mag_data_ready().unwrap());
    bus.set_register(MAG_ADDR, mag::STATUS_REG_M, 0x08);
    assert!(driver.mag_data_ready().unwrap());
}
