//! Common test utilities and mock implementations

pub mod mock_i2c;

pub use mock_i2c::{MockError, MockI2c, Operation};
pub use test_utils::{create_initialized_driver, ACCEL_GYRO_ADDR, MAG_ADDR};
