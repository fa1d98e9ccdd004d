//! Mock I2C bus simulating both LSM9DS1 sub-devices

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lsm9ds1_rs::register::{accel_gyro, mag, SubDevice};

/// Records operations performed on the mock bus
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Single register write
    Write { addr: u8, reg: u8, value: u8 },
    /// Register read (single or block)
    Read { addr: u8, reg: u8, len: usize },
    /// Delay requested by the driver
    Delay { ms: u16 },
}

/// Error returned by the mock bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Injected read failure (no acknowledge)
    ReadNack,
    /// Injected write failure (no acknowledge)
    WriteNack,
}

/// Shared state for the mock bus (uses interior mutability)
#[derive(Debug, Default)]
struct MockState {
    /// Simulated register values (addr, reg) -> value
    registers: HashMap<(u8, u8), u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
}

/// Cloneable handle to the mock bus; clones share state
#[derive(Debug, Clone, Default)]
pub struct MockI2c {
    state: Rc<RefCell<MockState>>,
}

impl MockI2c {
    /// Creates a bus answering with the correct identity on both sub-devices
    pub fn new() -> Self {
        let bus = Self::default();
        bus.set_register(
            accel_gyro::Device::ADDRESS,
            accel_gyro::WHO_AM_I_XG,
            accel_gyro::Device::ID,
        );
        bus.set_register(mag::Device::ADDRESS, mag::WHO_AM_I_M, mag::Device::ID);
        bus
    }

    pub fn set_register(&self, addr: u8, reg: u8, value: u8) {
        self.state.borrow_mut().registers.insert((addr, reg), value);
    }

    pub fn register(&self, addr: u8, reg: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&(addr, reg))
            .copied()
            .unwrap_or(0)
    }

    /// Loads six little-endian output bytes starting at `reg`
    pub fn set_sample(&self, addr: u8, reg: u8, x: i16, y: i16, z: i16) {
        for (i, value) in [x, y, z].iter().enumerate() {
            let [lo, hi] = value.to_le_bytes();
            self.set_register(addr, reg + 2 * i as u8, lo);
            self.set_register(addr, reg + 2 * i as u8 + 1, hi);
        }
    }

    pub fn set_raw_bytes(&self, addr: u8, reg: u8, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            self.set_register(addr, reg + i as u8, *b);
        }
    }

    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// All writes in order as (addr, reg, value)
    pub fn writes(&self) -> Vec<(u8, u8, u8)> {
        self.operations()
            .into_iter()
            .filter_map(|op| match op {
                Operation::Write { addr, reg, value } => Some((addr, reg, value)),
                _ => None,
            })
            .collect()
    }

    /// Delay provider logging into the same operation log
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            state: Rc::clone(&self.state),
        }
    }

    /// Reset bits self-clear once the device acknowledges them
    fn apply_self_clearing(&self, addr: u8, reg: u8) {
        let mut state = self.state.borrow_mut();
        let mask = if addr == accel_gyro::Device::ADDRESS && reg == accel_gyro::CTRL_REG8 {
            0x01
        } else if addr == mag::Device::ADDRESS && reg == mag::CTRL_REG2_M {
            0x0C
        } else {
            return;
        };
        if let Some(value) = state.registers.get_mut(&(addr, reg)) {
            *value &= !mask;
        }
    }
}

impl Write for MockI2c {
    type Error = MockError;

    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        {
            let mut state = self.state.borrow_mut();
            if state.fail_next_write {
                state.fail_next_write = false;
                return Err(MockError::WriteNack);
            }
            let reg = bytes[0];
            for (i, value) in bytes[1..].iter().enumerate() {
                state.registers.insert((addr, reg + i as u8), *value);
                state.operations.push(Operation::Write {
                    addr,
                    reg: reg + i as u8,
                    value: *value,
                });
            }
        }
        self.apply_self_clearing(addr, bytes[0]);
        Ok(())
    }
}

impl WriteRead for MockI2c {
    type Error = MockError;

    fn write_read(&mut self, addr: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::ReadNack);
        }
        let reg = bytes[0];
        for (i, out) in buffer.iter_mut().enumerate() {
            *out = state
                .registers
                .get(&(addr, reg + i as u8))
                .copied()
                .unwrap_or(0);
        }
        state.operations.push(Operation::Read {
            addr,
            reg,
            len: buffer.len(),
        });
        Ok(())
    }
}

/// Delay that records requested time instead of sleeping
#[derive(Debug, Clone)]
pub struct MockDelay {
    state: Rc<RefCell<MockState>>,
}

impl DelayMs<u16> for MockDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.state
            .borrow_mut()
            .operations
            .push(Operation::Delay { ms });
    }
}
