use std::{thread, time::Duration};

use rppal::i2c::I2c;

use crate::{error::ShieldError, transport::PwmTransport};

/// Raspberry Pi I2C transport over `/dev/i2c-*`.
pub struct RppalTransport {
    i2c: I2c,
}

impl RppalTransport {
    /// Open the default I2C bus for the board model.
    pub fn new() -> Result<Self, ShieldError> {
        let i2c = I2c::new().map_err(|_| ShieldError::Communication)?;
        Ok(Self { i2c })
    }

    /// Open a specific I2C bus (`/dev/i2c-<bus>`).
    pub fn with_bus(bus: u8) -> Result<Self, ShieldError> {
        let i2c = I2c::with_bus(bus).map_err(|_| ShieldError::Communication)?;
        Ok(Self { i2c })
    }
}

impl PwmTransport for RppalTransport {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), ShieldError> {
        self.i2c
            .set_slave_address(address as u16)
            .map_err(|_| ShieldError::Communication)?;
        self.i2c
            .write(bytes)
            .map(|_| ())
            .map_err(|_| ShieldError::Communication)
    }

    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, ShieldError> {
        self.i2c
            .set_slave_address(address as u16)
            .map_err(|_| ShieldError::Communication)?;
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(&[register], &mut buf)
            .map_err(|_| ShieldError::Communication)?;
        Ok(buf[0])
    }

    fn delay_us(&mut self, micros: u64) {
        thread::sleep(Duration::from_micros(micros));
    }
}
