use crate::error::ShieldError;

/// Bus and timing capabilities the driver needs from the host: an addressed
/// buffer write, a single-byte register read, and a blocking delay.
pub trait PwmTransport: Send + 'static {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), ShieldError>;
    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, ShieldError>;
    fn delay_us(&mut self, micros: u64);

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), ShieldError> {
        self.write(address, &[register, value])
    }
}
