use rovershield_controller::{
    Direction, Motor, PwmTransport, RoverShield, Servo, ShieldError,
};

/// Prints every bus transaction instead of touching real hardware.
struct TracingTransport;

impl PwmTransport for TracingTransport {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), ShieldError> {
        println!("i2c write 0x{address:02x}: {bytes:02x?}");
        Ok(())
    }

    fn read_register(&mut self, _address: u8, _register: u8) -> Result<u8, ShieldError> {
        Ok(0x00)
    }

    fn delay_us(&mut self, micros: u64) {
        println!("delay {micros}us");
    }
}

fn main() -> anyhow::Result<()> {
    let mut shield = RoverShield::new(TracingTransport);

    for degrees in (0u16..=180).step_by(45) {
        shield.set_servo_angle(Servo::S1, degrees)?;
    }

    shield.set_motor_speed(Motor::M1, Direction::Cw, 200)?;
    shield.set_motor_speed(Motor::M4, Direction::Ccw, 120)?;
    shield.stop_all_motors()?;

    Ok(())
}
