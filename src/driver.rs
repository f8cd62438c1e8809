use tracing::{debug, warn};

use crate::{
    conversion,
    error::ShieldError,
    model::{Direction, Motor, MotorChannels, Servo, WriteOutcome},
    registers::{
        Register, LAST_CHANNEL, MODE1_ALLCALL, MODE1_AUTO_INCREMENT, MODE1_RESTART, MODE1_SLEEP,
        OSC_CLOCK_HZ, PCA9685_ADDRESS, PWM_TICKS,
    },
    transport::PwmTransport,
};

const PWM_FREQUENCY_HZ: u32 = 50;
const OSCILLATOR_SETTLE_US: u64 = 5_000;

/// Driver for one PCA9685-based rover shield.
///
/// The chip is configured lazily on the first servo or motor command and
/// stays configured for the lifetime of the driver; there is no teardown.
pub struct RoverShield<T: PwmTransport> {
    transport: T,
    address: u8,
    initialized: bool,
}

impl<T: PwmTransport> RoverShield<T> {
    pub fn new(transport: T) -> Self {
        Self::with_address(transport, PCA9685_ADDRESS)
    }

    pub fn with_address(transport: T, address: u8) -> Self {
        Self {
            transport,
            address,
            initialized: false,
        }
    }

    /// Move a servo to `degrees`. The intended range is 0..=180; values
    /// outside it are written through unclamped and over-drive the pulse.
    pub fn set_servo_angle(&mut self, servo: Servo, degrees: u16) -> Result<(), ShieldError> {
        self.ensure_initialized()?;
        let off_tick = conversion::servo_pulse_ticks(degrees);
        self.set_channel_duty(servo.channel(), 0, off_tick)?;
        Ok(())
    }

    /// Drive a motor at `speed` (0..=255) in `direction`.
    pub fn set_motor_speed(
        &mut self,
        motor: Motor,
        direction: Direction,
        speed: u16,
    ) -> Result<(), ShieldError> {
        self.ensure_initialized()?;
        let drive = conversion::motor_drive_ticks(direction, speed);
        let MotorChannels { positive, negative } = motor.channels();
        if drive >= 0 {
            self.set_channel_duty(positive, 0, drive as u16)?;
            self.set_channel_duty(negative, 0, 0)?;
        } else {
            self.set_channel_duty(positive, 0, 0)?;
            self.set_channel_duty(negative, 0, (-drive) as u16)?;
        }
        Ok(())
    }

    /// Runtime-index variant of [`set_motor_speed`] for hosts that receive
    /// motor numbers instead of enum values. Numbers outside 1..=6 skip the
    /// drive writes.
    ///
    /// [`set_motor_speed`]: RoverShield::set_motor_speed
    pub fn set_motor_speed_by_index(
        &mut self,
        index: u8,
        direction: Direction,
        speed: u16,
    ) -> Result<WriteOutcome, ShieldError> {
        self.ensure_initialized()?;
        match Motor::from_index(index) {
            Some(motor) => {
                self.set_motor_speed(motor, direction, speed)?;
                Ok(WriteOutcome::Applied)
            }
            None => {
                warn!(index, "motor index out of range, skipping");
                Ok(WriteOutcome::Skipped)
            }
        }
    }

    /// Zero both drive channels of a motor.
    pub fn stop_motor(&mut self, motor: Motor) -> Result<(), ShieldError> {
        let MotorChannels { positive, negative } = motor.channels();
        self.set_channel_duty(positive, 0, 0)?;
        self.set_channel_duty(negative, 0, 0)?;
        Ok(())
    }

    pub fn stop_all_motors(&mut self) -> Result<(), ShieldError> {
        for motor in Motor::ALL {
            self.stop_motor(motor)?;
        }
        Ok(())
    }

    /// Write a raw on/off tick pair to one output channel. Channels above
    /// 15 are skipped without touching the bus.
    pub fn set_channel_duty(
        &mut self,
        channel: u8,
        on_tick: u16,
        off_tick: u16,
    ) -> Result<WriteOutcome, ShieldError> {
        if channel > LAST_CHANNEL {
            warn!(channel, "pwm channel out of range, skipping");
            return Ok(WriteOutcome::Skipped);
        }
        let buf = [
            Register::Led0OnL.addr() + 4 * channel,
            (on_tick & 0xff) as u8,
            (on_tick >> 8) as u8,
            (off_tick & 0xff) as u8,
            (off_tick >> 8) as u8,
        ];
        self.transport.write(self.address, &buf)?;
        Ok(WriteOutcome::Applied)
    }

    /// Hand the transport back, e.g. to share the bus with another device.
    pub fn release(self) -> T {
        self.transport
    }

    fn ensure_initialized(&mut self) -> Result<(), ShieldError> {
        if self.initialized {
            return Ok(());
        }
        debug!(address = self.address, "initializing pca9685");
        self.write_register(Register::Mode1, 0x00)?;
        self.set_frequency(PWM_FREQUENCY_HZ)?;
        self.initialized = true;
        Ok(())
    }

    fn set_frequency(&mut self, freq_hz: u32) -> Result<(), ShieldError> {
        // Truncated, not rounded.
        let prescale = (OSC_CLOCK_HZ as f64 / PWM_TICKS as f64 / freq_hz as f64 - 1.0) as u8;
        let old_mode = self
            .transport
            .read_register(self.address, Register::Mode1.addr())?;
        let sleep_mode = (old_mode & !MODE1_RESTART) | MODE1_SLEEP;
        self.write_register(Register::Mode1, sleep_mode)?;
        self.write_register(Register::Prescale, prescale)?;
        self.write_register(Register::Mode1, old_mode)?;
        self.transport.delay_us(OSCILLATOR_SETTLE_US);
        self.write_register(
            Register::Mode1,
            old_mode | MODE1_RESTART | MODE1_AUTO_INCREMENT | MODE1_ALLCALL,
        )?;
        Ok(())
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), ShieldError> {
        self.transport
            .write_register(self.address, register.addr(), value)
    }
}
