use crate::model::Direction;
use crate::registers::PWM_TICKS;

/// Duty-cycle math for the 50 Hz output the shield runs its servos and
/// H-bridges at (one period = 20 000 µs = 4096 ticks).
const PERIOD_US: u32 = 20_000;
const MIN_PULSE_US: u32 = 600;
const PULSE_RANGE_US: u32 = 1800;

/// Map a servo angle in degrees to the off tick of its pulse.
/// 0° is a 600 µs pulse, 180° is 2400 µs; values outside 0..=180 are
/// passed through unclamped.
pub fn servo_pulse_ticks(degrees: u16) -> u16 {
    let pulse_us = degrees as u32 * PULSE_RANGE_US / 180 + MIN_PULSE_US;
    (pulse_us * PWM_TICKS / PERIOD_US) as u16
}

/// Map a speed magnitude and direction to a signed tick count, clamped to
/// the 12-bit range. The clamp is asymmetric on purpose: 4096 maps to 4095
/// but -4096 maps to -4095, leaving 4080 as the top of the 0..=255 range.
pub fn motor_drive_ticks(direction: Direction, speed: u16) -> i32 {
    let mut ticks = speed as i32 * 16 * direction.sign();
    if ticks >= PWM_TICKS as i32 {
        ticks = PWM_TICKS as i32 - 1;
    }
    if ticks <= -(PWM_TICKS as i32) {
        ticks = -(PWM_TICKS as i32) + 1;
    }
    ticks
}
