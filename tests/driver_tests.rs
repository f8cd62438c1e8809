use rovershield_controller::{
    Direction, Motor, PwmTransport, RoverShield, Servo, ShieldError, WriteOutcome,
};

const PCA9685_ADDRESS: u8 = 0x40;
const MODE1: u8 = 0x00;
const PRESCALE: u8 = 0xFE;
const LED0_ON_L: u8 = 0x06;

#[derive(Default)]
struct RecordingTransport {
    writes: Vec<(u8, Vec<u8>)>,
    delays_us: Vec<u64>,
}

impl PwmTransport for RecordingTransport {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), ShieldError> {
        self.writes.push((address, bytes.to_vec()));
        Ok(())
    }

    fn read_register(&mut self, _address: u8, _register: u8) -> Result<u8, ShieldError> {
        Ok(0x00)
    }

    fn delay_us(&mut self, micros: u64) {
        self.delays_us.push(micros);
    }
}

/// Decode every 5-byte channel write as (channel, on_tick, off_tick).
fn duty_writes(transport: &RecordingTransport) -> Vec<(u8, u16, u16)> {
    transport
        .writes
        .iter()
        .filter(|(_, bytes)| bytes.len() == 5)
        .map(|(_, bytes)| {
            let channel = (bytes[0] - LED0_ON_L) / 4;
            let on = u16::from_le_bytes([bytes[1], bytes[2]]);
            let off = u16::from_le_bytes([bytes[3], bytes[4]]);
            (channel, on, off)
        })
        .collect()
}

#[test]
fn init_sequence_runs_once() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    shield.set_servo_angle(Servo::S1, 90).unwrap();
    shield.set_servo_angle(Servo::S1, 45).unwrap();
    let transport = shield.release();

    // Wake, sleep, prescale for 50 Hz, restore, restart with auto-increment.
    let register_writes: Vec<&[u8]> = transport
        .writes
        .iter()
        .filter(|(_, bytes)| bytes.len() == 2)
        .map(|(_, bytes)| bytes.as_slice())
        .collect();
    assert_eq!(
        register_writes,
        vec![
            &[MODE1, 0x00][..],
            &[MODE1, 0x10][..],
            &[PRESCALE, 121][..],
            &[MODE1, 0x00][..],
            &[MODE1, 0xA1][..],
        ]
    );
    assert_eq!(transport.delays_us, vec![5_000]);
    assert!(transport.writes.iter().all(|(addr, _)| *addr == PCA9685_ADDRESS));

    // Two servo commands, two duty writes, one init.
    assert_eq!(duty_writes(&transport).len(), 2);
}

#[test]
fn servo_angle_endpoints() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    shield.set_servo_angle(Servo::S1, 0).unwrap();
    shield.set_servo_angle(Servo::S1, 180).unwrap();
    let transport = shield.release();

    assert_eq!(
        duty_writes(&transport),
        vec![(15, 0, 122), (15, 0, 491)]
    );
}

#[test]
fn each_servo_targets_its_own_channel() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    for servo in [Servo::S1, Servo::S2, Servo::S3, Servo::S4] {
        shield.set_servo_angle(servo, 90).unwrap();
    }
    let transport = shield.release();

    let channels: Vec<u8> = duty_writes(&transport).iter().map(|w| w.0).collect();
    assert_eq!(channels, vec![15, 14, 13, 12]);
}

#[test]
fn motor_forward_and_reverse() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    shield
        .set_motor_speed(Motor::M1, Direction::Cw, 255)
        .unwrap();
    shield
        .set_motor_speed(Motor::M1, Direction::Ccw, 255)
        .unwrap();
    let transport = shield.release();

    assert_eq!(
        duty_writes(&transport),
        vec![(11, 0, 4080), (10, 0, 0), (11, 0, 0), (10, 0, 4080)]
    );
}

#[test]
fn reversed_m4_swaps_drive_channels() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    shield
        .set_motor_speed(Motor::M3, Direction::Cw, 100)
        .unwrap();
    shield
        .set_motor_speed(Motor::M4, Direction::Cw, 100)
        .unwrap();
    let transport = shield.release();

    // M3 follows the formula (positive 7, negative 6); M4's wiring is
    // reversed, so its positive channel is the low one of the pair.
    assert_eq!(
        duty_writes(&transport),
        vec![(7, 0, 1600), (6, 0, 0), (4, 0, 1600), (5, 0, 0)]
    );
}

#[test]
fn oversized_speed_is_clamped() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    shield
        .set_motor_speed(Motor::M1, Direction::Cw, 300)
        .unwrap();
    shield
        .set_motor_speed(Motor::M1, Direction::Ccw, 300)
        .unwrap();
    let transport = shield.release();

    assert_eq!(
        duty_writes(&transport),
        vec![(11, 0, 4095), (10, 0, 0), (11, 0, 0), (10, 0, 4095)]
    );
}

#[test]
fn out_of_range_channel_writes_nothing() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    let outcome = shield.set_channel_duty(16, 0, 0).unwrap();
    let transport = shield.release();

    assert_eq!(outcome, WriteOutcome::Skipped);
    assert!(transport.writes.is_empty());
}

#[test]
fn out_of_range_motor_index_skips_drive_writes() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    for index in [0, 7] {
        let outcome = shield
            .set_motor_speed_by_index(index, Direction::Cw, 100)
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Skipped);
    }
    let transport = shield.release();

    // The chip still gets configured, but no duty registers are touched.
    assert!(duty_writes(&transport).is_empty());
    assert!(!transport.writes.is_empty());
}

#[test]
fn valid_motor_index_is_applied() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    let outcome = shield
        .set_motor_speed_by_index(1, Direction::Cw, 255)
        .unwrap();
    let transport = shield.release();

    assert_eq!(outcome, WriteOutcome::Applied);
    assert_eq!(duty_writes(&transport), vec![(11, 0, 4080), (10, 0, 0)]);
}

#[test]
fn stop_all_motors_zeroes_every_pair() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    shield.stop_all_motors().unwrap();
    let transport = shield.release();

    let writes = duty_writes(&transport);
    assert_eq!(writes.len(), 12);
    assert!(writes.iter().all(|&(_, on, off)| on == 0 && off == 0));

    let mut channels: Vec<u8> = writes.iter().map(|w| w.0).collect();
    channels.sort_unstable();
    assert_eq!(channels, (0..=11).collect::<Vec<u8>>());

    // Stop commands go straight to the duty registers, no init sequence.
    assert_eq!(transport.writes.len(), 12);
}

#[test]
fn stop_motor_zeroes_both_channels_of_m4() {
    let mut shield = RoverShield::new(RecordingTransport::default());
    shield.stop_motor(Motor::M4).unwrap();
    let transport = shield.release();

    let mut channels: Vec<u8> = duty_writes(&transport).iter().map(|w| w.0).collect();
    channels.sort_unstable();
    assert_eq!(channels, vec![4, 5]);
}
