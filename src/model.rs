/// Servo headers on the shield. Each one is hard-wired to a fixed PWM
/// output channel of the PCA9685.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Servo {
    S1,
    S2,
    S3,
    S4,
}

impl Servo {
    pub fn channel(self) -> u8 {
        match self {
            Servo::S1 => 15,
            Servo::S2 => 14,
            Servo::S3 => 13,
            Servo::S4 => 12,
        }
    }

    /// Resolve a 1-based header number (S1 = 1) as printed on the board.
    pub fn from_index(index: u8) -> Option<Servo> {
        match index {
            1 => Some(Servo::S1),
            2 => Some(Servo::S2),
            3 => Some(Servo::S3),
            4 => Some(Servo::S4),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motor {
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
}

impl Motor {
    pub const ALL: [Motor; 6] = [
        Motor::M1,
        Motor::M2,
        Motor::M3,
        Motor::M4,
        Motor::M5,
        Motor::M6,
    ];

    pub fn index(self) -> u8 {
        match self {
            Motor::M1 => 1,
            Motor::M2 => 2,
            Motor::M3 => 3,
            Motor::M4 => 4,
            Motor::M5 => 5,
            Motor::M6 => 6,
        }
    }

    /// Resolve a 1-based motor number (M1 = 1) as printed on the board.
    pub fn from_index(index: u8) -> Option<Motor> {
        match index {
            1 => Some(Motor::M1),
            2 => Some(Motor::M2),
            3 => Some(Motor::M3),
            4 => Some(Motor::M4),
            5 => Some(Motor::M5),
            6 => Some(Motor::M6),
            _ => None,
        }
    }

    pub fn channels(self) -> MotorChannels {
        MOTOR_CHANNELS[self.index() as usize - 1]
    }
}

/// The pair of PWM channels feeding one H-bridge input: `positive` drives
/// the motor clockwise, `negative` counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorChannels {
    pub positive: u8,
    pub negative: u8,
}

// Wiring table for the shield. M4's terminals are reversed on this board
// revision, so its pair is swapped relative to the other motors.
const MOTOR_CHANNELS: [MotorChannels; 6] = [
    MotorChannels { positive: 11, negative: 10 }, // M1
    MotorChannels { positive: 9, negative: 8 },   // M2
    MotorChannels { positive: 7, negative: 6 },   // M3
    MotorChannels { positive: 4, negative: 5 },   // M4 (reversed)
    MotorChannels { positive: 3, negative: 2 },   // M5
    MotorChannels { positive: 1, negative: 0 },   // M6
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Cw,
    Ccw,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Cw => 1,
            Direction::Ccw => -1,
        }
    }
}

/// Whether a command reached the bus. Out-of-range channels and motor
/// numbers are skipped rather than treated as errors, so a control loop
/// never aborts over a bad index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    Skipped,
}

impl WriteOutcome {
    pub fn applied(self) -> bool {
        self == WriteOutcome::Applied
    }
}
