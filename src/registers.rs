//! PCA9685 register map and fixed chip parameters.

/// Default 7-bit bus address of the PCA9685 on the shield.
pub const PCA9685_ADDRESS: u8 = 0x40;

/// Internal oscillator frequency.
pub const OSC_CLOCK_HZ: u32 = 25_000_000;

/// Ticks per PWM period (12-bit counter).
pub const PWM_TICKS: u32 = 4096;

/// Highest addressable output channel.
pub const LAST_CHANNEL: u8 = 15;

#[allow(dead_code)]
#[derive(Debug, Copy, Clone)]
pub enum Register {
    Mode1 = 0x00,
    Mode2 = 0x01,
    Subadr1 = 0x02,
    Subadr2 = 0x03,
    Subadr3 = 0x04,
    // Per-channel on/off tick pairs start here, 4 registers per channel
    Led0OnL = 0x06,
    Led0OnH = 0x07,
    Led0OffL = 0x08,
    Led0OffH = 0x09,
    AllLedOnL = 0xFA,
    AllLedOnH = 0xFB,
    AllLedOffL = 0xFC,
    AllLedOffH = 0xFD,
    Prescale = 0xFE,
}

impl Register {
    #[inline(always)]
    pub fn addr(self) -> u8 {
        self as u8
    }
}

// MODE1 bits
pub const MODE1_RESTART: u8 = 0x80;
pub const MODE1_AUTO_INCREMENT: u8 = 0x20;
pub const MODE1_SLEEP: u8 = 0x10;
pub const MODE1_ALLCALL: u8 = 0x01;
