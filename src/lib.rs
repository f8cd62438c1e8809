pub mod conversion;
pub mod driver;
pub mod error;
pub mod model;
pub mod registers;
pub mod transport;
#[cfg(target_os = "linux")]
pub mod transport_rppal;

#[cfg(all(feature = "python", target_os = "linux"))]
pub mod python;

pub use driver::RoverShield;
pub use error::ShieldError;
pub use model::{Direction, Motor, MotorChannels, Servo, WriteOutcome};
pub use transport::PwmTransport;
#[cfg(target_os = "linux")]
pub use transport_rppal::RppalTransport;
