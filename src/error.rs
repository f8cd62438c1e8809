use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ShieldError {
    #[error("i2c bus communication error")]
    Communication,
}
