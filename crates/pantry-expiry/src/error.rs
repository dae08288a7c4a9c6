use pantry_types::ErrorKind;
use thiserror::Error;

/// Errors from expiry configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The expiring-soon threshold is outside `MIN..=MAX` days.
    #[error("expiring-soon threshold must be between {min} and {max} days, got {value}")]
    ThresholdOutOfRange { value: u32, min: u32, max: u32 },
}

impl ExpiryError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Config
    }
}

pub type Result<T> = std::result::Result<T, ExpiryError>;
