use std::path::PathBuf;

use pantry_types::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("location not found: {0}")]
    LocationNotFound(String),

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidSetting {
        key: String,
        value: String,
        reason: String,
    },

    #[error("cannot read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file {path}: {reason}")]
    SettingsParse { path: PathBuf, reason: String },

    #[error("cannot encode settings: {0}")]
    SettingsEncode(String),

    #[error("registry error: {0}")]
    Registry(#[from] pantry_registry::RegistryError),

    #[error("item error: {0}")]
    Item(#[from] pantry_items::ItemError),

    #[error("store error: {0}")]
    Store(#[from] pantry_store::StoreError),

    #[error("expiry error: {0}")]
    Expiry(#[from] pantry_expiry::ExpiryError),
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LocationNotFound(_) => ErrorKind::NotFound,
            Self::UnknownSetting(_)
            | Self::InvalidSetting { .. }
            | Self::SettingsIo { .. }
            | Self::SettingsParse { .. }
            | Self::SettingsEncode(_) => ErrorKind::Config,
            Self::Registry(e) => e.kind(),
            Self::Item(e) => e.kind(),
            Self::Store(e) => e.kind(),
            Self::Expiry(e) => e.kind(),
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
