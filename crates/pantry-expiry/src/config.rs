use serde::{Deserialize, Serialize};

use crate::error::{ExpiryError, Result};
use crate::status::ExpirationStatus;

/// Number of days before expiration at which an item counts as expiring soon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Threshold(u32);

impl Threshold {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 30;
    pub const DEFAULT: Threshold = Threshold(3);

    pub fn new(days: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&days) {
            return Err(ExpiryError::ThresholdOutOfRange {
                value: days,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(days))
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Threshold {
    type Error = ExpiryError;

    fn try_from(days: u32) -> Result<Self> {
        Self::new(days)
    }
}

impl From<Threshold> for u32 {
    fn from(t: Threshold) -> Self {
        t.0
    }
}

/// Visual emphasis for a list row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Expired,
    ExpiringSoon,
}

/// Which statuses get highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    pub highlight_expired: bool,
    pub highlight_expiring_soon: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            highlight_expired: true,
            highlight_expiring_soon: true,
        }
    }
}

impl HighlightConfig {
    /// The highlight for `status`, if that status is enabled.
    pub fn highlight(&self, status: ExpirationStatus) -> Option<Highlight> {
        match status {
            ExpirationStatus::Expired if self.highlight_expired => Some(Highlight::Expired),
            ExpirationStatus::ExpiringSoon if self.highlight_expiring_soon => {
                Some(Highlight::ExpiringSoon)
            }
            _ => None,
        }
    }
}
