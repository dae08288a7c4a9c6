use chrono::NaiveDate;
use pantry_types::{Clock, Item};
use serde::{Deserialize, Serialize};

use crate::config::Threshold;

/// Freshness of an item relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationStatus {
    /// The expiration date is before today.
    Expired,
    /// Expires today or within the threshold.
    ExpiringSoon,
    /// No expiration date, or further out than the threshold.
    Normal,
}

impl ExpirationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring soon",
            Self::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Calendar days from `today` until `expiration`. Negative once past.
pub fn days_until(expiration: NaiveDate, today: NaiveDate) -> i64 {
    expiration.signed_duration_since(today).num_days()
}

/// Classify an expiration date.
///
/// `None` is always [`ExpirationStatus::Normal`].
pub fn classify(
    expiration: Option<NaiveDate>,
    today: NaiveDate,
    threshold: Threshold,
) -> ExpirationStatus {
    let Some(expiration) = expiration else {
        return ExpirationStatus::Normal;
    };
    let days = days_until(expiration, today);
    if days < 0 {
        ExpirationStatus::Expired
    } else if days <= i64::from(threshold.days()) {
        ExpirationStatus::ExpiringSoon
    } else {
        ExpirationStatus::Normal
    }
}

/// Status of `item` as of `clock`'s today.
pub fn status(item: &Item, threshold: Threshold, clock: &dyn Clock) -> ExpirationStatus {
    classify(item.expiration_date, clock.today(), threshold)
}
