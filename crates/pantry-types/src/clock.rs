//! Source of the current calendar date.
//!
//! Expiration status and default obtained dates depend on "today". Taking
//! the date from an injected [`Clock`] keeps those rules pure and testable.

use std::fmt;

use chrono::NaiveDate;

/// Provides the current local calendar date.
pub trait Clock: Send + Sync {
    /// Today's date, already truncated to the start of the day.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Debug for FixedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedClock({})", self.0)
    }
}
