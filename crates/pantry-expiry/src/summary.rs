use serde::{Deserialize, Serialize};

use crate::status::ExpirationStatus;

/// Status counts over a set of items, shown as a banner above a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirySummary {
    pub expired: usize,
    pub expiring_soon: usize,
    pub normal: usize,
}

impl ExpirySummary {
    pub fn record(&mut self, status: ExpirationStatus) {
        match status {
            ExpirationStatus::Expired => self.expired += 1,
            ExpirationStatus::ExpiringSoon => self.expiring_soon += 1,
            ExpirationStatus::Normal => self.normal += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.expired + self.expiring_soon + self.normal
    }

    /// Banner text, or `None` when nothing needs attention.
    pub fn banner(&self) -> Option<String> {
        let plural = |n: usize| if n == 1 { "item" } else { "items" };
        match (self.expired, self.expiring_soon) {
            (0, 0) => None,
            (e, 0) => Some(format!("{e} {} expired", plural(e))),
            (0, s) => Some(format!("{s} {} expiring soon", plural(s))),
            (e, s) => Some(format!(
                "{e} {} expired, {s} expiring soon",
                plural(e)
            )),
        }
    }
}

impl FromIterator<ExpirationStatus> for ExpirySummary {
    fn from_iter<T: IntoIterator<Item = ExpirationStatus>>(iter: T) -> Self {
        let mut summary = Self::default();
        for status in iter {
            summary.record(status);
        }
        summary
    }
}
