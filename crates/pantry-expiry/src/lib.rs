//! Expiration classification for Pantry.
//!
//! Status is a pure function of an item's expiration date, "today", and a
//! configured [`Threshold`]. It is computed on every query and never stored
//! on the item, since "today" moves.
//!
//! - [`status`]: [`ExpirationStatus`] and the classification rules
//! - [`config`]: [`Threshold`], [`HighlightConfig`], [`Highlight`]
//! - [`summary`]: [`ExpirySummary`] counts for the status banner

pub mod config;
pub mod error;
pub mod status;
pub mod summary;

pub use config::{Highlight, HighlightConfig, Threshold};
pub use error::{ExpiryError, Result};
pub use status::{classify, days_until, status, ExpirationStatus};
pub use summary::ExpirySummary;
