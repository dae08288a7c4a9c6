use pantry_expiry::{ExpirationStatus, Highlight};
use pantry_types::ItemId;
use serde::Serialize;

/// One line of an item list, with every value already resolved for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub short_id: String,
    pub name: String,
    /// Location name, or "Uncategorized".
    pub location: String,
    pub quantity: String,
    /// Formatted expiration date, or "Unknown".
    pub expiration: String,
    pub status: ExpirationStatus,
    /// Days until expiration; negative once expired.
    pub days_left: Option<i64>,
    /// `None` when the status is normal or its highlight is turned off.
    pub highlight: Option<Highlight>,
    /// Present only when obtained dates are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obtained: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
