//! Purchase document models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExistingLineItem;

/// A purchase document as returned by the collection API, line items
/// included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    pub mr_id: String,
    pub purchase_date: DateTime<Utc>,
    /// Vendor id the material request was raised against
    pub vendor: String,
    /// Receiving inventory id
    pub inventory: String,
    #[serde(default)]
    pub adjustment: Decimal,
    /// Informational; the authoritative value is derived client-side from
    /// the current rows
    #[serde(default)]
    pub total_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub products: Vec<ExistingLineItem>,
}
