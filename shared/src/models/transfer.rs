//! Inventory transfer document models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExistingLineItem;

/// A stock transfer between two inventory locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub trf_id: String,
    pub transfer_date: DateTime<Utc>,
    pub source_inventory: String,
    pub destination_inventory: String,
    #[serde(default)]
    pub adjustment: Decimal,
    #[serde(default)]
    pub total_price: Decimal,
    #[serde(default)]
    pub products: Vec<ExistingLineItem>,
}
