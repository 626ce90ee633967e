//! Vehicle models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A delivery vehicle, identified by its VIN on shipment documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub vin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Load capacity in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_kg: Option<Decimal>,
}
