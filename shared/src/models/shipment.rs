//! Shipment document models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shipment: a captain, a vehicle and the sale orders it carries.
/// Shipments have no line-item arithmetic; their payload is header-level
/// only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub shipment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_date: Option<DateTime<Utc>>,
    pub captain_id: String,
    pub vehicle_vin: String,
    pub status: ShipmentStatus,
    /// Sale ids carried by this shipment
    #[serde(default)]
    pub orders: Vec<String>,
}

/// Shipment progress status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Cancelled => "cancelled",
        }
    }
}
