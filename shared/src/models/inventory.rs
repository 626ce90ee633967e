//! Inventory (warehouse/site) models

use serde::{Deserialize, Serialize};

/// A physical inventory location: documents reference these as the stock
/// source or destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub kind: InventoryKind,
}

/// Kinds of inventory locations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InventoryKind {
    #[default]
    Warehouse,
    Store,
    Depot,
}
