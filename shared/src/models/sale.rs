//! Sale document models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExistingLineItem;

/// A sale document as returned by the collection API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub bill_id: String,
    pub sale_date: DateTime<Utc>,
    pub customer_id: String,
    pub status: SaleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub adjustment: Decimal,
    #[serde(default)]
    pub total_price: Decimal,
    #[serde(default)]
    pub products: Vec<ExistingLineItem>,
}

/// Sale fulfilment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    #[default]
    Pending,
    Approved,
    Delivered,
    Cancelled,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pending",
            SaleStatus::Approved => "approved",
            SaleStatus::Delivered => "delivered",
            SaleStatus::Cancelled => "cancelled",
        }
    }
}
