//! Line items and the document total calculation
//!
//! A line item is one product/quantity/price/discount row within a
//! transactional document (purchase, sale, transfer). The total shown on a
//! document form is always derived from the current rows plus a flat
//! adjustment, never stored independently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parse a raw form field into a number, treating blank or malformed input
/// as zero. Form state carries raw strings; a half-typed value must degrade
/// to a zero contribution instead of failing.
pub fn parse_or_zero(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

/// The numeric content of one row, independent of whether the row is
/// persisted or still being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub discount: Decimal,
}

impl LineAmounts {
    pub fn new(quantity: Decimal, unit_price: Decimal, discount: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            discount,
        }
    }

    /// Row subtotal: `quantity * unit_price * (100 - discount) / 100`
    pub fn subtotal(&self) -> Decimal {
        self.quantity * self.unit_price * (Decimal::from(100) - self.discount)
            / Decimal::from(100)
    }
}

/// Grand total over every row of a document, minus the flat adjustment,
/// clamped at zero. Discounts and adjustments can never produce a negative
/// total.
pub fn document_total<I>(items: I, adjustment: Decimal) -> Decimal
where
    I: IntoIterator<Item = LineAmounts>,
{
    let sum: Decimal = items.into_iter().map(|item| item.subtotal()).sum();
    (sum - adjustment).max(Decimal::ZERO)
}

/// An unpersisted line item bound to form inputs. Fields hold the raw text
/// the user typed; they gain identity only after the document is submitted
/// and the authoritative list is reloaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItemDraft {
    pub product: String,
    pub quantity: String,
    pub unit_price: String,
    pub discount: String,
}

impl LineItemDraft {
    pub fn amounts(&self) -> LineAmounts {
        LineAmounts {
            quantity: parse_or_zero(&self.quantity),
            unit_price: parse_or_zero(&self.unit_price),
            discount: parse_or_zero(&self.discount),
        }
    }

    /// The shape sent to the server inside a document payload.
    pub fn to_payload(&self) -> LineItemPayload {
        let amounts = self.amounts();
        LineItemPayload {
            product: self.product.clone(),
            quantity: amounts.quantity,
            unit_price: amounts.unit_price,
            discount: amounts.discount,
        }
    }
}

/// A new line item as serialized into a document submit payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemPayload {
    pub product: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub discount: Decimal,
}

/// A persisted line item. The server-assigned `id` is immutable and
/// uniquely identifies the row for the whole editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingLineItem {
    pub id: String,
    pub product: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub discount: Decimal,
}

impl ExistingLineItem {
    pub fn amounts(&self) -> LineAmounts {
        LineAmounts {
            quantity: self.quantity,
            unit_price: self.unit_price,
            discount: self.discount,
        }
    }
}

/// A partial update for a persisted line item. Absent fields are omitted
/// from the request body entirely, so "unset" and "explicitly zero" are
/// distinct at the type level.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LineItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
}

impl LineItemPatch {
    pub fn new(
        quantity: Option<Decimal>,
        unit_price: Option<Decimal>,
        discount: Option<Decimal>,
    ) -> Self {
        Self {
            quantity,
            unit_price,
            discount,
        }
    }

    /// Legacy form policy inherited from the dashboard: a zero or blank
    /// field means "no change", so only strictly positive values are sent.
    /// Callers that need to set a field to an explicit zero must use
    /// [`LineItemPatch::new`] instead.
    pub fn from_positive_fields(
        quantity: Decimal,
        unit_price: Decimal,
        discount: Decimal,
    ) -> Self {
        let keep = |v: Decimal| (v > Decimal::ZERO).then_some(v);
        Self {
            quantity: keep(quantity),
            unit_price: keep(unit_price),
            discount: keep(discount),
        }
    }

    /// True when no field would be sent at all.
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit_price.is_none() && self.discount.is_none()
    }
}
