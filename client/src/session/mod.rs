//! Document editing sessions
//!
//! One session lives for as long as a transactional document (purchase,
//! sale, transfer, shipment) is open in the editor. It owns two row
//! collections: persisted rows loaded with the document, and drafts the
//! user is still typing. Row edits against persisted rows reconcile with
//! the server immediately; drafts only travel on submit.

mod purchase;
mod sale;
mod shipment;
mod transfer;

pub use purchase::*;
pub use sale::*;
pub use shipment::*;
pub use transfer::*;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use shared::models::{
    document_total, parse_or_zero, ExistingLineItem, LineItemDraft, LineItemPatch,
    LineItemPayload,
};

use crate::error::{ClientError, ClientResult};
use crate::gateway::Collection;

/// Whether a session creates a fresh document or edits a persisted one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Edit { document_id: String },
}

/// Line-item state for one open document
#[derive(Debug)]
pub struct ItemEditor {
    rows: Collection<ExistingLineItem>,
    existing: Vec<ExistingLineItem>,
    drafts: Vec<LineItemDraft>,
    /// Raw adjustment form field; malformed input counts as zero
    adjustment: String,
}

impl ItemEditor {
    pub fn new(rows: Collection<ExistingLineItem>) -> Self {
        Self {
            rows,
            existing: Vec::new(),
            drafts: Vec::new(),
            adjustment: String::new(),
        }
    }

    /// Populate persisted rows and the adjustment at editor-open time
    pub fn load(&mut self, existing: Vec<ExistingLineItem>, adjustment: Decimal) {
        self.existing = existing;
        self.adjustment = adjustment.to_string();
        self.drafts.clear();
    }

    pub fn existing(&self) -> &[ExistingLineItem] {
        &self.existing
    }

    pub fn drafts(&self) -> &[LineItemDraft] {
        &self.drafts
    }

    pub fn set_adjustment(&mut self, raw: impl Into<String>) {
        self.adjustment = raw.into();
    }

    pub fn adjustment(&self) -> Decimal {
        parse_or_zero(&self.adjustment)
    }

    /// Append a blank draft row, returning its position. No remote call.
    pub fn add_row(&mut self) -> usize {
        self.drafts.push(LineItemDraft::default());
        self.drafts.len() - 1
    }

    /// Append a pre-filled draft row, returning its position. No remote
    /// call.
    pub fn add_draft(&mut self, draft: LineItemDraft) -> usize {
        self.drafts.push(draft);
        self.drafts.len() - 1
    }

    /// Remove a draft row by position. No remote call; the row was never
    /// persisted.
    pub fn remove_row(&mut self, index: usize) {
        if index < self.drafts.len() {
            self.drafts.remove(index);
        }
    }

    pub fn draft_mut(&mut self, index: usize) -> Option<&mut LineItemDraft> {
        self.drafts.get_mut(index)
    }

    /// The grand total over persisted and draft rows, minus the
    /// adjustment. Pure and synchronous; recomputed on every call so the
    /// displayed total is always a function of current form state.
    pub fn total(&self) -> Decimal {
        let amounts = self
            .existing
            .iter()
            .map(ExistingLineItem::amounts)
            .chain(self.drafts.iter().map(LineItemDraft::amounts));
        document_total(amounts, self.adjustment())
    }

    /// Send a partial update for a persisted row, keyed by its server id.
    ///
    /// Returns `Ok(None)` when the patch carries no fields at all (nothing
    /// to reconcile). Local state is not touched; the bound form field
    /// already shows the user's edit, and the server's echo comes back to
    /// the caller.
    pub async fn update_existing(
        &self,
        index: usize,
        patch: LineItemPatch,
    ) -> ClientResult<Option<ExistingLineItem>> {
        let item = self
            .existing
            .get(index)
            .ok_or_else(|| ClientError::validation("row", "row index out of range"))?;
        if patch.is_empty() {
            return Ok(None);
        }
        let updated = self.rows.update(&item.id, &patch).await?;
        Ok(Some(updated))
    }

    /// Delete a persisted row. The local row is removed only after the
    /// remote delete succeeds; on failure it stays put so the user can
    /// retry.
    pub async fn remove_existing(&mut self, index: usize) -> ClientResult<bool> {
        let item = self
            .existing
            .get(index)
            .ok_or_else(|| ClientError::validation("row", "row index out of range"))?;
        self.rows.delete(&item.id).await?;
        self.existing.remove(index);
        Ok(true)
    }
}

/// Trim a header text field, mapping a blank result to absent so it is
/// stripped from the payload instead of travelling as null
pub(crate) fn trim_to_option(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A missing document date defaults to "now"
pub(crate) fn date_or_now(date: Option<DateTime<Utc>>) -> DateTime<Utc> {
    date.unwrap_or_else(Utc::now)
}

/// Draft rows as a submit payload. An empty set is omitted from the body
/// entirely, never sent as an empty collection.
pub(crate) fn products_payload(drafts: &[LineItemDraft]) -> Option<Vec<LineItemPayload>> {
    if drafts.is_empty() {
        None
    } else {
        Some(drafts.iter().map(LineItemDraft::to_payload).collect())
    }
}

/// Non-blank check for required header identifiers, surfaced inline before
/// any remote call
pub(crate) fn require_field(field: &'static str, raw: &str) -> ClientResult<String> {
    trim_to_option(raw).ok_or_else(|| ClientError::validation(field, format!("{} is required", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_to_option() {
        assert_eq!(trim_to_option("  MR-1 "), Some("MR-1".to_string()));
        assert_eq!(trim_to_option("   "), None);
    }

    #[test]
    fn test_products_payload_empty_is_absent() {
        assert!(products_payload(&[]).is_none());
        let drafts = vec![LineItemDraft {
            product: "p1".into(),
            quantity: "1".into(),
            unit_price: "50".into(),
            discount: "0".into(),
        }];
        assert_eq!(products_payload(&drafts).unwrap().len(), 1);
    }

    #[test]
    fn test_require_field() {
        assert!(require_field("mr_id", " MR-9 ").is_ok());
        assert!(matches!(
            require_field("mr_id", "  "),
            Err(ClientError::Validation { .. })
        ));
    }
}
