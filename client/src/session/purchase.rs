//! Purchase document editing session

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{LineItemPayload, Purchase};

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;

use super::{date_or_now, products_payload, require_field, trim_to_option, ItemEditor, SessionMode};

/// Header form state for a purchase, bound to the screen's inputs
#[derive(Debug, Clone, Default)]
pub struct PurchaseForm {
    pub mr_id: String,
    pub purchase_date: Option<DateTime<Utc>>,
    pub vendor: String,
    pub inventory: String,
    pub status: String,
}

/// Wire shape of a purchase submit. Optional fields that format to
/// nothing are stripped rather than sent as null, and `products` is
/// omitted entirely when there are no new rows.
#[derive(Debug, Serialize)]
struct PurchasePayload {
    mr_id: String,
    purchase_date: DateTime<Utc>,
    vendor: String,
    inventory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    adjustment: Decimal,
    total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    products: Option<Vec<LineItemPayload>>,
}

/// Editing session for one purchase document
#[derive(Debug)]
pub struct PurchaseSession {
    gateway: Gateway,
    mode: SessionMode,
    pub form: PurchaseForm,
    pub editor: ItemEditor,
}

impl PurchaseSession {
    /// Open a create-flow session: no persisted rows, submit always
    /// creates. `mr_id` uniqueness is not checked client-side; a collision
    /// is the server's rejection to report.
    pub fn create(gateway: &Gateway) -> Self {
        Self {
            gateway: gateway.clone(),
            mode: SessionMode::Create,
            form: PurchaseForm::default(),
            editor: ItemEditor::new(gateway.purchase_items()),
        }
    }

    /// Open an edit-flow session on a persisted purchase, loading its
    /// header and line items. A missing document is an explicit
    /// `NotFound`, letting the caller decide whether to surface it.
    pub async fn edit(gateway: &Gateway, id: &str) -> ClientResult<Self> {
        let purchase = gateway
            .purchases()
            .get(id)
            .await?
            .ok_or_else(|| ClientError::not_found("Purchase"))?;

        let mut editor = ItemEditor::new(gateway.purchase_items());
        editor.load(purchase.products.clone(), purchase.adjustment);

        Ok(Self {
            gateway: gateway.clone(),
            mode: SessionMode::Edit {
                document_id: purchase.id.clone(),
            },
            form: PurchaseForm {
                mr_id: purchase.mr_id,
                purchase_date: Some(purchase.purchase_date),
                vendor: purchase.vendor,
                inventory: purchase.inventory,
                status: purchase.status.unwrap_or_default(),
            },
            editor,
        })
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    /// Current grand total for the form
    pub fn total(&self) -> Decimal {
        self.editor.total()
    }

    fn payload(&self) -> ClientResult<PurchasePayload> {
        Ok(PurchasePayload {
            mr_id: require_field("mr_id", &self.form.mr_id)?,
            purchase_date: date_or_now(self.form.purchase_date),
            vendor: require_field("vendor", &self.form.vendor)?,
            inventory: require_field("inventory", &self.form.inventory)?,
            status: trim_to_option(&self.form.status),
            adjustment: self.editor.adjustment(),
            total_price: self.editor.total(),
            products: products_payload(self.editor.drafts()),
        })
    }

    /// Persist the header and any draft rows. On success the caller gets
    /// the server's view of the document back and is expected to refresh
    /// the collection and close the editor; on failure form state is left
    /// untouched for a retry.
    pub async fn submit(&self) -> ClientResult<Purchase> {
        let payload = self.payload()?;
        match &self.mode {
            SessionMode::Create => self.gateway.purchases().create(&payload).await,
            SessionMode::Edit { document_id } => {
                self.gateway.purchases().update(document_id, &payload).await
            }
        }
    }
}
