//! Sale document editing session

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{LineItemPayload, Sale, SaleStatus};

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;

use super::{date_or_now, products_payload, require_field, trim_to_option, ItemEditor, SessionMode};

/// Header form state for a sale
#[derive(Debug, Clone, Default)]
pub struct SaleForm {
    pub bill_id: String,
    pub sale_date: Option<DateTime<Utc>>,
    pub customer_id: String,
    pub status: SaleStatus,
    pub shipping_address: String,
}

#[derive(Debug, Serialize)]
struct SalePayload {
    bill_id: String,
    sale_date: DateTime<Utc>,
    customer_id: String,
    status: SaleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_address: Option<String>,
    adjustment: Decimal,
    total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    products: Option<Vec<LineItemPayload>>,
}

/// Editing session for one sale document
#[derive(Debug)]
pub struct SaleSession {
    gateway: Gateway,
    mode: SessionMode,
    pub form: SaleForm,
    pub editor: ItemEditor,
}

impl SaleSession {
    /// Open a create-flow session; `bill_id` collisions surface as the
    /// server's rejection
    pub fn create(gateway: &Gateway) -> Self {
        Self {
            gateway: gateway.clone(),
            mode: SessionMode::Create,
            form: SaleForm::default(),
            editor: ItemEditor::new(gateway.sale_items()),
        }
    }

    /// Open an edit-flow session on a persisted sale
    pub async fn edit(gateway: &Gateway, id: &str) -> ClientResult<Self> {
        let sale = gateway
            .sales()
            .get(id)
            .await?
            .ok_or_else(|| ClientError::not_found("Sale"))?;

        let mut editor = ItemEditor::new(gateway.sale_items());
        editor.load(sale.products.clone(), sale.adjustment);

        Ok(Self {
            gateway: gateway.clone(),
            mode: SessionMode::Edit {
                document_id: sale.id.clone(),
            },
            form: SaleForm {
                bill_id: sale.bill_id,
                sale_date: Some(sale.sale_date),
                customer_id: sale.customer_id,
                status: sale.status,
                shipping_address: sale.shipping_address.unwrap_or_default(),
            },
            editor,
        })
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn total(&self) -> Decimal {
        self.editor.total()
    }

    fn payload(&self) -> ClientResult<SalePayload> {
        Ok(SalePayload {
            bill_id: require_field("bill_id", &self.form.bill_id)?,
            sale_date: date_or_now(self.form.sale_date),
            customer_id: require_field("customer_id", &self.form.customer_id)?,
            status: self.form.status,
            shipping_address: trim_to_option(&self.form.shipping_address),
            adjustment: self.editor.adjustment(),
            total_price: self.editor.total(),
            products: products_payload(self.editor.drafts()),
        })
    }

    /// Persist the header and any draft rows
    pub async fn submit(&self) -> ClientResult<Sale> {
        let payload = self.payload()?;
        match &self.mode {
            SessionMode::Create => self.gateway.sales().create(&payload).await,
            SessionMode::Edit { document_id } => {
                self.gateway.sales().update(document_id, &payload).await
            }
        }
    }
}
