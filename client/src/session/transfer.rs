//! Transfer document editing session

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{LineItemPayload, Transfer};

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;

use super::{date_or_now, products_payload, require_field, ItemEditor, SessionMode};

/// Header form state for a stock transfer
#[derive(Debug, Clone, Default)]
pub struct TransferForm {
    pub trf_id: String,
    pub transfer_date: Option<DateTime<Utc>>,
    pub source_inventory: String,
    pub destination_inventory: String,
}

#[derive(Debug, Serialize)]
struct TransferPayload {
    trf_id: String,
    transfer_date: DateTime<Utc>,
    source_inventory: String,
    destination_inventory: String,
    adjustment: Decimal,
    total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    products: Option<Vec<LineItemPayload>>,
}

/// Editing session for one transfer document
#[derive(Debug)]
pub struct TransferSession {
    gateway: Gateway,
    mode: SessionMode,
    pub form: TransferForm,
    pub editor: ItemEditor,
}

impl TransferSession {
    pub fn create(gateway: &Gateway) -> Self {
        Self {
            gateway: gateway.clone(),
            mode: SessionMode::Create,
            form: TransferForm::default(),
            editor: ItemEditor::new(gateway.transfer_items()),
        }
    }

    /// Open an edit-flow session on a persisted transfer
    pub async fn edit(gateway: &Gateway, id: &str) -> ClientResult<Self> {
        let transfer = gateway
            .transfers()
            .get(id)
            .await?
            .ok_or_else(|| ClientError::not_found("Transfer"))?;

        let mut editor = ItemEditor::new(gateway.transfer_items());
        editor.load(transfer.products.clone(), transfer.adjustment);

        Ok(Self {
            gateway: gateway.clone(),
            mode: SessionMode::Edit {
                document_id: transfer.id.clone(),
            },
            form: TransferForm {
                trf_id: transfer.trf_id,
                transfer_date: Some(transfer.transfer_date),
                source_inventory: transfer.source_inventory,
                destination_inventory: transfer.destination_inventory,
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

    fn payload(&self) -> ClientResult<TransferPayload> {
        let source = require_field("source_inventory", &self.form.source_inventory)?;
        let destination = require_field("destination_inventory", &self.form.destination_inventory)?;
        if source == destination {
            return Err(ClientError::validation(
                "destination_inventory",
                "Source and destination inventories must differ",
            ));
        }
        Ok(TransferPayload {
            trf_id: require_field("trf_id", &self.form.trf_id)?,
            transfer_date: date_or_now(self.form.transfer_date),
            source_inventory: source,
            destination_inventory: destination,
            adjustment: self.editor.adjustment(),
            total_price: self.editor.total(),
            products: products_payload(self.editor.drafts()),
        })
    }

    /// Persist the header and any draft rows
    pub async fn submit(&self) -> ClientResult<Transfer> {
        let payload = self.payload()?;
        match &self.mode {
            SessionMode::Create => self.gateway.transfers().create(&payload).await,
            SessionMode::Edit { document_id } => {
                self.gateway.transfers().update(document_id, &payload).await
            }
        }
    }
}
