//! Shipment editing session
//!
//! Shipments are header-level documents: a captain, a vehicle and the sale
//! orders on board. There is no line-item arithmetic and no per-row
//! reconciliation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shared::models::{Shipment, ShipmentStatus};
use shared::validation::validate_vin;

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;

use super::{date_or_now, require_field, SessionMode};

/// Header form state for a shipment
#[derive(Debug, Clone, Default)]
pub struct ShipmentForm {
    pub shipment_id: String,
    pub shipment_date: Option<DateTime<Utc>>,
    pub captain_id: String,
    pub vehicle_vin: String,
    pub status: ShipmentStatus,
    pub orders: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ShipmentPayload {
    shipment_id: String,
    shipment_date: DateTime<Utc>,
    captain_id: String,
    vehicle_vin: String,
    status: ShipmentStatus,
    orders: Vec<String>,
}

/// Editing session for one shipment
#[derive(Debug)]
pub struct ShipmentSession {
    gateway: Gateway,
    mode: SessionMode,
    pub form: ShipmentForm,
}

impl ShipmentSession {
    pub fn create(gateway: &Gateway) -> Self {
        Self {
            gateway: gateway.clone(),
            mode: SessionMode::Create,
            form: ShipmentForm::default(),
        }
    }

    /// Open an edit-flow session on a persisted shipment
    pub async fn edit(gateway: &Gateway, id: &str) -> ClientResult<Self> {
        let shipment = gateway
            .shipments()
            .get(id)
            .await?
            .ok_or_else(|| ClientError::not_found("Shipment"))?;

        Ok(Self {
            gateway: gateway.clone(),
            mode: SessionMode::Edit {
                document_id: shipment.id.clone(),
            },
            form: ShipmentForm {
                shipment_id: shipment.shipment_id,
                shipment_date: shipment.shipment_date,
                captain_id: shipment.captain_id,
                vehicle_vin: shipment.vehicle_vin,
                status: shipment.status,
                orders: shipment.orders,
            },
        })
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    /// Attach a sale order to the shipment. Duplicates are ignored; an
    /// order rides along once.
    pub fn add_order(&mut self, sale_id: impl Into<String>) {
        let sale_id = sale_id.into();
        if !self.form.orders.contains(&sale_id) {
            self.form.orders.push(sale_id);
        }
    }

    pub fn remove_order(&mut self, sale_id: &str) {
        self.form.orders.retain(|o| o != sale_id);
    }

    fn payload(&self) -> ClientResult<ShipmentPayload> {
        let vehicle_vin = require_field("vehicle_vin", &self.form.vehicle_vin)?;
        validate_vin(&vehicle_vin)
            .map_err(|msg| ClientError::validation("vehicle_vin", msg))?;

        Ok(ShipmentPayload {
            shipment_id: require_field("shipment_id", &self.form.shipment_id)?,
            shipment_date: date_or_now(self.form.shipment_date),
            captain_id: require_field("captain_id", &self.form.captain_id)?,
            vehicle_vin,
            status: self.form.status,
            orders: self.form.orders.clone(),
        })
    }

    /// Persist the shipment header and its order list
    pub async fn submit(&self) -> ClientResult<Shipment> {
        let payload = self.payload()?;
        match &self.mode {
            SessionMode::Create => self.gateway.shipments().create(&payload).await,
            SessionMode::Edit { document_id } => {
                self.gateway.shipments().update(document_id, &payload).await
            }
        }
    }
}
