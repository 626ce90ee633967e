//! Select-option fetchers
//!
//! Normalization into `LabeledOption` happens here, once, at the data-fetch
//! boundary. Screens never see raw entity shapes in their selects.

use shared::models::Role;
use shared::types::LabeledOption;

use crate::error::ClientResult;
use crate::gateway::Gateway;

/// Vendors as select options (id/name)
pub async fn vendor_options(gateway: &Gateway) -> ClientResult<Vec<LabeledOption>> {
    Ok(gateway
        .vendors()
        .list()
        .await?
        .into_iter()
        .map(|v| LabeledOption::new(v.id, v.name))
        .collect())
}

/// Products as select options (id/name)
pub async fn product_options(gateway: &Gateway) -> ClientResult<Vec<LabeledOption>> {
    Ok(gateway
        .products()
        .list()
        .await?
        .into_iter()
        .map(|p| LabeledOption::new(p.id, p.name))
        .collect())
}

/// Inventory locations as select options (id/name)
pub async fn inventory_options(gateway: &Gateway) -> ClientResult<Vec<LabeledOption>> {
    Ok(gateway
        .inventories()
        .list()
        .await?
        .into_iter()
        .map(|i| LabeledOption::new(i.id, i.name))
        .collect())
}

/// Customers as select options (id/name)
pub async fn customer_options(gateway: &Gateway) -> ClientResult<Vec<LabeledOption>> {
    Ok(gateway
        .customers()
        .list()
        .await?
        .into_iter()
        .map(|c| LabeledOption::new(c.id, c.name))
        .collect())
}

/// Vehicles as select options, keyed by VIN and labeled by model when one
/// is on record
pub async fn vehicle_options(gateway: &Gateway) -> ClientResult<Vec<LabeledOption>> {
    Ok(gateway
        .vehicles()
        .list()
        .await?
        .into_iter()
        .map(|v| match v.model {
            Some(model) => LabeledOption::new(v.vin.clone(), format!("{} ({})", model, v.vin)),
            None => LabeledOption::from_plain(v.vin),
        })
        .collect())
}

/// Employees holding the Captain role, for shipment assignment
pub async fn captain_options(gateway: &Gateway) -> ClientResult<Vec<LabeledOption>> {
    Ok(gateway
        .employees()
        .list()
        .await?
        .into_iter()
        .filter(|e| e.role == Role::Captain)
        .map(|e| LabeledOption::new(e.id, e.name))
        .collect())
}
