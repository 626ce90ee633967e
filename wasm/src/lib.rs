//! WebAssembly module for the Logistics & Inventory Dashboard
//!
//! Provides client-side computation for:
//! - Document total calculation (line items + adjustment)
//! - Row subtotal calculation
//! - Role/permission checks for screen gating
//! - Form field validation

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::models::{can, document_total, Action, LineAmounts, LineItemDraft, Resource, Role};
use shared::validation::{validate_discount_percent, validate_vin};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn dec(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or_default()
}

/// Compute the grand total for a document form.
///
/// `items_json` is the draft rows array as the screen holds it (raw string
/// fields, malformed input counts as zero). The result is clamped at zero.
#[wasm_bindgen]
pub fn calculate_document_total(items_json: &str, adjustment: f64) -> Result<f64, JsValue> {
    let drafts: Vec<LineItemDraft> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid items JSON: {}", e)))?;

    let total = document_total(drafts.iter().map(LineItemDraft::amounts), dec(adjustment));
    Ok(total.to_string().parse().unwrap_or(0.0))
}

/// Subtotal for one row: quantity * unit_price * (100 - discount) / 100
#[wasm_bindgen]
pub fn calculate_row_subtotal(quantity: f64, unit_price: f64, discount: f64) -> f64 {
    let amounts = LineAmounts::new(dec(quantity), dec(unit_price), dec(discount));
    amounts.subtotal().to_string().parse().unwrap_or(0.0)
}

/// Check whether a role may perform an action on a resource.
/// Unknown role/resource/action strings deny.
#[wasm_bindgen]
pub fn role_can(role: &str, resource: &str, action: &str) -> bool {
    let parse = |s: &str| format!("\"{}\"", s);
    let role: Role = match serde_json::from_str(&parse(role)) {
        Ok(r) => r,
        Err(_) => return false,
    };
    let resource: Resource = match serde_json::from_str(&parse(resource)) {
        Ok(r) => r,
        Err(_) => return false,
    };
    let action: Action = match serde_json::from_str(&parse(action)) {
        Ok(a) => a,
        Err(_) => return false,
    };
    can(role, resource, action)
}

/// Validate a discount percentage (0-100)
#[wasm_bindgen]
pub fn is_valid_discount(discount: f64) -> bool {
    validate_discount_percent(dec(discount)).is_ok()
}

/// Validate a vehicle identification number
#[wasm_bindgen]
pub fn is_valid_vin(vin: &str) -> bool {
    validate_vin(vin).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_document_total() {
        let items = r#"[
            {"product": "p1", "quantity": "5", "unit_price": "100", "discount": "10"},
            {"product": "p2", "quantity": "1", "unit_price": "50", "discount": ""}
        ]"#;
        let total = calculate_document_total(items, 50.0).unwrap();
        assert!((total - 450.0).abs() < 0.001);
    }

    #[test]
    fn test_document_total_clamped() {
        let items = r#"[{"product": "p1", "quantity": "2", "unit_price": "10", "discount": "0"}]"#;
        let total = calculate_document_total(items, 25.0).unwrap();
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_row_subtotal() {
        let subtotal = calculate_row_subtotal(2.0, 10.0, 50.0);
        assert!((subtotal - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_role_can() {
        assert!(role_can("admin", "purchase", "delete"));
        assert!(role_can("salesperson", "sale", "create"));
        assert!(!role_can("captain", "purchase", "view"));
        assert!(!role_can("nobody", "purchase", "view"));
    }

    #[test]
    fn test_discount_validation() {
        assert!(is_valid_discount(0.0));
        assert!(is_valid_discount(100.0));
        assert!(!is_valid_discount(101.0));
        assert!(!is_valid_discount(-1.0));
    }
}
