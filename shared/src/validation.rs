//! Validation utilities for the Logistics & Inventory Dashboard
//!
//! Checks that run before any remote call so that bad input never reaches
//! the network.

use rust_decimal::Decimal;

// ============================================================================
// Line-Item Validations
// ============================================================================

/// Validate a discount percentage (0–100)
pub fn validate_discount_percent(discount: Decimal) -> Result<(), &'static str> {
    if discount < Decimal::ZERO || discount > Decimal::from(100) {
        return Err("Discount must be between 0 and 100 percent");
    }
    Ok(())
}

/// Validate a quantity is non-negative
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a unit price is non-negative
pub fn validate_unit_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Unit price cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Header Validations
// ============================================================================

/// Validate a document identifier (mr_id, bill_id, trf_id, shipment_id)
/// is non-blank after trimming
pub fn validate_document_id(id: &str) -> Result<(), &'static str> {
    if id.trim().is_empty() {
        return Err("Document identifier cannot be blank");
    }
    Ok(())
}

/// Validate a vehicle identification number (17 characters, no I/O/Q)
pub fn validate_vin(vin: &str) -> Result<(), &'static str> {
    if vin.len() != 17 {
        return Err("VIN must be 17 characters");
    }
    if !vin
        .chars()
        .all(|c| c.is_ascii_alphanumeric() && !matches!(c, 'I' | 'O' | 'Q' | 'i' | 'o' | 'q'))
    {
        return Err("VIN contains invalid characters");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate phone number format (digits, 7-15, optional leading +)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let trimmed = phone.strip_prefix('+').unwrap_or(phone);
    let digits: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == ' ')
        .collect();
    let digit_count = digits.chars().filter(|c| c.is_ascii_digit()).count();
    if digits.len() != trimmed.len() {
        return Err("Phone number contains invalid characters");
    }
    if !(7..=15).contains(&digit_count) {
        return Err("Phone number must have 7 to 15 digits");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_discount_range() {
        assert!(validate_discount_percent(dec("0")).is_ok());
        assert!(validate_discount_percent(dec("100")).is_ok());
        assert!(validate_discount_percent(dec("100.5")).is_err());
        assert!(validate_discount_percent(dec("-1")).is_err());
    }

    #[test]
    fn test_document_id_blank() {
        assert!(validate_document_id("MR-1001").is_ok());
        assert!(validate_document_id("   ").is_err());
    }

    #[test]
    fn test_vin() {
        assert!(validate_vin("1HGBH41JXMN109186").is_ok());
        assert!(validate_vin("1HGBH41JXMN10918").is_err());
        assert!(validate_vin("1HGBH41JXMN10918O").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("+1 555-867-5309").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("call-me").is_err());
    }
}
