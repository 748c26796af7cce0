//! # Validation Module
//!
//! Input validation for MedVault.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── Basic format checks (empty, numeric parse)                        │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── The store preconditions: non-empty name, price > 0, stock >= 0    │
//! │                                                                         │
//! │  The store itself trusts validated payloads; it does not re-check.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medvault_core::money::Money;
//! use medvault_core::validation::{validate_medicine_name, validate_price};
//!
//! validate_medicine_name("Paracetamol 500mg").unwrap();
//! validate_price(Money::from_cents(599)).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::NewMedicine;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a medicine name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_medicine_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be strictly positive; free medicines are not a thing here
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (out of stock, not for sale)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be at least 1; a quantity of zero means "remove the line" and is
///   handled by the cart, not accepted as a stored value
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a flat bill discount.
///
/// ## Rules
/// - Must be non-negative; a discount LARGER than the subtotal is allowed
///   through (the unclamped-total behavior documented on the cart)
pub fn validate_discount(discount: Money) -> ValidationResult<()> {
    if discount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "discount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates a full creation payload in one call.
///
/// The preconditions the store expects before `add_medicine`: non-empty
/// name, price > 0, stock >= 0.
pub fn validate_new_medicine(medicine: &NewMedicine) -> ValidationResult<()> {
    validate_medicine_name(&medicine.name)?;
    validate_price(medicine.price)?;
    validate_stock(medicine.stock)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_validate_medicine_name() {
        assert!(validate_medicine_name("Paracetamol 500mg").is_ok());
        assert!(validate_medicine_name("").is_err());
        assert!(validate_medicine_name("   ").is_err());
        assert!(validate_medicine_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(599)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(100).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-5).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(Money::zero()).is_ok());
        assert!(validate_discount(Money::from_cents(100)).is_ok());
        // Larger than any subtotal is still "valid" here by design.
        assert!(validate_discount(Money::from_cents(1_000_000)).is_ok());
        assert!(validate_discount(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_new_medicine() {
        let mut payload = NewMedicine {
            name: "Amoxicillin 250mg".to_string(),
            manufacturer: Some("Pfizer".to_string()),
            category: Some("Antibiotics".to_string()),
            description: None,
            shelf_number: None,
            price: Money::from_cents(1250),
            stock: 50,
            expiry_date: Utc::now(),
        };
        assert!(validate_new_medicine(&payload).is_ok());

        payload.price = Money::zero();
        assert!(validate_new_medicine(&payload).is_err());
    }
}
