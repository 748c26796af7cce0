//! # Domain Types
//!
//! Core domain types used throughout MedVault.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Medicine     │   │      Bill       │   │  BillLineItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  medicine_id    │       │
//! │  │  name           │   │  date           │   │  medicine_name  │       │
//! │  │  price (Money)  │   │  items          │   │  price_per_unit │       │
//! │  │  stock          │   │  total_amount   │   │  quantity       │       │
//! │  │  expiry_date    │   │  final_amount   │   │  total_price    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   NewMedicine   │   │  MedicinePatch  │                             │
//! │  │  creation input │   │  partial update │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `BillLineItem` copies the medicine's name and price at add-time. A later
//! catalog price edit must never retroactively change a historical bill, so
//! line items never re-derive anything from the live catalog.
//!
//! ## Serialized Shape
//! All persisted types rename to camelCase (`medicineId`, `pricePerUnit`,
//! `finalAmount`, ...) so the durable slot and the import/export snapshot
//! keep the blob layout the UI layer already understands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::DEFAULT_CUSTOMER_LABEL;

// =============================================================================
// Medicine
// =============================================================================

/// One catalog entry: a medicine available for sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Medicine {
    /// Unique identifier (UUID v4). Generated on creation, immutable.
    pub id: String,

    /// Display name shown in inventory and on receipts. Required, non-empty.
    pub name: String,

    /// Manufacturer label (e.g. "GSK").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// Category used for the dashboard breakdown (e.g. "Pain Relief").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Physical shelf location in the pharmacy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_number: Option<String>,

    /// Unit price in cents. Invariant: strictly positive.
    pub price: Money,

    /// Units on hand. Invariant: never negative after a validated mutation;
    /// decremented only by committed bills.
    pub stock: i64,

    /// Calendar expiry date.
    #[ts(as = "String")]
    pub expiry_date: DateTime<Utc>,

    /// When the medicine was created. Fixed at creation.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the medicine was last updated. Refreshed on every mutation.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Medicine {
    /// Checks if at least one unit is available for sale.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks if the medicine has already expired at `now`.
    ///
    /// Boundary: an expiry date equal to `now` counts as expired, matching
    /// the strictly-after rule in [`crate::reports::expiring_soon_count`].
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date <= now
    }
}

// =============================================================================
// NewMedicine / MedicinePatch
// =============================================================================

/// Caller-supplied payload for creating a medicine.
///
/// Everything in [`Medicine`] except the store-assigned `id`, `created_at`,
/// and `updated_at`. Validation (non-empty name, price > 0, stock >= 0) is
/// the caller's job via [`crate::validation`]; the store trusts this payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewMedicine {
    pub name: String,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub shelf_number: Option<String>,
    pub price: Money,
    pub stock: i64,
    #[ts(as = "String")]
    pub expiry_date: DateTime<Utc>,
}

/// Partial update for a medicine: only present fields are merged.
///
/// ## Merge Semantics
/// `None` means "leave unchanged", not "clear the field". The source system
/// always round-trips the full form, so there is no way to clear an optional
/// field to empty through a patch; callers that need that send
/// `Some(String::new())`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MedicinePatch {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub shelf_number: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<i64>,
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl MedicinePatch {
    /// Applies the present fields onto an existing medicine.
    ///
    /// Does NOT touch `updated_at`; the store refreshes the timestamp as
    /// part of the mutation so the rule lives in exactly one place.
    pub fn apply_to(&self, medicine: &mut Medicine) {
        if let Some(name) = &self.name {
            medicine.name = name.clone();
        }
        if let Some(manufacturer) = &self.manufacturer {
            medicine.manufacturer = Some(manufacturer.clone());
        }
        if let Some(category) = &self.category {
            medicine.category = Some(category.clone());
        }
        if let Some(description) = &self.description {
            medicine.description = Some(description.clone());
        }
        if let Some(shelf_number) = &self.shelf_number {
            medicine.shelf_number = Some(shelf_number.clone());
        }
        if let Some(price) = self.price {
            medicine.price = price;
        }
        if let Some(stock) = self.stock {
            medicine.stock = stock;
        }
        if let Some(expiry_date) = self.expiry_date {
            medicine.expiry_date = expiry_date;
        }
    }
}

// =============================================================================
// Bill Line Item
// =============================================================================

/// One row of a cart or bill.
/// Uses the snapshot pattern to freeze medicine data at sale time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillLineItem {
    /// Reference to the catalog medicine (lookup only, not ownership).
    pub medicine_id: String,
    /// Medicine name at add-time (frozen).
    pub medicine_name: String,
    /// Units in this line. Invariant: >= 1 inside a cart or bill.
    pub quantity: i64,
    /// Unit price at add-time (frozen). A later catalog price edit never
    /// changes this line.
    pub price_per_unit: Money,
    /// `quantity × price_per_unit`, recomputed on every quantity change.
    pub total_price: Money,
}

impl BillLineItem {
    /// Creates a line for one unit of a medicine, freezing name and price.
    pub fn from_medicine(medicine: &Medicine) -> Self {
        BillLineItem {
            medicine_id: medicine.id.clone(),
            medicine_name: medicine.name.clone(),
            quantity: 1,
            price_per_unit: medicine.price,
            total_price: medicine.price,
        }
    }

    /// Sets the quantity and recomputes the line total.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.total_price = self.price_per_unit.multiply_quantity(quantity);
    }
}

// =============================================================================
// Bill
// =============================================================================

/// An immutable record of a completed sale — a frozen receipt.
///
/// Created atomically by the store's bill operation and never mutated
/// afterwards. The referenced medicines' stock is decremented as part of the
/// same logical transaction that appends the bill to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Bill {
    pub id: String,
    /// Ordered line items. Invariant: non-empty.
    pub items: Vec<BillLineItem>,
    /// Sum of item totals (subtotal, pre-discount).
    pub total_amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    /// Creation timestamp.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    /// Flat discount. Invariant: non-negative (conceptually capped at
    /// `total_amount`, but a larger value is carried through unclamped).
    pub discount: Money,
    /// `total_amount - discount`.
    pub final_amount: Money,
}

impl Bill {
    /// Customer name for display, falling back to the generic label.
    pub fn customer_label(&self) -> &str {
        match self.customer_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_CUSTOMER_LABEL,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_medicine() -> Medicine {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        Medicine {
            id: "med-1".to_string(),
            name: "Paracetamol 500mg".to_string(),
            manufacturer: Some("GSK".to_string()),
            category: Some("Pain Relief".to_string()),
            description: None,
            shelf_number: None,
            price: Money::from_cents(599),
            stock: 100,
            expiry_date: Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap(),
            created_at: t,
            updated_at: t,
        }
    }

    #[test]
    fn test_line_item_freezes_price() {
        let mut medicine = test_medicine();
        let line = BillLineItem::from_medicine(&medicine);

        // Catalog edit after add-time must not leak into the line.
        medicine.price = Money::from_cents(999);

        assert_eq!(line.price_per_unit, Money::from_cents(599));
        assert_eq!(line.total_price, Money::from_cents(599));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_line_item_set_quantity_recomputes_total() {
        let medicine = test_medicine();
        let mut line = BillLineItem::from_medicine(&medicine);

        line.set_quantity(4);
        assert_eq!(line.quantity, 4);
        assert_eq!(line.total_price, Money::from_cents(2396));
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut medicine = test_medicine();
        let patch = MedicinePatch {
            stock: Some(42),
            price: Some(Money::from_cents(650)),
            ..Default::default()
        };

        patch.apply_to(&mut medicine);

        assert_eq!(medicine.stock, 42);
        assert_eq!(medicine.price, Money::from_cents(650));
        // Untouched fields survive.
        assert_eq!(medicine.name, "Paracetamol 500mg");
        assert_eq!(medicine.manufacturer.as_deref(), Some("GSK"));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let medicine = test_medicine();
        assert!(medicine.is_expired(medicine.expiry_date));
        assert!(!medicine.is_expired(medicine.expiry_date - chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_customer_label_fallback() {
        let bill = Bill {
            id: "b1".to_string(),
            items: vec![BillLineItem::from_medicine(&test_medicine())],
            total_amount: Money::from_cents(599),
            customer_name: None,
            customer_phone: None,
            date: Utc::now(),
            discount: Money::zero(),
            final_amount: Money::from_cents(599),
        };
        assert_eq!(bill.customer_label(), "Customer");

        let named = Bill {
            customer_name: Some("Alice".to_string()),
            ..bill.clone()
        };
        assert_eq!(named.customer_label(), "Alice");

        let blank = Bill {
            customer_name: Some("   ".to_string()),
            ..bill
        };
        assert_eq!(blank.customer_label(), "Customer");
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let medicine = test_medicine();
        let json = serde_json::to_value(&medicine).unwrap();

        assert!(json.get("expiryDate").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("expiry_date").is_none());

        let line = BillLineItem::from_medicine(&medicine);
        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("medicineId").is_some());
        assert!(json.get("pricePerUnit").is_some());
        assert!(json.get("totalPrice").is_some());
    }
}
