//! # Domain Store
//!
//! Single source of truth for the medicine catalog and bill ledger. Every
//! mutation runs to completion synchronously within one call - there is no
//! suspension inside a mutation, so operations from the same session can
//! never interleave.
//!
//! ## Mutation Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Every Mutating Operation                           │
//! │                                                                         │
//! │  1. Validate (before touching anything - no partial mutation)           │
//! │  2. Mutate the in-memory catalog/ledger                                │
//! │  3. Stamp updated_at on every touched medicine                         │
//! │  4. persist(): serialize the WHOLE state, overwrite the slot           │
//! │       └── failure: warn! and swallow; memory stays authoritative       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use medvault_core::validation::validate_discount;
use medvault_core::{Bill, BillLineItem, CoreError, CoreResult, Medicine, MedicinePatch, Money, NewMedicine};

use crate::seed::seed_catalog;
use crate::slot::{DataSlot, StoreSnapshot};

// =============================================================================
// Store
// =============================================================================

/// The domain store: owns the catalog and the ledger, mediates every
/// mutation, and mirrors the full state into the durable slot.
///
/// Generic over the slot so tests run against [`crate::MemorySlot`] while
/// the application uses [`crate::FileSlot`].
#[derive(Debug)]
pub struct Store<S: DataSlot> {
    medicines: Vec<Medicine>,
    bills: Vec<Bill>,
    slot: S,
}

impl<S: DataSlot> Store<S> {
    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Opens the store, rehydrating from the slot.
    ///
    /// An absent slot means first launch; an unreadable or malformed slot is
    /// logged and treated the same way. Either falls back to the built-in
    /// seed catalog and an empty ledger. Load failure is never surfaced.
    pub fn open(slot: S) -> Self {
        let (medicines, bills) = match slot.load() {
            Ok(Some(snapshot)) => {
                debug!(
                    medicines = snapshot.medicines.len(),
                    bills = snapshot.bills.len(),
                    "Rehydrated store from slot"
                );
                (snapshot.medicines, snapshot.bills)
            }
            Ok(None) => {
                debug!("Slot never written, starting from seed catalog");
                (seed_catalog(), Vec::new())
            }
            Err(err) => {
                warn!(error = %err, "Failed to load slot, starting from seed catalog");
                (seed_catalog(), Vec::new())
            }
        };

        Store {
            medicines,
            bills,
            slot,
        }
    }

    // -------------------------------------------------------------------------
    // Catalog Management
    // -------------------------------------------------------------------------

    /// Creates a medicine from a validated payload.
    ///
    /// Assigns a fresh UUID and stamps `created_at`/`updated_at` to the same
    /// instant. Validation is the caller's job via
    /// [`medvault_core::validation::validate_new_medicine`]; the store
    /// trusts the payload (non-empty name, price > 0, stock >= 0).
    pub fn add_medicine(&mut self, data: NewMedicine) -> &Medicine {
        let now = Utc::now();
        let medicine = Medicine {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            manufacturer: data.manufacturer,
            category: data.category,
            description: data.description,
            shelf_number: data.shelf_number,
            price: data.price,
            stock: data.stock,
            expiry_date: data.expiry_date,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %medicine.id, name = %medicine.name, "Adding medicine");
        self.medicines.push(medicine);
        self.persist();

        // Just pushed, so the catalog is non-empty.
        self.medicines.last().unwrap()
    }

    /// Merges a partial update into the medicine with the given id and
    /// refreshes its `updated_at`.
    ///
    /// Silent no-op on an unknown id - a deliberate looseness carried over
    /// from the source system. Nothing is persisted in that case.
    pub fn update_medicine(&mut self, id: &str, patch: MedicinePatch) {
        let Some(medicine) = self.medicines.iter_mut().find(|m| m.id == id) else {
            debug!(id = %id, "update_medicine: unknown id, no-op");
            return;
        };

        patch.apply_to(medicine);
        medicine.updated_at = Utc::now();

        debug!(id = %id, "Updated medicine");
        self.persist();
    }

    /// Removes the medicine with the given id. No-op if absent.
    pub fn delete_medicine(&mut self, id: &str) {
        let before = self.medicines.len();
        self.medicines.retain(|m| m.id != id);

        if self.medicines.len() == before {
            debug!(id = %id, "delete_medicine: unknown id, no-op");
            return;
        }

        debug!(id = %id, "Deleted medicine");
        self.persist();
    }

    /// Looks up a medicine by id. Pure read.
    pub fn get_medicine(&self, id: &str) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// The full catalog, in insertion order.
    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    /// The full ledger, oldest bill first.
    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    /// Case-insensitive substring search across name, manufacturer, and
    /// category. An empty (or all-whitespace) query returns the whole
    /// catalog.
    pub fn search_medicines(&self, query: &str) -> Vec<&Medicine> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.medicines.iter().collect();
        }

        self.medicines
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&query)
                    || m.manufacturer
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&query))
                    || m.category
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&query))
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Billing
    // -------------------------------------------------------------------------

    /// Creates a bill from finalized cart items, all-or-nothing.
    ///
    /// ## Steps
    /// 1. Reject an empty cart and a negative discount (nothing touched)
    /// 2. `total_amount` = Σ line totals; `final_amount` = total − discount
    /// 3. Build the immutable bill with a fresh UUID and current timestamp
    /// 4. Append it to the ledger
    /// 5. Decrement each referenced medicine's stock by the sold quantity,
    ///    refreshing its `updated_at`
    /// 6. Persist the combined new state once
    ///
    /// Stock sufficiency is NOT re-validated here: the cart enforced the
    /// bound at build time, and this is a single-session system, so no
    /// second writer can have shrunk the stock in between.
    ///
    /// `final_amount` is NOT clamped: a discount exceeding the subtotal
    /// yields a negative amount, preserved from the source system.
    pub fn create_bill(
        &mut self,
        items: Vec<BillLineItem>,
        customer_name: Option<String>,
        customer_phone: Option<String>,
        discount: Money,
    ) -> CoreResult<Bill> {
        if items.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        validate_discount(discount)?;

        let total_amount: Money = items.iter().map(|item| item.total_price).sum();
        let final_amount = total_amount - discount;
        let now = Utc::now();

        let bill = Bill {
            id: Uuid::new_v4().to_string(),
            items,
            total_amount,
            customer_name: normalize_optional(customer_name),
            customer_phone: normalize_optional(customer_phone),
            date: now,
            discount,
            final_amount,
        };

        debug!(
            id = %bill.id,
            lines = bill.items.len(),
            total = %bill.total_amount,
            final_amount = %bill.final_amount,
            "Creating bill"
        );

        // Stock decrement is part of the same logical transaction as the
        // ledger append; both land in one persist below.
        for item in &bill.items {
            if let Some(medicine) = self.medicines.iter_mut().find(|m| m.id == item.medicine_id) {
                medicine.stock -= item.quantity;
                medicine.updated_at = now;
            }
        }

        self.bills.push(bill.clone());
        self.persist();

        Ok(bill)
    }

    // -------------------------------------------------------------------------
    // Backup Surface
    // -------------------------------------------------------------------------

    /// Replaces catalog and ledger wholesale and persists.
    ///
    /// No schema versioning or migration: the snapshot is trusted to be an
    /// `export_data` of the same blob layout.
    pub fn import_data(&mut self, snapshot: StoreSnapshot) {
        debug!(
            medicines = snapshot.medicines.len(),
            bills = snapshot.bills.len(),
            "Importing snapshot"
        );
        self.medicines = snapshot.medicines;
        self.bills = snapshot.bills;
        self.persist();
    }

    /// A deep snapshot of the current state, for backup/download.
    pub fn export_data(&self) -> StoreSnapshot {
        StoreSnapshot {
            medicines: self.medicines.clone(),
            bills: self.bills.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Serializes the full state and overwrites the slot.
    ///
    /// Failures are logged and swallowed: the in-memory state remains the
    /// source of truth for the rest of the session even when it can no
    /// longer be durably saved.
    fn persist(&self) {
        let snapshot = StoreSnapshot {
            medicines: self.medicines.clone(),
            bills: self.bills.clone(),
        };
        if let Err(err) = self.slot.save(&snapshot) {
            warn!(error = %err, "Failed to persist state, continuing in memory only");
        }
    }
}

/// Maps empty and whitespace-only strings to `None`.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;
    use chrono::Utc;

    fn new_medicine(name: &str, price_cents: i64, stock: i64) -> NewMedicine {
        NewMedicine {
            name: name.to_string(),
            manufacturer: None,
            category: None,
            description: None,
            shelf_number: None,
            price: Money::from_cents(price_cents),
            stock,
            expiry_date: Utc::now() + chrono::Duration::days(365),
        }
    }

    fn empty_store() -> Store<MemorySlot> {
        // An empty-but-written slot, so tests start with no seed catalog.
        let slot = MemorySlot::with_contents(r#"{"medicines":[],"bills":[]}"#);
        Store::open(slot)
    }

    #[test]
    fn test_add_then_get_round_trips_fields() {
        let mut store = empty_store();

        let id = store
            .add_medicine(new_medicine("Paracetamol 500mg", 599, 100))
            .id
            .clone();

        let found = store.get_medicine(&id).unwrap();
        assert_eq!(found.name, "Paracetamol 500mg");
        assert_eq!(found.price, Money::from_cents(599));
        assert_eq!(found.stock, 100);
        assert_eq!(found.created_at, found.updated_at);
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let mut store = empty_store();
        let id = store.add_medicine(new_medicine("Ibuprofen", 450, 20)).id.clone();
        let before = store.get_medicine(&id).unwrap().updated_at;

        // updated_at must be STRICTLY newer; keep the clock honest.
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.update_medicine(
            &id,
            MedicinePatch {
                stock: Some(35),
                ..Default::default()
            },
        );

        let after = store.get_medicine(&id).unwrap();
        assert_eq!(after.stock, 35);
        assert!(after.updated_at > before);
        assert_eq!(after.name, "Ibuprofen");
    }

    #[test]
    fn test_update_unknown_id_is_silent_noop() {
        let mut store = empty_store();
        store.add_medicine(new_medicine("Ibuprofen", 450, 20));

        store.update_medicine(
            "no-such-id",
            MedicinePatch {
                stock: Some(999),
                ..Default::default()
            },
        );

        assert_eq!(store.medicines().len(), 1);
        assert_eq!(store.medicines()[0].stock, 20);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = empty_store();
        let id = store.add_medicine(new_medicine("Ibuprofen", 450, 20)).id.clone();

        store.delete_medicine(&id);
        assert!(store.get_medicine(&id).is_none());
        assert_eq!(store.medicines().len(), 0);

        // Second delete observes the same end state.
        store.delete_medicine(&id);
        assert_eq!(store.medicines().len(), 0);
    }

    #[test]
    fn test_search_matches_name_manufacturer_category() {
        let mut store = empty_store();
        store.add_medicine(NewMedicine {
            manufacturer: Some("GSK".to_string()),
            category: Some("Pain Relief".to_string()),
            ..new_medicine("Paracetamol 500mg", 599, 100)
        });
        store.add_medicine(NewMedicine {
            manufacturer: Some("Pfizer".to_string()),
            category: Some("Antibiotics".to_string()),
            ..new_medicine("Amoxicillin 250mg", 1250, 50)
        });

        assert_eq!(store.search_medicines("paraceta").len(), 1);
        assert_eq!(store.search_medicines("PFIZER").len(), 1);
        assert_eq!(store.search_medicines("pain").len(), 1);
        assert_eq!(store.search_medicines("aspirin").len(), 0);
        // Empty query returns everything.
        assert_eq!(store.search_medicines("  ").len(), 2);
    }

    #[test]
    fn test_create_bill_decrements_stock_and_totals() {
        let mut store = empty_store();
        let medicine = store.add_medicine(new_medicine("Paracetamol", 200, 10)).clone();

        let mut line = BillLineItem::from_medicine(&medicine);
        line.set_quantity(3);

        let bill = store
            .create_bill(vec![line], None, None, Money::from_cents(100))
            .unwrap();

        assert_eq!(bill.total_amount, Money::from_cents(600));
        assert_eq!(bill.final_amount, Money::from_cents(500));
        assert_eq!(store.get_medicine(&medicine.id).unwrap().stock, 7);
        assert_eq!(store.bills().len(), 1);
    }

    #[test]
    fn test_create_bill_empty_cart_rejected_without_mutation() {
        let mut store = empty_store();
        store.add_medicine(new_medicine("Paracetamol", 200, 10));

        let err = store
            .create_bill(Vec::new(), None, None, Money::zero())
            .unwrap_err();

        assert!(matches!(err, CoreError::EmptyCart));
        assert!(store.bills().is_empty());
        assert_eq!(store.medicines()[0].stock, 10);
    }

    #[test]
    fn test_create_bill_negative_discount_rejected() {
        let mut store = empty_store();
        let medicine = store.add_medicine(new_medicine("Paracetamol", 200, 10)).clone();
        let line = BillLineItem::from_medicine(&medicine);

        let err = store
            .create_bill(vec![line], None, None, Money::from_cents(-50))
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.bills().is_empty());
        assert_eq!(store.get_medicine(&medicine.id).unwrap().stock, 10);
    }

    #[test]
    fn test_create_bill_unclamped_negative_final_amount() {
        let mut store = empty_store();
        let medicine = store.add_medicine(new_medicine("Paracetamol", 200, 10)).clone();
        let line = BillLineItem::from_medicine(&medicine);

        let bill = store
            .create_bill(vec![line], None, None, Money::from_cents(500))
            .unwrap();

        // 200 - 500: preserved, not clamped to zero.
        assert_eq!(bill.final_amount, Money::from_cents(-300));
    }

    #[test]
    fn test_create_bill_normalizes_blank_customer() {
        let mut store = empty_store();
        let medicine = store.add_medicine(new_medicine("Paracetamol", 200, 10)).clone();
        let line = BillLineItem::from_medicine(&medicine);

        let bill = store
            .create_bill(
                vec![line],
                Some("   ".to_string()),
                Some(String::new()),
                Money::zero(),
            )
            .unwrap();

        assert!(bill.customer_name.is_none());
        assert!(bill.customer_phone.is_none());
        assert_eq!(bill.customer_label(), "Customer");
    }

    #[test]
    fn test_bill_price_snapshot_survives_catalog_edit() {
        let mut store = empty_store();
        let medicine = store.add_medicine(new_medicine("Paracetamol", 200, 10)).clone();
        let line = BillLineItem::from_medicine(&medicine);

        let bill = store
            .create_bill(vec![line], None, None, Money::zero())
            .unwrap();

        // Later price edit must not change the historical bill.
        store.update_medicine(
            &medicine.id,
            MedicinePatch {
                price: Some(Money::from_cents(999)),
                ..Default::default()
            },
        );

        assert_eq!(store.bills()[0].items[0].price_per_unit, Money::from_cents(200));
        assert_eq!(bill.items[0].total_price, Money::from_cents(200));
    }

    #[test]
    fn test_import_then_export_round_trips() {
        let mut store = empty_store();
        store.add_medicine(new_medicine("Paracetamol", 200, 10));
        let snapshot = store.export_data();

        let mut other = empty_store();
        other.import_data(snapshot.clone());
        let exported = other.export_data();

        assert_eq!(
            serde_json::to_value(&exported).unwrap(),
            serde_json::to_value(&snapshot).unwrap()
        );
    }

    #[test]
    fn test_open_seeds_on_absent_slot() {
        let store = Store::open(MemorySlot::new());
        assert_eq!(store.medicines().len(), 3);
        assert!(store.bills().is_empty());
    }

    #[test]
    fn test_open_seeds_on_corrupt_slot() {
        let store = Store::open(MemorySlot::with_contents("{broken"));
        assert_eq!(store.medicines().len(), 3);
        assert!(store.bills().is_empty());
    }
}
