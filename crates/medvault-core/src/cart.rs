//! # Billing Calculator
//!
//! Cart math for assembling a bill: line mutation with stock bounds,
//! subtotal, and discount-adjusted total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Operation                Cart Change          │
//! │  ───────────────          ─────────                ───────────          │
//! │                                                                         │
//! │  Click Medicine ─────────► add_line() ────────────► qty += 1 or append │
//! │                                      └── refused if qty >= stock        │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ────────► qty = n            │
//! │                                      ├── n <= 0 removes the line        │
//! │                                      └── refused if n > stock           │
//! │                                                                         │
//! │  Click Remove ───────────► remove_line() ─────────► line dropped       │
//! │                                                                         │
//! │  Totals Panel ───────────► subtotal() / total() ──► (read only)        │
//! │                                                                         │
//! │  On refusal the cart is left UNCHANGED - no partial mutation.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation here is deterministic and side-effect-free: the cart
//! never touches the durable slot. The UI threads the finished cart into
//! the store's bill operation once the user finalizes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{BillLineItem, Medicine};

// =============================================================================
// Cart
// =============================================================================

/// A transient, caller-owned sequence of line items not yet committed to a
/// bill.
///
/// ## Invariants
/// - Lines are unique by `medicine_id` (adding the same medicine again
///   increments its quantity)
/// - Every line quantity is >= 1 and <= the medicine's stock at the time the
///   mutation was accepted
/// - `total_price` on every line equals `quantity × price_per_unit`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub items: Vec<BillLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a medicine to the cart.
    ///
    /// ## Behavior
    /// - Existing line: increments quantity by 1 and recomputes the total,
    ///   unless the quantity already equals the available stock - then the
    ///   call is refused and the cart is unchanged
    /// - No existing line: appends a new line with quantity 1, freezing the
    ///   medicine's name and price into the line
    ///
    /// The new-line path does not re-check `stock > 0`; callers only offer
    /// in-stock medicines (the inventory search filters the rest out).
    pub fn add_line(&mut self, medicine: &Medicine) -> CoreResult<()> {
        if let Some(line) = self.find_line_mut(&medicine.id) {
            if line.quantity >= medicine.stock {
                return Err(CoreError::InsufficientStock {
                    name: medicine.name.clone(),
                    available: medicine.stock,
                    requested: line.quantity + 1,
                });
            }
            let quantity = line.quantity + 1;
            line.set_quantity(quantity);
            return Ok(());
        }

        self.items.push(BillLineItem::from_medicine(medicine));
        Ok(())
    }

    /// Sets the quantity of a medicine's line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line entirely
    /// - `quantity > medicine.stock`: refused, cart unchanged
    /// - Otherwise: sets the quantity and recomputes the line total
    ///
    /// A missing line is a silent no-op for positive quantities too - the
    /// line may have been removed by another panel of the same UI.
    pub fn set_quantity(&mut self, medicine: &Medicine, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove_line(&medicine.id);
            return Ok(());
        }

        if quantity > medicine.stock {
            return Err(CoreError::InsufficientStock {
                name: medicine.name.clone(),
                available: medicine.stock,
                requested: quantity,
            });
        }

        if let Some(line) = self.find_line_mut(&medicine.id) {
            line.set_quantity(quantity);
        }
        Ok(())
    }

    /// Removes a medicine's line from the cart. No-op if absent.
    pub fn remove_line(&mut self, medicine_id: &str) {
        self.items.retain(|line| line.medicine_id != medicine_id);
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line totals, before any discount.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|line| line.total_price).sum()
    }

    /// `subtotal - discount`.
    ///
    /// NOT clamped to zero: a discount exceeding the subtotal yields a
    /// negative total, matching the source system. Negative *discounts* are
    /// rejected upstream by [`crate::validation::validate_discount`].
    pub fn total(&self, discount: Money) -> Money {
        self.subtotal() - discount
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Consumes the cart, yielding the line items for bill creation.
    pub fn into_items(self) -> Vec<BillLineItem> {
        self.items
    }

    fn find_line_mut(&mut self, medicine_id: &str) -> Option<&mut BillLineItem> {
        self.items
            .iter_mut()
            .find(|line| line.medicine_id == medicine_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
