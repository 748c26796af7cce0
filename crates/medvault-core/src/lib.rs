//! # medvault-core: Pure Business Logic for MedVault
//!
//! This crate is the **heart** of MedVault. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MedVault Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (UI layer)                        │   │
//! │  │    Inventory UI ──► Billing UI ──► Dashboard ──► Receipt       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ medvault-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  reports  │  │   │
//! │  │   │ Medicine  │  │   Money   │  │   Cart    │  │ stats and │  │   │
//! │  │   │   Bill    │  │  (cents)  │  │ LineItem  │  │ breakdowns│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SLOT ACCESS • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                medvault-store (Persistence Layer)               │   │
//! │  │          Domain store, durable JSON slot, seed catalog          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Medicine, Bill, BillLineItem, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`cart`] - The billing calculator (cart math and stock bounds)
//! - [`reports`] - Reporting projections over the catalog
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: The slot, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use medvault_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(599); // $5.99
//!
//! // Line totals are plain integer multiplication
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.cents(), 1797);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use medvault_core::Money` instead of
// `use medvault_core::money::Money`

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level below which a medicine counts as "low stock".
///
/// ## Business Reason
/// The dashboard flags anything with fewer than 10 units on hand so the
/// pharmacist can reorder before a sale has to be refused.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Days ahead the "expiring soon" window looks.
///
/// ## Business Reason
/// 30 days gives enough lead time to discount or return short-dated stock.
/// Already-expired items are NOT counted here; they are a separate problem.
pub const EXPIRY_HORIZON_DAYS: i64 = 30;

/// How many medicines the "recently added" dashboard panel shows.
pub const RECENT_MEDICINES_LIMIT: usize = 5;

/// Generic label used on receipts when no customer name was given.
pub const DEFAULT_CUSTOMER_LABEL: &str = "Customer";
