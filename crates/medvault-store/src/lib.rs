//! # medvault-store: Domain Store and Persistence for MedVault
//!
//! Single source of truth for the medicine catalog and bill ledger. Every
//! mutation flows through [`Store`], which keeps the invariants and mirrors
//! the full state into one durable slot after each change.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Whole-State Slot Persistence                        │
//! │                                                                         │
//! │   Store::add_medicine() ─┐                                             │
//! │   Store::create_bill() ──┼──► mutate in memory                         │
//! │   Store::import_data() ──┘          │                                  │
//! │                                     ▼                                  │
//! │                        serialize { medicines, bills }                  │
//! │                                     │                                  │
//! │                                     ▼                                  │
//! │                        DataSlot::save() ── overwrite, atomically       │
//! │                                     │                                  │
//! │                              on failure: warn! and carry on            │
//! │                              (memory stays authoritative)              │
//! │                                                                         │
//! │   Store::open() ◄── DataSlot::load() ◄── startup                       │
//! │        │                                                               │
//! │        └── absent/corrupt slot → seed catalog + empty ledger           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no database and no transaction log: at this scale the honest
//! discipline is "mutate in memory, then serialize and overwrite the slot".
//! Multi-session writers are unsupported; the last one to save wins.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod seed;
pub mod slot;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{SlotError, SlotResult};
pub use slot::{DataSlot, FileSlot, MemorySlot, StoreSnapshot};
pub use store::Store;
