//! # Persistence Error Types
//!
//! Error types for the durable slot.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SlotError (this module) ← adds the save/load context                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store catches it, logs via tracing, and SWALLOWS it                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller never sees a persistence failure; the session degrades to      │
//! │  memory-only durability by design                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `SlotError` is still public: the slot implementations themselves are an
//! honest `Result` API, and tests assert on the failure modes directly.

use thiserror::Error;

/// Durable slot failures.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Reading or writing the slot's backing storage failed.
    ///
    /// ## When This Occurs
    /// - Slot file unreadable or its directory missing
    /// - Disk full, permissions, quota
    #[error("Slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The slot's contents could not be parsed as a snapshot.
    ///
    /// ## When This Occurs
    /// - Corrupt or truncated previous write
    /// - Hand-edited slot file
    /// On load, the store treats this the same as an absent slot and falls
    /// back to the seed catalog.
    #[error("Slot contents malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for slot operations.
pub type SlotResult<T> = Result<T, SlotError>;
