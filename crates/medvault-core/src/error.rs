//! # Error Types
//!
//! Domain-specific error types for medvault-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  medvault-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  medvault-store errors (separate crate)                                │
//! │  └── SlotError        - Durable slot failures (logged, swallowed)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller shows a transient          │
//! │        notification; SlotError never reaches the caller at all         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (medicine name, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Lookup misses on update/delete are NOT errors — those operations are
//! deliberate silent no-ops (see the store documentation).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations and domain logic failures.
///
/// These should be caught by the UI layer and shown as a transient
/// notification; state is guaranteed unchanged when one is returned.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Medicine cannot be found in the catalog.
    #[error("Medicine not found: {0}")]
    MedicineNotFound(String),

    /// A cart operation would exceed the available stock.
    ///
    /// ## When This Occurs
    /// - Incrementing a line whose quantity already equals the stock
    /// - Setting a line quantity above the stock
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (Paracetamol, stock: 5, already in cart: 5)
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Paracetamol 500mg", available: 5, requested: 6 }
    ///      │
    ///      ▼
    /// UI shows: "Cannot add more units than available in stock"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A bill was requested for an empty cart.
    #[error("Cannot create a bill from an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller-supplied data doesn't meet the preconditions.
/// Used for early validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
