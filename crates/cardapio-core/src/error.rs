//! # Error Types
//!
//! Domain errors for cart mutations.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, stock levels)
//! 3. Errors are enum variants, never strings
//! 4. Messages here are developer-facing; the controller maps each
//!    variant to the user-facing notification text

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by cart mutations.
///
/// Every variant leaves the cart exactly as it was before the mutation
/// was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The requested quantity surpasses the available inventory of the
    /// referenced product or variation.
    ///
    /// Raised both when incrementing an existing line past its stock and
    /// when adding a product whose stock is already zero.
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    StockExceeded {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The chosen variation has no stock at all and cannot be added.
    #[error("variation {name} is unavailable")]
    VariationUnavailable { name: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
