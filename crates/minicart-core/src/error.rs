//! # Error Types
//!
//! Domain-specific error types for minicart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  minicart-core errors (this file)                                       │
//! │  └── CatalogError     - Catalog construction failures                   │
//! │                                                                         │
//! │  minicart-session errors (separate crate)                               │
//! │  └── ApiError         - What the view sees (serialized)                 │
//! │                                                                         │
//! │  Flow: CatalogError → ApiError → View                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves are infallible: adding a resolved product
//! always succeeds, removing an absent id is a no-op, and queries on an
//! empty cart return zero/empty values. Identifier resolution failures are
//! handled by the caller before the cart is ever touched, so no error path
//! exists inside the cart.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending id)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::catalog::ProductId;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products in the supplied list share the same id.
    ///
    /// ## When This Occurs
    /// Only at startup, while the fixed product set is being assembled.
    /// A catalog that constructed successfully can never produce this.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
