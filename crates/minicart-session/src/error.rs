//! # API Error Type
//!
//! Unified error type for session operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Minicart                               │
//! │                                                                         │
//! │  View (JS)                   Rust Backend                               │
//! │  ─────────                   ────────────                               │
//! │                                                                         │
//! │  session.add_to_cart(99)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Session Operation                                               │  │
//! │  │  Result<CartResponse, ApiError>                                  │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown id? ─── catalog.get() == None ──────► ApiError ───────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await session.addToCart(99)                                          │
//! │  } catch (e) {                                                          │
//! │    // e.message = "Product not found: 99"                               │
//! │    // e.code = "NOT_FOUND"                                              │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT here: a cart error. Cart operations cannot fail once
//! the identifier resolved, and removing an absent id is a documented
//! no-op, so the only failure the view can ever see is a failed lookup.

use serde::Serialize;
use ts_rs::TS;

use minicart_core::{CatalogError, ProductId};

/// API error returned from session operations.
///
/// ## Serialization
/// This is what the view receives when an operation fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 99"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await session.addToCart(id);
/// } catch (e) {
///   switch (e.code) {
///     case 'NOT_FOUND':
///       showNotification('Product not found');
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error for a product id.
    pub fn product_not_found(id: ProductId) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("Product not found: {}", id))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::DuplicateId(id) => ApiError::new(
                ErrorCode::ValidationError,
                format!("Duplicate product id in catalog: {}", id),
            ),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
