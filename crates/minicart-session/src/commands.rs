//! # Session Commands
//!
//! The operations the view adapter calls.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌──────────────┐                │
//! │  │  Page    │────►│   Session    │────►│  Cart grows/ │                │
//! │  │  loads   │     │  constructed │     │  shrinks     │                │
//! │  └──────────┘     └──────────────┘     └──────────────┘                │
//! │                          │                    │                         │
//! │                    seed catalog         add_to_cart                     │
//! │                    empty cart           remove_from_cart                │
//! │                                         get_cart                        │
//! │                                                                         │
//! │  The session lives for the page lifetime. There is no checkout or       │
//! │  terminal state; the cart just keeps serving add/remove/read.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Who Resolves Identifiers
//! The view hands over raw product ids scraped from its buttons. This layer
//! resolves them against the catalog; the cart core below only ever receives
//! Products that exist. A failed resolution returns `NOT_FOUND` to the view
//! and the cart is untouched.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::CartState;
use minicart_core::{Cart, CartLine, CartTotals, Catalog, ProductId};

// =============================================================================
// Cart Response
// =============================================================================

/// Cart response including lines and totals.
///
/// One of these goes back to the view after every operation so it can
/// re-render without a second round trip.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Cart Session
// =============================================================================

/// Session-scoped context: the product catalog plus the shared cart state.
///
/// An explicit instance is passed to the view layer; nothing here is a
/// module-level global, so tests construct as many sessions as they need.
#[derive(Debug)]
pub struct CartSession {
    catalog: Catalog,
    cart: CartState,
}

impl CartSession {
    /// Creates a session with the given catalog and an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        CartSession {
            catalog,
            cart: CartState::new(),
        }
    }

    /// Creates a session over the seed catalog (the three demo products).
    pub fn with_seed_catalog() -> Self {
        CartSession::new(Catalog::seed())
    }

    /// Returns the catalog, for the product listing the view renders.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Gets the current cart contents.
    ///
    /// ## Returns
    /// Current cart with lines and calculated totals
    pub fn get_cart(&self) -> CartResponse {
        debug!("get_cart");
        self.cart.with_cart(|cart| CartResponse::from(cart))
    }

    /// Adds a product to the cart by id.
    ///
    /// ## Behavior
    /// - Resolves the id against the catalog first
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended as a new line
    /// - Unknown id: `NOT_FOUND`, cart untouched
    ///
    /// ## User Workflow
    /// ```text
    /// User clicks "Add to Cart" on a product card
    ///                  │
    ///                  ▼
    /// session.add_to_cart(product_id)
    ///                  │
    ///                  ▼
    /// ┌────────────────────────────────────────────────┐
    /// │  1. catalog.get(id) - resolve the identifier   │
    /// │  2. cart.add(product)                          │
    /// │  3. Return updated cart                        │
    /// └────────────────────────────────────────────────┘
    ///                  │
    ///                  ▼
    /// Cart display re-renders with new line/total
    /// ```
    ///
    /// ## Returns
    /// Updated cart with all lines and totals
    pub fn add_to_cart(&self, product_id: ProductId) -> Result<CartResponse, ApiError> {
        debug!(product_id, "add_to_cart");

        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| ApiError::product_not_found(product_id))?;

        Ok(self.cart.with_cart_mut(|cart| {
            cart.add(product);
            CartResponse::from(&*cart)
        }))
    }

    /// Removes a product's line from the cart by id.
    ///
    /// ## Behavior
    /// - Present: the whole line is deleted, whatever its quantity
    /// - Absent: no-op; the unchanged cart is still returned
    ///
    /// Infallible: removing something that is not there is defined as
    /// success, so the view can wire "Remove" buttons without guarding.
    ///
    /// ## Returns
    /// Updated cart
    pub fn remove_from_cart(&self, product_id: ProductId) -> CartResponse {
        debug!(product_id, "remove_from_cart");

        self.cart.with_cart_mut(|cart| {
            cart.remove(product_id);
            CartResponse::from(&*cart)
        })
    }
}

impl Default for CartSession {
    fn default() -> Self {
        CartSession::with_seed_catalog()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_get_cart_on_fresh_session() {
        let session = CartSession::with_seed_catalog();
        let response = session.get_cart();

        assert!(response.lines.is_empty());
        assert_eq!(response.totals.total_cents, 0);
    }

    #[test]
    fn test_add_resolves_and_updates() {
        let session = CartSession::with_seed_catalog();

        let response = session.add_to_cart(1).unwrap();
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].product.name, "Baskets");
        assert_eq!(response.totals.total_cents, 100);
    }

    #[test]
    fn test_add_unknown_id_is_not_found_and_cart_untouched() {
        let session = CartSession::with_seed_catalog();
        session.add_to_cart(2).unwrap();

        let err = session.add_to_cart(99).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let response = session.get_cart();
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.totals.total_cents, 20);
    }

    #[test]
    fn test_remove_absent_returns_unchanged_cart() {
        let session = CartSession::with_seed_catalog();
        session.add_to_cart(3).unwrap();

        let response = session.remove_from_cart(1);
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.totals.total_cents, 50);
    }

    /// The seed-product walkthrough, driven through the session boundary
    /// the way the view would drive it.
    #[test]
    fn test_seed_products_walkthrough_through_session() {
        let session = CartSession::with_seed_catalog();

        // New session: empty cart
        assert_eq!(session.get_cart().totals.total_cents, 0);

        // Add Baskets twice: one line, quantity 2
        session.add_to_cart(1).unwrap();
        let response = session.add_to_cart(1).unwrap();
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].quantity, 2);
        assert_eq!(response.totals.total_cents, 200);

        // Add Socks
        let response = session.add_to_cart(2).unwrap();
        assert_eq!(response.lines.len(), 2);
        assert_eq!(response.totals.total_cents, 220);

        // Remove Baskets: whole line goes
        let response = session.remove_from_cart(1);
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].product.id, 2);
        assert_eq!(response.totals.total_cents, 20);

        // Remove Baskets again: no-op
        let response = session.remove_from_cart(1);
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.totals.total_cents, 20);
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = CartSession::with_seed_catalog();
        let b = CartSession::with_seed_catalog();

        a.add_to_cart(1).unwrap();

        assert_eq!(a.get_cart().lines.len(), 1);
        assert!(b.get_cart().lines.is_empty());
    }

    #[test]
    fn test_response_json_shape() {
        let session = CartSession::with_seed_catalog();
        session.add_to_cart(2).unwrap();

        let json = serde_json::to_value(session.get_cart()).unwrap();

        // camelCase keys, nested product, totals block
        assert_eq!(json["lines"][0]["product"]["name"], "Socks");
        assert_eq!(json["lines"][0]["quantity"], 1);
        assert!(json["lines"][0]["addedAt"].is_string());
        assert_eq!(json["totals"]["lineCount"], 1);
        assert_eq!(json["totals"]["totalQuantity"], 1);
        assert_eq!(json["totals"]["totalCents"], 20);
    }
}
