//! # Catalog Module
//!
//! Product definitions and the fixed product set the session resolves
//! identifiers against.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Identifier Resolution                                │
//! │                                                                         │
//! │  View button carries data-id="2"                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.get(2) ──► Some(&Product { id: 2, name: "Socks", .. })        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart.add(product)                                                      │
//! │                                                                         │
//! │  Unknown id? get() returns None and the cart is NEVER touched.          │
//! │  The cart core only ever sees Products that exist in the catalog.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual Role
//! The catalog is both the product listing the view renders (buttons per
//! product) and the lookup table behind every add. It is built once at
//! startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CatalogError, CatalogResult};
use crate::money::Money;

/// Product identifier.
///
/// The view carries these as `data-id` attributes on its buttons and hands
/// them back on every click.
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable by convention: created once inside a [`Catalog`], never mutated.
/// The cart snapshots it on add and never writes through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name shown on the product card and in the cart.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,
}

impl Product {
    /// Creates a product.
    pub fn new(id: ProductId, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id,
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The fixed, id-unique set of products available to a session.
///
/// ## Invariants
/// - At most one product per id (checked at construction)
/// - Listing order is the order products were supplied in
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a list of products.
    ///
    /// ## Errors
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    ///
    /// ## Example
    /// ```rust
    /// use minicart_core::catalog::{Catalog, Product};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Product::new(1, "Baskets", 100),
    ///     Product::new(2, "Socks", 20),
    /// ]).unwrap();
    ///
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Catalog { products })
    }

    /// The three products the demo storefront sells.
    ///
    /// ## Products
    /// | id | name    | price |
    /// |----|---------|-------|
    /// | 1  | Baskets | $1.00 |
    /// | 2  | Socks   | $0.20 |
    /// | 3  | Bag     | $0.50 |
    pub fn seed() -> Self {
        Catalog {
            products: vec![
                Product::new(1, "Baskets", 100),
                Product::new(2, "Socks", 20),
                Product::new(3, "Bag", 50),
            ],
        }
    }

    /// Resolves a product identifier to its product.
    ///
    /// Linear scan; catalog sizes in this domain are small and bounded.
    /// Returns `None` for an unknown id - the caller decides whether that
    /// is an error (adds) or irrelevant (listings).
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns all products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
