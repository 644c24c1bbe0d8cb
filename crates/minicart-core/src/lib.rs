//! # minicart-core: Pure Business Logic for Minicart
//!
//! This crate is the **heart** of Minicart. It contains all cart and catalog
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Minicart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Adapter (JS)                            │   │
//! │  │    Product buttons ──► Cart display ──► Running total          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    minicart-session                             │   │
//! │  │    get_cart, add_to_cart, remove_from_cart                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ minicart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │   cart    │  │   error   │  │   │
//! │  │   │   Money   │  │  Product  │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │           │  │  Catalog  │  │ CartLine  │  │  Error    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product definitions and the fixed product set
//! - [`cart`] - Cart, CartLine, and the add/remove/total operations
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Rendering, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: The one fallible path (catalog construction) is typed
//!
//! ## Example Usage
//!
//! ```rust
//! use minicart_core::{Cart, Catalog};
//!
//! let catalog = Catalog::seed();
//! let mut cart = Cart::new();
//!
//! // Resolve an identifier, then add
//! let basket = catalog.get(1).unwrap();
//! cart.add(basket);
//! cart.add(basket); // same product: quantity becomes 2
//!
//! assert_eq!(cart.total().cents(), 200);
//! assert_eq!(cart.lines().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use minicart_core::Cart` instead of
// `use minicart_core::cart::Cart`

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, Product, ProductId};
pub use error::{CatalogError, CatalogResult};
pub use money::Money;
