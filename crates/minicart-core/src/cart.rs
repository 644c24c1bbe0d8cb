//! # Cart Module
//!
//! The shopping cart: an ordered, id-unique collection of product lines.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  View Action              Session Call             Cart State Change    │
//! │  ───────────              ────────────             ─────────────────    │
//! │                                                                         │
//! │  Click "Add" ───────────► add_to_cart() ─────────► add(product)         │
//! │                                                    (push or qty += 1)   │
//! │                                                                         │
//! │  Click "Remove" ────────► remove_from_cart() ────► remove(id)           │
//! │                                                    (whole line out)     │
//! │                                                                         │
//! │  Render cart ───────────► get_cart() ────────────► lines() + total()    │
//! │                                                    (read only)          │
//! │                                                                         │
//! │  State machine: "has N lines, N ≥ 0". add is N→N or N+1,                │
//! │  remove is N→N or N-1. There is no terminal state.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Product, ProductId};
use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart: one product and how many of it.
///
/// ## Design Notes
/// - `product`: snapshot of the catalog entry taken when the line was first
///   added. Products are immutable, so the snapshot always matches the
///   catalog; holding an owned copy keeps the cart free of lifetimes.
/// - `quantity`: always ≥ 1. A line that would reach quantity 0 is removed
///   from the cart, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// The product this line sells.
    pub product: Product,

    /// Quantity in cart (≥ 1). Mutated only through [`Cart::add`].
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line for a product with quantity 1.
    fn new(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity) in cents.
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    /// Calculates the line total as Money.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product increases
///   quantity instead of appending a second line)
/// - Every line has quantity ≥ 1
/// - Lines keep first-add insertion order; re-adding never reorders
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in first-add order.
    lines: Vec<CartLine>,

    /// When the cart was created.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: its quantity increases by 1
    ///   and the line keeps its position
    /// - If not: a new line with quantity 1 is appended
    ///
    /// Infallible by contract: the caller resolves the identifier to a valid
    /// catalog Product before calling (see `minicart-session`), so there is
    /// nothing left here to reject.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::new(product));
    }

    /// Removes the whole line for a product id.
    ///
    /// ## Behavior
    /// - Present: the entire line is deleted, regardless of quantity
    /// - Absent: no-op (removing twice equals removing once)
    ///
    /// Postcondition: no line with `product_id` remains.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Calculates the cart total: the sum of all line totals.
    ///
    /// Zero for an empty cart. Pure query, no side effects.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Cart total in cents.
    pub fn total_cents(&self) -> i64 {
        self.total().cents()
    }

    /// Returns the lines in first-add order, read-only.
    ///
    /// Mutation goes through [`Cart::add`] and [`Cart::remove`]; the shared
    /// borrow here makes that structural.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn basket() -> Product {
        Product::new(1, "Baskets", 100)
    }

    fn socks() -> Product {
        Product::new(2, "Socks", 20)
    }

    fn bag() -> Product {
        Product::new(3, "Bag", 50)
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.lines().is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_creates_line_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&basket());

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.total_cents(), 100);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(&basket());
        cart.add(&basket());

        // Still one line, not a duplicate
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_cents(), 200);
    }

    #[test]
    fn test_readd_keeps_first_add_order() {
        let mut cart = Cart::new();
        cart.add(&basket());
        cart.add(&socks());
        cart.add(&basket()); // re-add must not move Baskets behind Socks

        let ids: Vec<ProductId> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        cart.add(&basket());
        cart.add(&basket());
        cart.add(&basket()); // quantity 3

        cart.remove(1);

        // Whole line gone, not decremented to 2
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&socks());

        cart.remove(42);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_cents(), 20);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(&basket());
        cart.add(&socks());

        cart.remove(1);
        let after_first = cart.lines().to_vec();
        cart.remove(1);

        assert_eq!(cart.lines(), &after_first[..]);
        assert_eq!(cart.total_cents(), 20);
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::new();
        cart.add(&bag());
        cart.add(&bag());

        let line = &cart.lines()[0];
        assert_eq!(line.line_total_cents(), 100);
        assert_eq!(line.line_total(), Money::from_cents(100));
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add(&basket());
        cart.add(&basket());
        cart.add(&socks());

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_cents, 220);
    }

    /// Invariants hold across an arbitrary mixed add/remove sequence:
    /// unique ids, quantity ≥ 1, and total == Σ price × quantity.
    #[test]
    fn test_invariants_under_mixed_operations() {
        let mut cart = Cart::new();
        let products = [basket(), socks(), bag()];

        for step in 0..30u32 {
            let product = &products[(step % 3) as usize];
            if step % 7 == 5 {
                cart.remove(product.id);
            } else {
                cart.add(product);
            }

            for (i, line) in cart.lines().iter().enumerate() {
                assert!(line.quantity >= 1);
                assert!(
                    !cart.lines()[..i].iter().any(|l| l.product.id == line.product.id),
                    "duplicate line for product {}",
                    line.product.id
                );
            }

            let expected: i64 = cart
                .lines()
                .iter()
                .map(|l| l.product.price_cents * l.quantity)
                .sum();
            assert_eq!(cart.total_cents(), expected);
        }
    }

    /// End-to-end walkthrough with the seed products:
    /// Baskets $1.00, Socks $0.20, Bag $0.50.
    #[test]
    fn test_seed_products_walkthrough() {
        let mut cart = Cart::new();

        // 1. New cart
        assert_eq!(cart.total_cents(), 0);
        assert!(cart.lines().is_empty());

        // 2. Add Baskets
        cart.add(&basket());
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.total_cents(), 100);

        // 3. Add Baskets again
        cart.add(&basket());
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_cents(), 200);

        // 4. Add Socks
        cart.add(&socks());
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_cents(), 220);

        // 5. Remove Baskets (whole line, despite quantity 2)
        cart.remove(1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product.id, 2);
        assert_eq!(cart.total_cents(), 20);

        // 6. Remove Baskets again (already gone)
        cart.remove(1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_cents(), 20);
    }
}
