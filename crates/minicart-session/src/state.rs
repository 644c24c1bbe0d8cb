//! # Cart State
//!
//! Holds the session's shared cart behind a lock.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple operations may access/modify the cart
//! 2. Only one operation should modify the cart at a time
//! 3. The embedding shell may call in from more than one thread
//!
//! The reference runtime is a single-threaded event loop that processes
//! one UI event to completion before the next; under that embedding the
//! lock is never contended and the ordering guarantee is the event queue's.

use std::sync::{Arc, Mutex};

use minicart_core::Cart;

/// Session-managed cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use minicart_core::Product;

    #[test]
    fn test_with_cart_mut_then_with_cart() {
        let state = CartState::new();
        let socks = Product::new(2, "Socks", 20);

        state.with_cart_mut(|cart| cart.add(&socks));

        let total = state.with_cart(|cart| cart.total_cents());
        assert_eq!(total, 20);
    }

    #[test]
    fn test_each_state_owns_its_own_cart() {
        let a = CartState::new();
        let b = CartState::new();
        let bag = Product::new(3, "Bag", 50);

        a.with_cart_mut(|cart| cart.add(&bag));

        assert_eq!(a.with_cart(|c| c.line_count()), 1);
        assert_eq!(b.with_cart(|c| c.line_count()), 0);
    }
}
