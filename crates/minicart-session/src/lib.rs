//! # Minicart Session Library
//!
//! The session-scoped context handed to the view layer. This crate wires
//! the pure cart core to whatever renders it: it owns the shared cart
//! state, resolves product identifiers against the catalog, and answers
//! every operation with a serializable snapshot the view can render.
//!
//! ## Module Organization
//! ```text
//! minicart_session/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── state.rs        ◄─── Cart state management (Arc<Mutex<Cart>>)
//! ├── commands.rs     ◄─── The operations the view calls
//! └── error.rs        ◄─── API error type for operations
//! ```
//!
//! ## Usage
//! ```rust
//! use minicart_session::CartSession;
//!
//! let session = CartSession::with_seed_catalog();
//!
//! session.add_to_cart(1)?;          // Baskets
//! session.add_to_cart(1)?;          // quantity becomes 2
//! let response = session.add_to_cart(2)?; // Socks
//!
//! assert_eq!(response.totals.total_cents, 220);
//!
//! let response = session.remove_from_cart(1); // whole Baskets line out
//! assert_eq!(response.totals.total_cents, 20);
//! # Ok::<(), minicart_session::ApiError>(())
//! ```
//!
//! The view adapter itself (buttons in, rendered markup out) lives outside
//! this workspace; this crate deliberately knows nothing about rendering.

pub mod commands;
pub mod error;
pub mod state;

pub use commands::{CartResponse, CartSession};
pub use error::{ApiError, ErrorCode};
pub use state::CartState;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initializes tracing (logging) for an embedding shell.
///
/// Call once at startup. Default filter is `info,minicart=debug`; override
/// with `RUST_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,minicart=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
