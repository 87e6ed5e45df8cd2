//! Checkout quote composition.
//!
//! Combines the pricing engine and the serviceability resolver into the quote
//! record the order flow consumes: one bill plus one delivery verdict for a
//! cart and an address.

pub mod quote;

pub use quote::{CheckoutQuote, CheckoutService};
