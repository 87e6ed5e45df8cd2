//! `kirana-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the domain error model, and currency
//! rounding/formatting shared by the pricing and serviceability crates.

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{Pincode, ProductId, QuoteId, VariantId};
pub use money::{Amount, format_price, round_to_rupee};
