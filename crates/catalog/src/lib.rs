//! Catalog read model consumed by pricing.
//!
//! This crate contains the externally-owned product/variant shapes, the
//! ephemeral cart line, and the product lookup, implemented purely as data
//! plus deterministic resolution (no IO, no HTTP, no storage).

pub mod cart;
pub mod product;

pub use cart::CartLine;
pub use product::{Catalog, EffectivePrice, PriceableProduct, ProductVariant};
