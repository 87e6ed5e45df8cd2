//! Cart pricing engine.
//!
//! Deterministic cost breakdown over cart lines and a catalog lookup:
//! item subtotal, delivery-fee tiering, flat handling/platform charges, GST
//! and customer savings. **Pure domain** logic — no IO, no storage, no
//! failure modes beyond skipping unresolvable lines.

pub mod config;
pub mod engine;
pub mod line;

pub use config::PricingConfig;
pub use engine::{DeliveryCharges, PricingBreakdown, PricingEngine};
pub use line::{LineResolution, ResolvedLine, SkipReason, resolve_lines};
