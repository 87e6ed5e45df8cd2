//! Service-area classification for the delivery allow-list.
//!
//! Stateless matching over an ordered, immutable list of locality names for
//! one city. No IO and no errors: unmatched or malformed input always yields
//! a negative result.

pub mod area;
pub mod resolver;

pub use area::ServiceAreaDirectory;
pub use resolver::{GeocodedAddress, ServiceabilityResolver, ServiceabilityResult};
