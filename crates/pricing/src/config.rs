//! The tariff: process-wide pricing constants.

use serde::{Deserialize, Serialize};

use kirana_core::{Amount, DomainError, DomainResult};

/// Pricing constants, immutable for the life of the engine.
///
/// Injected at construction rather than read from module-level globals;
/// `Default` is the production tariff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Flat delivery fee below the free-delivery threshold.
    pub delivery_fee: Amount,
    /// Order value at and above which delivery is free.
    pub free_delivery_threshold: Amount,
    /// Flat handling charge per order.
    pub handling_charge: Amount,
    /// Flat platform fee per order.
    pub platform_fee: Amount,
    /// GST rate applied to subtotal + handling charge + platform fee.
    pub gst_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            delivery_fee: 25.0,
            free_delivery_threshold: 199.0,
            handling_charge: 2.0,
            platform_fee: 3.0,
            gst_rate: 0.05,
        }
    }
}

impl PricingConfig {
    /// Validate a tariff before installing it.
    pub fn validate(&self) -> DomainResult<()> {
        if self.delivery_fee < 0.0
            || self.free_delivery_threshold < 0.0
            || self.handling_charge < 0.0
            || self.platform_fee < 0.0
        {
            return Err(DomainError::validation("charges cannot be negative"));
        }
        if !(0.0..=1.0).contains(&self.gst_rate) {
            return Err(DomainError::validation(format!(
                "gst_rate must be within [0, 1], got {}",
                self.gst_rate
            )));
        }
        Ok(())
    }
}
