//! The pricing engine: cart breakdown and delivery-charge quoting.

use serde::{Deserialize, Serialize};

use kirana_catalog::{CartLine, Catalog};
use kirana_core::{Amount, Pincode, money};

use crate::config::PricingConfig;
use crate::line::{LineResolution, resolve_lines};

/// Deterministic cost breakdown for one cart.
///
/// Computed fresh on every call; no identity, no mutation after construction.
/// Invariant: `total == subtotal + delivery_fee + handling_charges +
/// platform_fee + gst` for any input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub subtotal: Amount,
    pub delivery_fee: Amount,
    pub handling_charges: Amount,
    pub platform_fee: Amount,
    pub gst: Amount,
    pub total: Amount,
    /// MRP total minus subtotal. Not floored: inconsistent catalog data
    /// (price above MRP) shows up as negative savings.
    pub savings: Amount,
    pub item_count: i64,
}

/// Delivery-charge quote for an order value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCharges {
    pub delivery_fee: Amount,
    pub is_free_delivery: bool,
    pub minimum_for_free: Amount,
    /// How much more the customer must add to reach free delivery; 0 when
    /// already free.
    pub amount_for_free_delivery: Amount,
}

/// Cart pricing engine over an immutable tariff.
///
/// Stateless between calls; safe to share across request contexts without
/// coordination.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price a cart against the catalog.
    ///
    /// Lines that cannot be resolved contribute nothing (see [`crate::line`]);
    /// the computation itself never fails.
    pub fn calculate_pricing(&self, lines: &[CartLine], catalog: &Catalog) -> PricingBreakdown {
        let mut subtotal: Amount = 0.0;
        let mut total_mrp: Amount = 0.0;
        let mut item_count: i64 = 0;

        for resolution in resolve_lines(lines, catalog) {
            if let LineResolution::Resolved(line) = resolution {
                subtotal += line.line_total();
                total_mrp += line.line_mrp();
                item_count += line.quantity;
            }
        }

        let delivery_fee = self.delivery_fee_for(subtotal);
        let handling_charges = self.config.handling_charge;
        let platform_fee = self.config.platform_fee;
        // GST base excludes the delivery fee.
        let taxable = subtotal + handling_charges + platform_fee;
        let gst = money::round_to_rupee(self.config.gst_rate * taxable) as Amount;
        let total = subtotal + delivery_fee + handling_charges + platform_fee + gst;

        PricingBreakdown {
            subtotal,
            delivery_fee,
            handling_charges,
            platform_fee,
            gst,
            total,
            savings: total_mrp - subtotal,
            item_count,
        }
    }

    /// Quote delivery charges for an order value.
    ///
    /// Pure function of the order value; the pincode is accepted but does not
    /// vary the fee today (one citywide threshold).
    pub fn calculate_delivery_charges(
        &self,
        _pincode: &Pincode,
        order_value: Amount,
    ) -> DeliveryCharges {
        let is_free_delivery = order_value >= self.config.free_delivery_threshold;
        DeliveryCharges {
            delivery_fee: if is_free_delivery {
                0.0
            } else {
                self.config.delivery_fee
            },
            is_free_delivery,
            minimum_for_free: self.config.free_delivery_threshold,
            amount_for_free_delivery: if is_free_delivery {
                0.0
            } else {
                (self.config.free_delivery_threshold - order_value).max(0.0)
            },
        }
    }

    fn delivery_fee_for(&self, subtotal: Amount) -> Amount {
        if subtotal >= self.config.free_delivery_threshold {
            0.0
        } else {
            self.config.delivery_fee
        }
    }
}
