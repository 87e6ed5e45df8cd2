//! Per-line resolution of a cart against the catalog.

use serde::{Deserialize, Serialize};
use tracing::warn;

use kirana_catalog::{CartLine, Catalog};
use kirana_core::{Amount, ProductId, VariantId};

/// Why a cart line was excluded from the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The cart referenced a product id absent from the supplied catalog.
    UnknownProduct,
    /// Quantity was zero or negative; the line is a no-op, not an error.
    NonPositiveQuantity,
}

/// Per-line pricing outcome.
///
/// Only `Resolved` lines fold into the breakdown; a `Skipped` line
/// contributes nothing and never fails the whole computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LineResolution {
    Resolved(ResolvedLine),
    Skipped {
        product_id: ProductId,
        reason: SkipReason,
    },
}

/// A cart line with its effective unit price/MRP resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLine {
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
    pub quantity: i64,
    pub unit_price: Amount,
    pub unit_mrp: Amount,
}

impl ResolvedLine {
    pub fn line_total(&self) -> Amount {
        self.unit_price * self.quantity as f64
    }

    pub fn line_mrp(&self) -> Amount {
        self.unit_mrp * self.quantity as f64
    }
}

/// Resolve every cart line against the catalog, in order.
pub fn resolve_lines(lines: &[CartLine], catalog: &Catalog) -> Vec<LineResolution> {
    lines.iter().map(|line| resolve_line(line, catalog)).collect()
}

fn resolve_line(line: &CartLine, catalog: &Catalog) -> LineResolution {
    if line.quantity <= 0 {
        warn!(
            product_id = %line.product_id,
            quantity = line.quantity,
            "skipping cart line with non-positive quantity"
        );
        return LineResolution::Skipped {
            product_id: line.product_id.clone(),
            reason: SkipReason::NonPositiveQuantity,
        };
    }

    let Some(product) = catalog.get(&line.product_id) else {
        warn!(product_id = %line.product_id, "skipping cart line for unknown product");
        return LineResolution::Skipped {
            product_id: line.product_id.clone(),
            reason: SkipReason::UnknownProduct,
        };
    };

    let effective = product.effective_price(line.variant_id.as_ref());
    LineResolution::Resolved(ResolvedLine {
        product_id: line.product_id.clone(),
        variant_id: line.variant_id.clone(),
        quantity: line.quantity,
        unit_price: effective.price,
        unit_mrp: effective.mrp,
    })
}
