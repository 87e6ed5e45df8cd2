use serde::{Deserialize, Serialize};

use kirana_core::{ProductId, VariantId};

/// One entry in a shopping cart: product, optional variant, quantity.
///
/// Ephemeral — constructed per pricing request, never persisted by this core.
/// Quantity is carried as given: zero or negative lines flow through pricing
/// as no-ops rather than being rejected at the type level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
    pub quantity: i64,
}

impl CartLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            variant_id: None,
            quantity,
        }
    }

    pub fn with_variant(
        product_id: impl Into<ProductId>,
        variant_id: impl Into<VariantId>,
        quantity: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            variant_id: Some(variant_id.into()),
            quantity,
        }
    }
}
