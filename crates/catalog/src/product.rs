use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use kirana_core::{Amount, ProductId, VariantId};

/// One sellable variant of a product (pack size, weight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: VariantId,
    pub price: Amount,
    /// Pre-discount reference price; absent when the catalog carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrp: Option<Amount>,
}

/// Catalog entry as pricing sees it: id, price, MRP, variants.
///
/// Read-only here; ownership (and any validation of the numbers) stays with
/// the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceableProduct {
    pub id: ProductId,
    pub price: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrp: Option<Amount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
}

/// Unit price and MRP after variant resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivePrice {
    pub price: Amount,
    pub mrp: Amount,
}

impl PriceableProduct {
    pub fn new(id: impl Into<ProductId>, price: Amount, mrp: Option<Amount>) -> Self {
        Self {
            id: id.into(),
            price,
            mrp,
            variants: Vec::new(),
        }
    }

    pub fn with_variants(mut self, variants: Vec<ProductVariant>) -> Self {
        self.variants = variants;
        self
    }

    pub fn variant(&self, variant_id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == variant_id)
    }

    /// Resolve the unit price for an optional variant selection.
    ///
    /// A selection that matches no variant falls back to the product's own
    /// price (not an error). MRP falls back to the effective price when the
    /// catalog carries none.
    pub fn effective_price(&self, variant_id: Option<&VariantId>) -> EffectivePrice {
        let (price, mrp) = match variant_id.and_then(|id| self.variant(id)) {
            Some(variant) => (variant.price, variant.mrp),
            None => (self.price, self.mrp),
        };
        EffectivePrice {
            price,
            mrp: mrp.unwrap_or(price),
        }
    }
}

/// Product lookup keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: HashMap<ProductId, PriceableProduct>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: PriceableProduct) {
        self.products.insert(product.id.clone(), product);
    }

    pub fn get(&self, id: &ProductId) -> Option<&PriceableProduct> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<PriceableProduct> for Catalog {
    fn from_iter<I: IntoIterator<Item = PriceableProduct>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}
