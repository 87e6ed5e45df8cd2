use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kirana_catalog::{CartLine, Catalog};
use kirana_core::{Pincode, QuoteId};
use kirana_pricing::{PricingBreakdown, PricingEngine};
use kirana_serviceability::{ServiceabilityResolver, ServiceabilityResult};

/// Checkout quote: the bill plus the delivery verdict for one cart+address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub id: QuoteId,
    /// The area text as the customer entered it (trimmed).
    pub area: String,
    pub pincode: Pincode,
    pub serviceability: ServiceabilityResult,
    /// Present only for serviceable locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_estimate: Option<String>,
    pub pricing: PricingBreakdown,
    pub created_at: DateTime<Utc>,
}

/// Composes the pricing engine and the serviceability resolver.
///
/// Both collaborators are stateless; the service itself holds no per-request
/// state and can be shared across request contexts.
#[derive(Debug, Clone, Default)]
pub struct CheckoutService {
    engine: PricingEngine,
    resolver: ServiceabilityResolver,
}

impl CheckoutService {
    pub fn new(engine: PricingEngine, resolver: ServiceabilityResolver) -> Self {
        Self { engine, resolver }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn resolver(&self) -> &ServiceabilityResolver {
        &self.resolver
    }

    /// Build a quote for a cart delivered to `area`/`pincode`.
    ///
    /// Pricing is computed whether or not the location is serviceable — the
    /// storefront shows the bill before the address gate. The delivery
    /// estimate is attached only when the location is serviceable.
    pub fn quote(
        &self,
        lines: &[CartLine],
        catalog: &Catalog,
        area: &str,
        pincode: Pincode,
    ) -> CheckoutQuote {
        let serviceability = self.resolver.check_area(area);
        let delivery_estimate = serviceability
            .is_serviceable
            .then(|| self.resolver.delivery_time_estimate(&pincode).to_string());

        CheckoutQuote {
            id: QuoteId::new(),
            area: area.trim().to_string(),
            pincode,
            serviceability,
            delivery_estimate,
            pricing: self.engine.calculate_pricing(lines, catalog),
            created_at: Utc::now(),
        }
    }
}
