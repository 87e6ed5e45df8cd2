//! End-to-end checkout flow over the public crate APIs: catalog in, quote out.

use kirana_catalog::{CartLine, Catalog, PriceableProduct, ProductVariant};
use kirana_checkout::CheckoutService;
use kirana_core::{Pincode, VariantId, format_price};
use kirana_pricing::{PricingConfig, PricingEngine};
use kirana_serviceability::{ServiceAreaDirectory, ServiceabilityResolver};

fn storefront_catalog() -> Catalog {
    // Quiet the skip warnings unless RUST_LOG asks for them.
    kirana_observability::init_with_default_filter("error");
    [
        PriceableProduct::new("milk-amul", 27.0, Some(29.0)).with_variants(vec![
            ProductVariant {
                id: VariantId::new("500ml"),
                price: 27.0,
                mrp: Some(29.0),
            },
            ProductVariant {
                id: VariantId::new("1l"),
                price: 52.0,
                mrp: Some(56.0),
            },
        ]),
        PriceableProduct::new("bread-wheat", 45.0, Some(50.0)),
        PriceableProduct::new("eggs-dozen", 84.0, Some(90.0)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn serviceable_checkout_produces_a_complete_quote() {
    let service = CheckoutService::default();
    let cart = [
        CartLine::with_variant("milk-amul", "1l", 2),
        CartLine::new("bread-wheat", 1),
        CartLine::new("eggs-dozen", 1),
    ];

    let quote = service.quote(
        &cart,
        &storefront_catalog(),
        "koregaon park",
        Pincode::new("411001"),
    );

    // 2×52 + 45 + 84 = 233 ≥ 199 → free delivery; GST = round(0.05 × 238) = 12.
    assert_eq!(quote.pricing.subtotal, 233.0);
    assert_eq!(quote.pricing.delivery_fee, 0.0);
    assert_eq!(quote.pricing.gst, 12.0);
    assert_eq!(quote.pricing.total, 250.0);
    // MRP total = 2×56 + 50 + 90 = 252.
    assert_eq!(quote.pricing.savings, 19.0);
    assert_eq!(quote.pricing.item_count, 4);

    assert!(quote.serviceability.is_serviceable);
    assert_eq!(
        quote.serviceability.matched_area.as_deref(),
        Some("Koregaon Park")
    );
    assert_eq!(quote.delivery_estimate.as_deref(), Some("8-15 minutes"));
    assert_eq!(quote.area, "koregaon park");

    assert_eq!(format_price(quote.pricing.total), "₹250");
}

#[test]
fn small_order_outside_the_city_is_priced_but_not_serviceable() {
    let service = CheckoutService::default();
    let cart = [CartLine::new("bread-wheat", 2)];

    let quote = service.quote(
        &cart,
        &storefront_catalog(),
        "Nagpur",
        Pincode::new("440001"),
    );

    // 2×45 = 90 < 199 → flat fee; GST = round(0.05 × 95) = 5.
    assert_eq!(quote.pricing.subtotal, 90.0);
    assert_eq!(quote.pricing.delivery_fee, 25.0);
    assert_eq!(quote.pricing.gst, 5.0);
    assert_eq!(quote.pricing.total, 125.0);

    assert!(!quote.serviceability.is_serviceable);
    assert_eq!(quote.delivery_estimate, None);
}

#[test]
fn quote_serializes_for_the_storefront_api() {
    let service = CheckoutService::default();
    let cart = [CartLine::new("eggs-dozen", 1)];

    let quote = service.quote(
        &cart,
        &storefront_catalog(),
        "Baner",
        Pincode::new("411045"),
    );
    let json = serde_json::to_value(&quote).unwrap();

    assert_eq!(json["area"], "Baner");
    assert_eq!(json["pincode"], "411045");
    assert_eq!(json["serviceability"]["isServiceable"], true);
    assert_eq!(json["serviceability"]["matchedArea"], "Baner");
    assert_eq!(json["deliveryEstimate"], "8-15 minutes");
    assert_eq!(json["pricing"]["subtotal"], 84.0);
    assert_eq!(json["pricing"]["deliveryFee"], 25.0);
    assert!(json["id"].is_string());
    assert!(json["createdAt"].is_string());
}

#[test]
fn custom_tariff_and_custom_city_flow_end_to_end() {
    let engine = PricingEngine::new(PricingConfig {
        delivery_fee: 30.0,
        free_delivery_threshold: 299.0,
        handling_charge: 2.0,
        platform_fee: 3.0,
        gst_rate: 0.05,
    });
    let resolver =
        ServiceabilityResolver::new(ServiceAreaDirectory::new(["Indiranagar", "Koramangala"]));
    let service = CheckoutService::new(engine, resolver);

    let cart = [CartLine::new("eggs-dozen", 3)]; // 252 < 299
    let quote = service.quote(
        &cart,
        &storefront_catalog(),
        "indiranagar",
        Pincode::new("560038"),
    );

    assert!(quote.serviceability.is_serviceable);
    assert_eq!(quote.pricing.delivery_fee, 30.0);
    // GST = round(0.05 × 257) = 13.
    assert_eq!(quote.pricing.gst, 13.0);
    assert_eq!(quote.pricing.total, 252.0 + 30.0 + 2.0 + 3.0 + 13.0);
}
