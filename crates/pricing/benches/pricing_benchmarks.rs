use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use kirana_catalog::{CartLine, Catalog, PriceableProduct};
use kirana_core::Pincode;
use kirana_pricing::PricingEngine;

fn build_catalog(products: usize) -> Catalog {
    (0..products)
        .map(|n| {
            let price = (n % 40 + 10) as f64;
            PriceableProduct::new(format!("p{n}"), price, Some(price + 5.0))
        })
        .collect()
}

fn build_cart(lines: usize) -> Vec<CartLine> {
    (0..lines)
        .map(|n| CartLine::new(format!("p{n}"), (n % 4 + 1) as i64))
        .collect()
}

fn bench_calculate_pricing(c: &mut Criterion) {
    let engine = PricingEngine::default();
    let mut group = c.benchmark_group("calculate_pricing");

    for size in [1usize, 10, 100] {
        let catalog = build_catalog(size);
        let cart = build_cart(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| engine.calculate_pricing(black_box(&cart), black_box(&catalog)))
        });
    }

    group.finish();
}

fn bench_delivery_charges(c: &mut Criterion) {
    let engine = PricingEngine::default();
    let pincode = Pincode::new("411001");

    c.bench_function("calculate_delivery_charges", |b| {
        b.iter(|| engine.calculate_delivery_charges(black_box(&pincode), black_box(149.0)))
    });
}

criterion_group!(benches, bench_calculate_pricing, bench_delivery_charges);
criterion_main!(benches);
