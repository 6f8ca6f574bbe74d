//! Envelope construction benchmarks
//!
//! Measures serialization plus transport writes for typical payload shapes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsonapi_core::{ApiStatus, Envelope, HttpTransport, Responder};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize, Clone)]
struct Widget {
    id: u64,
    name: String,
    price_cents: u32,
    tags: Vec<String>,
}

fn widgets(n: usize) -> Vec<Widget> {
    (0..n)
        .map(|i| Widget {
            id: i as u64,
            name: format!("widget-{i}"),
            price_cents: 1999,
            tags: vec!["blue".to_string(), "steel".to_string()],
        })
        .collect()
}

fn bench_respond(c: &mut Criterion) {
    let responder = Responder::default();
    let mut group = c.benchmark_group("respond");

    group.bench_function("empty", |b| {
        b.iter(|| {
            let mut transport = HttpTransport::new();
            responder
                .not_found(&mut transport, black_box(Envelope::empty()))
                .unwrap();
            transport
        })
    });

    group.bench_function("small_object", |b| {
        b.iter(|| {
            let mut transport = HttpTransport::new();
            responder
                .created(
                    &mut transport,
                    black_box(Envelope::new("Widget created", json!({ "id": 42 }))),
                )
                .unwrap();
            transport
        })
    });

    let list = widgets(100);
    group.bench_function("typed_list_100", |b| {
        b.iter(|| {
            let mut transport = HttpTransport::new();
            responder
                .ok(&mut transport, black_box(Envelope::new("", list.clone())))
                .unwrap();
            transport
        })
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let responder = Responder::default();
    let list = widgets(10);

    c.bench_function("build_response", |b| {
        b.iter(|| {
            responder
                .build(ApiStatus::Ok, black_box(Envelope::new("ok", list.clone())))
                .unwrap()
        })
    });

    c.bench_function("status_lookup", |b| {
        b.iter(|| ApiStatus::try_from(black_box(405u16)).is_ok())
    });
}

criterion_group!(benches, bench_respond, bench_build);
criterion_main!(benches);
