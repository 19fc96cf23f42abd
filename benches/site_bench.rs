//! Benchmarks for the dashboard rendering and form validation paths
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use genealina::dashboard::render::{escape_html, message_body_html, preview};
use genealina::site::form::validate_field;
use genealina::site::FormField;
use genealina::ContactMessage;

fn create_message(body_len: usize) -> ContactMessage {
    let body: String = "Hola <b>equipo</b> & \"amigos\"\n"
        .chars()
        .cycle()
        .take(body_len)
        .collect();

    ContactMessage {
        id: "66b1f0c2a1".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Pérez".to_string(),
        email: "ana@example.com".to_string(),
        phone: Some("+51 999 888 777".to_string()),
        message: body,
        created_at: Some("2024-08-06T10:15:00.000Z".to_string()),
    }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [150, 2_000, 20_000] {
        let message = create_message(size);

        group.throughput(Throughput::Bytes(message.message.len() as u64));

        group.bench_function(format!("escape_{}", size), |b| {
            b.iter(|| escape_html(black_box(&message.message)))
        });

        group.bench_function(format!("preview_{}", size), |b| {
            b.iter(|| preview(black_box(&message.message)))
        });

        group.bench_function(format!("body_html_{}", size), |b| {
            b.iter(|| message_body_html(black_box(&message)))
        });
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("email", |b| {
        b.iter(|| validate_field(FormField::Email, black_box("ana.perez@example.com")))
    });

    group.bench_function("phone", |b| {
        b.iter(|| validate_field(FormField::Phone, black_box("+51 (999) 888-777")))
    });

    group.bench_function("message", |b| {
        b.iter(|| {
            validate_field(
                FormField::Message,
                black_box("Necesito una tienda en línea para mi negocio"),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_validation);
criterion_main!(benches);
