// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pagewire::{sanitize_input, FieldKind};

fn sanitize_benchmark(c: &mut Criterion) {
    let inputs = vec![
        "John Smith",
        "<b>Jane</b> Doe<script>alert(1)</script>",
        "<img src=x onerror=alert(1)>Tom & \"Jerry's\"",
        "Hello,\n\n<script type=\"text/javascript\">\nsteal(document.cookie)\n</script>\nThanks",
    ];

    c.bench_function("sanitize_input", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(sanitize_input(black_box(input)));
            }
        })
    });
}

fn validation_benchmark(c: &mut Criterion) {
    let values = [
        (FieldKind::Name, "John Smith"),
        (FieldKind::Email, "first.last@mail.example.org"),
        (FieldKind::Subject, "Website redesign"),
        (FieldKind::Service, "web-design"),
        (FieldKind::Message, "We would like a quote for a five page site."),
    ];

    c.bench_function("validate_all_fields", |b| {
        b.iter(|| {
            for (kind, value) in &values {
                black_box(kind.validate(black_box(value)));
            }
        })
    });
}

criterion_group!(benches, sanitize_benchmark, validation_benchmark);
criterion_main!(benches);
