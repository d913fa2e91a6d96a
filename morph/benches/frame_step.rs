use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use morph::prelude::*;

fn frame_step(c: &mut Criterion) {
    let mut logo = RuntimeLogo::new(
        LogoConfig::default(),
        SimplexField::new(1),
        &FixedDetector::default(),
        &mut StdRng::seed_from_u64(1),
    );

    c.bench_function("step", |b| {
        b.iter(|| {
            black_box(logo.step());
        })
    });

    c.bench_function("step_and_markup", |b| {
        b.iter(|| {
            logo.step();
            black_box(logo.markup());
        })
    });

    c.bench_function("flatten_outline", |b| {
        let outline = logo.snapshot().outline.clone();
        b.iter(|| black_box(outline.flatten(16)))
    });
}

criterion_group!(benches, frame_step);
criterion_main!(benches);
