use criterion::{black_box, criterion_group, criterion_main, Criterion};
use theme_sampler::{derive_from_buffer, ColorAggregator, PixelBuffer, ThemeConfig};

fn sample_buffer() -> PixelBuffer {
    // 64x36 gradient buffer, roughly what a 16:9 backdrop downsamples to
    let (width, height) = (64u32, 36u32);
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 4) as u8);
            data.push((y * 7) as u8);
            data.push(160);
            data.push(255);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}

fn benchmark_aggregation(c: &mut Criterion) {
    let buffer = sample_buffer();
    let aggregator = ColorAggregator::new();

    c.bench_function("average_color_64x36", |b| {
        b.iter(|| aggregator.average_color(black_box(&buffer)))
    });
}

fn benchmark_full_derivation(c: &mut Criterion) {
    let buffer = sample_buffer();
    let config = ThemeConfig::default();

    c.bench_function("derive_from_buffer_64x36", |b| {
        b.iter(|| derive_from_buffer(black_box(&buffer), black_box(&config)))
    });
}

criterion_group!(benches, benchmark_aggregation, benchmark_full_derivation);
criterion_main!(benches);
