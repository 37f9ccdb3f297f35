use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::time::Duration;

use texture_codec_core::colorspace::{rgba_to_ycocga, ycocga_to_rgba, ALPHA_BLOCK_LEN, RGBA_BLOCK_LEN, YCOCG_BLOCK_LEN};

fn create_bench_block() -> [u8; RGBA_BLOCK_LEN] {
    let mut rgba = [0u8; RGBA_BLOCK_LEN];
    for i in 0..256 {
        rgba[i * 4] = (i % 256) as u8;
        rgba[i * 4 + 1] = ((i * 3) % 256) as u8;
        rgba[i * 4 + 2] = ((i * 7) % 256) as u8;
        rgba[i * 4 + 3] = 255;
    }
    rgba
}

fn criterion_benchmark(c: &mut Criterion) {
    let rgba = create_bench_block();

    let mut group = c.benchmark_group("ycocg");
    group.measurement_time(Duration::from_secs(30));
    group.warm_up_time(Duration::from_secs(10));

    group.bench_function("rgba_to_ycocga", |b| {
        b.iter(|| {
            let mut ycocg = [0i16; YCOCG_BLOCK_LEN];
            let mut a = [0u8; ALPHA_BLOCK_LEN];
            rgba_to_ycocga(black_box(&mut ycocg), black_box(&mut a), black_box(&rgba));
            black_box((&ycocg, &a));
        })
    });

    group.bench_function("ycocga_to_rgba", |b| {
        let mut ycocg = [0i16; YCOCG_BLOCK_LEN];
        let mut a = [0u8; ALPHA_BLOCK_LEN];
        rgba_to_ycocga(&mut ycocg, &mut a, &rgba);

        b.iter(|| {
            let mut out = [0u8; RGBA_BLOCK_LEN];
            ycocga_to_rgba(black_box(&mut out), black_box(&ycocg), black_box(&a));
            black_box(&out);
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
