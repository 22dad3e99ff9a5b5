use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scrollrig_core::{Easing, Keyframe, KeyframeTable, Scene, SceneConfig};

fn dense_table(n: usize) -> KeyframeTable {
    let easings = Easing::ALL;
    let frames = (0..n)
        .map(|i| {
            let key = i as f32 / (n - 1) as f32;
            Keyframe::new(key, [key, -key, key * 2.0, 0.1, 0.2, key]).with_easing(easings[i % 4])
        })
        .collect();
    KeyframeTable::new(frames).expect("valid table")
}

fn bench_sample(c: &mut Criterion) {
    let small = dense_table(2);
    let large = dense_table(256);
    c.bench_function("sample_two_keys", |b| {
        b.iter(|| small.sample(black_box(0.37)))
    });
    c.bench_function("sample_256_keys", |b| {
        b.iter(|| large.sample(black_box(0.37)))
    });
}

fn bench_scene_update(c: &mut Criterion) {
    let mut scene = Scene::new(SceneConfig::landing_page()).expect("preset");
    let mut progress = 0.0f32;
    c.bench_function("landing_page_update", |b| {
        b.iter(|| {
            progress = (progress + 0.001) % 1.0;
            scene.update(black_box(1.0 / 60.0), progress).progress
        })
    });
}

criterion_group!(benches, bench_sample, bench_scene_update);
criterion_main!(benches);
