use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geovec::{vec3, Vec3};
use geovec_bench::*;

// ============================================================
// Vec2
// ============================================================

fn vec2_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec2/length");

    group.bench_function("f32", |b| {
        let v = random_vec2f32(1)[0];
        b.iter(|| black_box(black_box(v).length()))
    });

    group.bench_function("f64", |b| {
        let v = random_vec2f64(1)[0];
        b.iter(|| black_box(black_box(v).length()))
    });

    group.finish();
}

fn vec2_is_anticollinear(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec2/is_anticollinear");

    group.bench_function("f64", |b| {
        let v = random_vec2f64(1)[0];
        let w = v.anticollinear(2.0);
        b.iter(|| black_box(black_box(v).is_anticollinear(black_box(w))))
    });

    group.finish();
}

// ============================================================
// Vec3
// ============================================================

fn vec3_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/dot");

    group.bench_function("f32", |b| {
        let d = random_vec3f32(2);
        let (a, v) = (d[0], d[1]);
        b.iter(|| black_box(black_box(a).dot(black_box(v))))
    });

    group.bench_function("f64", |b| {
        let d = random_vec3f64(2);
        let (a, v) = (d[0], d[1]);
        b.iter(|| black_box(black_box(a).dot(black_box(v))))
    });

    group.finish();
}

fn vec3_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/cross");

    group.bench_function("f32", |b| {
        let d = random_vec3f32(2);
        let (a, v) = (d[0], d[1]);
        b.iter(|| black_box(vec3::cross(black_box(a), black_box(v))))
    });

    group.bench_function("f64", |b| {
        let d = random_vec3f64(2);
        let (a, v) = (d[0], d[1]);
        b.iter(|| black_box(vec3::cross(black_box(a), black_box(v))))
    });

    group.finish();
}

fn vec3_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/normalize");

    group.bench_function("f32", |b| {
        let v = random_vec3f32(1)[0];
        b.iter(|| black_box(black_box(v).normalize()))
    });

    group.bench_function("f64", |b| {
        let v = random_vec3f64(1)[0];
        b.iter(|| black_box(black_box(v).normalize()))
    });

    group.finish();
}

fn vec3_length_xy(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/length_xy");

    group.bench_function("f64", |b| {
        let v = random_vec3f64(1)[0];
        b.iter(|| black_box(black_box(v).length_xy()))
    });

    group.finish();
}

// ============================================================
// Workloads
// ============================================================

fn workload_centroid_spread(c: &mut Criterion) {
    let n = 10_000;
    let points = random_vec3f64(n);

    c.bench_function("workload/centroid_spread_10k", |b| {
        b.iter(|| {
            let mut sum = Vec3::zero();
            for p in &points {
                sum += *p;
            }
            let centroid = sum / n as f64;
            let spread = points
                .iter()
                .map(|p| vec3::distance(*p, centroid))
                .fold(0.0, f64::max);
            black_box(spread)
        })
    });
}

criterion_group!(
    benches,
    vec2_length,
    vec2_is_anticollinear,
    vec3_dot,
    vec3_cross,
    vec3_normalize,
    vec3_length_xy,
    workload_centroid_spread,
);
criterion_main!(benches);
