//! Point arithmetic benchmarks

use criterion::{
    criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion,
};
use primecurve::{
    arithmetic::{add, double, scalar_multiply},
    encoding::parse_hex,
    BigUint, Curve, CurveId, Point,
};
use std::hint::black_box;

const SCALAR: &str = "519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464";

fn test_scalar(curve: &Curve) -> BigUint {
    parse_hex(SCALAR).unwrap() % curve.order()
}

fn test_point(curve: &Curve) -> Point {
    curve.mul_generator(&BigUint::from(0xdead_beef_u32))
}

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Curve) {
    let p = test_point(curve);
    let q = curve.generator().clone();
    group.bench_function(format!("{} add", curve.name()), |b| {
        b.iter(|| add(black_box(&p), black_box(&q), curve))
    });
}

fn bench_point_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Curve) {
    let p = test_point(curve);
    group.bench_function(format!("{} double", curve.name()), |b| {
        b.iter(|| double(black_box(&p), curve))
    });
}

fn bench_scalar_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Curve) {
    let p = test_point(curve);
    let k = test_scalar(curve);
    group.bench_function(format!("{} scalar mul", curve.name()), |b| {
        b.iter(|| scalar_multiply(black_box(&k), black_box(&p), curve))
    });
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    for id in [CurveId::NistP256, CurveId::Secp256k1, CurveId::NistP521] {
        let curve = Curve::lookup(id);
        bench_point_add(&mut group, &curve);
        bench_point_double(&mut group, &curve);
        bench_scalar_mul(&mut group, &curve);
    }
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
