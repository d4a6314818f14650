use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geocell::{BoundingBox, GeoHash, TwoGeoHashBoundingBox, location};

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for precision in [5, 9, 12] {
        group.bench_with_input(
            BenchmarkId::new("encode", precision),
            &precision,
            |b, &precision| {
                b.iter(|| {
                    GeoHash::from_coordinate(black_box(53.2030476), black_box(45.0324948), precision)
                        .unwrap()
                })
            },
        );
    }

    group.bench_function("decode_12", |b| {
        b.iter(|| GeoHash::from_text(black_box("v12n8trdjnvu")).unwrap())
    });

    let hash = GeoHash::from_text("v12n8trdjnvu").unwrap();
    group.bench_function("to_text_12", |b| b.iter(|| black_box(&hash).to_text().unwrap()));

    group.finish();
}

fn benchmark_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let hash = GeoHash::from_text("v12n8trdj").unwrap();

    group.bench_function("next", |b| b.iter(|| black_box(&hash).next_cell()));
    group.bench_function("northern_neighbour", |b| {
        b.iter(|| black_box(&hash).northern_neighbour())
    });
    group.bench_function("adjacent", |b| b.iter(|| black_box(&hash).adjacent()));
    group.bench_function("child_hashes", |b| b.iter(|| black_box(&hash).child_hashes()));

    group.finish();
}

fn benchmark_regions(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions");
    let bbox = BoundingBox::new(
        location(53.203643, 45.008654),
        location(53.200764, 45.011658),
    );

    group.bench_function("from_bounding_box", |b| {
        b.iter(|| TwoGeoHashBoundingBox::from_bounding_box(black_box(&bbox), 7).unwrap())
    });
    group.bench_function("from_text", |b| {
        b.iter(|| TwoGeoHashBoundingBox::from_text(black_box("v12n8jp")).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_codec,
    benchmark_navigation,
    benchmark_regions
);
criterion_main!(benches);
