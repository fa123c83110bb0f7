use criterion::{criterion_group, criterion_main, Criterion};
use geo_closest_point::{closest_point, closest_points, Geometry};
use geo_types::{point, LineString, MultiLineString, Point, Polygon};

fn circle(cx: f64, cy: f64, r: f64, n: usize) -> LineString<f64> {
    (0..=n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::PI * 2.;
            (cx + r * a.cos(), cy + r * a.sin())
        })
        .collect::<Vec<_>>()
        .into()
}

fn city() -> Geometry<f64> {
    let park = Polygon::new(
        circle(0., 0., 100., 256),
        vec![circle(10., 10., 5., 64), circle(-30., 20., 8., 64)],
    );
    let streets = MultiLineString::new(
        (0..50)
            .map(|i| {
                let offset = 150. + i as f64 * 10.;
                LineString::from(vec![(offset, -200.), (offset, 200.)])
            })
            .collect(),
    );
    Geometry::GeometryCollection(vec![
        Geometry::Polygon(park),
        Geometry::MultiLineString(streets),
        Geometry::Empty,
    ])
}

pub fn single_query_bench(c: &mut Criterion) {
    let geometry = city();
    let mut group = c.benchmark_group("city");
    group.bench_function("outside", |b| {
        b.iter(|| closest_point(&point!(x: 120., y: 300.), &geometry))
    });
    group.bench_function("inside", |b| {
        b.iter(|| closest_point(&point!(x: 0., y: 0.), &geometry))
    });
    group.finish();
}

pub fn batch_bench(c: &mut Criterion) {
    let geometry = city();
    let queries: Vec<Point<f64>> = (0..1000)
        .map(|i| point!(x: (i % 40) as f64 * 20. - 400., y: (i / 40) as f64 * 20. - 250.))
        .collect();
    let mut group = c.benchmark_group("city");
    group.sample_size(10);
    group.bench_function("batch", |b| b.iter(|| closest_points(&queries, &geometry)));
    group.finish();
}

criterion_group!(benches, single_query_bench, batch_bench);
criterion_main!(benches);
