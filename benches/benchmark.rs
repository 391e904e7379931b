// Benchmarks for feature encoding and request assembly
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use proxima_api::query::build_query_request;
use proxima_api::write::build_write_request;
use proxima_client::{encode_features, Features, QueryOptions, Row, RowMeta, Value, WriteRequest};
use rand::Rng;

fn generate_random_vector(dim: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..dim).map(|_| rng.random_range(-1.0f32..1.0f32)).collect()
}

fn generate_write_request(rows: usize, dim: usize) -> WriteRequest {
    WriteRequest {
        collection_name: "bench".to_string(),
        meta: RowMeta {
            index_column_names: vec!["embedding".to_string()],
            forward_column_names: vec!["id".to_string(), "text".to_string()],
        },
        rows: (0..rows)
            .map(|i| {
                Row::insert(i as u64)
                    .with_index_value(generate_random_vector(dim))
                    .with_forward_value(Value::Uint64(i as u64))
                    .with_forward_value(format!("document number {}", i))
            })
            .collect(),
        ..Default::default()
    }
}

fn benchmark_encode_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_features");

    for dim in [128, 512, 1024].iter() {
        let vector = Features::from(generate_random_vector(*dim));
        group.bench_with_input(BenchmarkId::new("vector", dim), &vector, |b, features| {
            b.iter(|| {
                let descriptor = features.describe().unwrap();
                black_box(encode_features(descriptor.batch_count, black_box(features)).unwrap());
            });
        });

        let matrix = Features::from(
            (0..64)
                .map(|_| generate_random_vector(*dim))
                .collect::<Vec<_>>(),
        );
        group.bench_with_input(BenchmarkId::new("matrix_64", dim), &matrix, |b, features| {
            b.iter(|| {
                let descriptor = features.describe().unwrap();
                black_box(encode_features(descriptor.batch_count, black_box(features)).unwrap());
            });
        });
    }

    group.finish();
}

fn benchmark_runtime_inference(c: &mut Criterion) {
    let value = Value::from(generate_random_vector(512));

    c.bench_function("infer_from_value_512", |b| {
        b.iter(|| {
            let features = Features::try_from(black_box(&value)).unwrap();
            black_box(features.describe().unwrap());
        });
    });
}

fn benchmark_write_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_assembly");

    for rows in [10, 100, 1000].iter() {
        let request = generate_write_request(*rows, 128);
        group.bench_with_input(BenchmarkId::new("rows", rows), &request, |b, request| {
            b.iter(|| black_box(build_write_request(black_box(request)).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_query_assembly(c: &mut Criterion) {
    let features = Features::from(generate_random_vector(256));
    let options = QueryOptions::builder()
        .topk(100)
        .param("ef_search", 200i32)
        .build()
        .unwrap();

    c.bench_function("query_assembly_256", |b| {
        b.iter(|| {
            black_box(build_query_request("bench", "embedding", black_box(&features), &options).unwrap())
        });
    });
}

criterion_group!(
    benches,
    benchmark_encode_features,
    benchmark_runtime_inference,
    benchmark_write_assembly,
    benchmark_query_assembly
);
criterion_main!(benches);
