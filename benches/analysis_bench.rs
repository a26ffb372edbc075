use college_insights::analysis::{aggregate_by_region, bin_values, compute_statistics};
use college_insights::models::{Location, NumericField, RawRecord, Record};
use college_insights::validation::DatasetValidator;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::json;
use std::collections::BTreeMap;

const REGIONS: [&str; 5] = ["Northeast", "Southeast", "Midwest", "Southwest", "West"];

fn synthetic_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record {
            name: format!("College {i}"),
            acceptance_rate: (i % 97) as f64,
            tuition: 20_000.0 + (i % 50) as f64 * 1_000.0,
            sat_average: 900.0 + (i % 700) as f64,
            enrollment: 1_000.0 + (i % 40) as f64 * 500.0,
            demographics: BTreeMap::from([
                ("white".to_string(), 50.0),
                ("asian".to_string(), 20.0),
                ("other".to_string(), 30.0),
            ]),
            location: Location {
                state: "CA".to_string(),
                region: REGIONS[i % REGIONS.len()].to_string(),
            },
        })
        .collect()
}

fn synthetic_raw_records(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| {
            RawRecord::new(json!({
                "name": format!("College {}", i % (n / 2 + 1)),
                "acceptance_rate": (i % 120) as f64,
                "tuition": 20_000 + (i % 70) * 1_000,
                "sat_average": 900 + (i % 700),
                "enrollment": 5_000,
                "demographics": {"white": 50.0, "asian": 20.0, "other": 29.0},
                "location": {"state": "CA", "region": REGIONS[i % REGIONS.len()]}
            }))
        })
        .collect()
}

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_validation");
    let validator = DatasetValidator::default();

    for n in [100, 1_000, 10_000] {
        let records = synthetic_raw_records(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| validator.validate(std::hint::black_box(records)));
        });
    }

    group.finish();
}

fn benchmark_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for n in [1_000, 10_000, 100_000] {
        let records = synthetic_records(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| compute_statistics(std::hint::black_box(records), &NumericField::ALL));
        });
    }

    group.finish();
}

fn benchmark_aggregation_and_binning(c: &mut Criterion) {
    let records = synthetic_records(100_000);
    let sat: Vec<f64> = NumericField::SatAverage.values(&records);

    c.bench_function("aggregate_by_region_100k", |b| {
        b.iter(|| aggregate_by_region(std::hint::black_box(&records)))
    });

    c.bench_function("bin_values_100k", |b| {
        b.iter(|| bin_values(std::hint::black_box(&sat), 8))
    });
}

criterion_group!(
    benches,
    benchmark_validation,
    benchmark_statistics,
    benchmark_aggregation_and_binning
);
criterion_main!(benches);
