// benches/validate_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rphonevalidator::PhoneValidator;

use phonenumber::{self as rlp, country::Id};

// (calling code, national number, region for rust-phonenumber)
type TestEntity = (&'static str, &'static str, Id);

/// A mix of countries, number kinds and input shapes, so the result does not
/// depend on a single lucky pattern.
fn setup_validation_data() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        // Iranian mobile without trunk prefix
        ("98", "9115291407", IR),
        // Iranian mobile with trunk prefix
        ("98", "09115291407", IR),
        // US number, shared calling code
        ("1", "2025550123", US),
        // Canadian number, shared calling code
        ("1", "4165550123", CA),
        // UK mobile
        ("44", "7911123456", GB),
        // German mobile
        ("49", "15123456789", DE),
        // Russian number with trunk prefix
        ("7", "89123456789", RU),
        // Argentine mobile
        ("54", "1123456789", AR),
        // Too short for any Iranian format, exercises the negative path
        ("98", "12345", IR),
    ]
}

fn validation_benchmark(c: &mut Criterion) {
    let numbers = setup_validation_data();
    let validator = PhoneValidator::embedded().unwrap();

    let mut group = c.benchmark_group("Validation Comparison");

    group.bench_function("rphonevalidator: validate()", |b| {
        b.iter(|| {
            for (code, phone, _) in &numbers {
                let _ = validator.validate(black_box(*code), black_box(*phone));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse() + is_valid()", |b| {
        b.iter(|| {
            for (_, phone, region_id) in &numbers {
                if let Ok(number) = rlp::parse(black_box(Some(*region_id)), black_box(phone)) {
                    let _ = rlp::is_valid(&number);
                }
            }
        })
    });

    group.finish();
}

fn load_benchmark(c: &mut Criterion) {
    c.bench_function("rphonevalidator: embedded()", |b| {
        b.iter(|| PhoneValidator::embedded().unwrap())
    });
}

criterion_group!(benches, validation_benchmark, load_benchmark);
criterion_main!(benches);
