use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use data_object_core::{AsJson, DataObject, MissingArguments, Value, attributes, data_object};

data_object! {
    struct Customer {
        name: String,
        email: String,
        tier: i64 = 1,
        tags: Vec<String>,
        notes: Option<String>,
    }
}

fn sample() -> Customer {
    Customer::new(
        "Ada",
        "ada@example.com",
        3,
        vec!["vip".to_string(), "beta".to_string()],
        None::<String>,
    )
}

fn bench_from_dict(c: &mut Criterion) {
    let full = sample().as_json();
    let sparse = attributes! { "name" => "Ada", "email" => "ada@example.com", "tags" => Vec::<String>::new() };

    let mut group = c.benchmark_group("from_dict");
    group.bench_function(BenchmarkId::new("all_supplied", 5), |b| {
        b.iter(|| Customer::from_dict(black_box(&full), MissingArguments::Reject))
    });
    group.bench_function(BenchmarkId::new("defaults_and_nulls", 5), |b| {
        b.iter(|| Customer::from_dict(black_box(&sparse), MissingArguments::BindNull))
    });
    group.finish();
}

fn bench_identity(c: &mut Criterion) {
    let customer = sample();
    let other = customer.copy(attributes! { "tier" => Value::Int(4) }).ok();

    c.bench_function("hash_code", |b| b.iter(|| black_box(&customer).hash_code()));
    c.bench_function("to_display_string", |b| {
        b.iter(|| black_box(&customer).to_display_string())
    });
    c.bench_function("equals", |b| {
        b.iter(|| other.as_ref().map(|o| black_box(&customer).equals(o)))
    });
}

criterion_group!(benches, bench_from_dict, bench_identity);
criterion_main!(benches);
