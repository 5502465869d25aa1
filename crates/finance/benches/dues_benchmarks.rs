use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tradebook_finance::{DueIndex, customer_dues};
use tradebook_records::{Invoice, PartyRef};

fn invoices(customers: usize, per_customer: usize) -> (Vec<String>, Vec<Invoice>) {
    let names: Vec<String> = (0..customers).map(|i| format!("customer-{i}")).collect();
    let mut out = Vec::with_capacity(customers * per_customer);
    for round in 0..per_customer {
        for name in &names {
            let total = 100.0 + round as f64;
            out.push(Invoice::new(total, total / 2.0).with_customer(PartyRef::named(name.clone())));
        }
    }
    (names, out)
}

/// Dues for every customer row: rescanning per row vs grouping once.
fn bench_customer_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("customer_table_dues");

    for customers in [10usize, 100, 1_000] {
        let (names, invoices) = invoices(customers, 5);
        group.throughput(Throughput::Elements(names.len() as u64));

        group.bench_with_input(BenchmarkId::new("per_row_scan", customers), &customers, |b, _| {
            b.iter(|| {
                let total: f64 = names.iter().map(|n| customer_dues(&invoices, n)).sum();
                black_box(total)
            })
        });

        group.bench_with_input(BenchmarkId::new("due_index", customers), &customers, |b, _| {
            b.iter(|| {
                let index = DueIndex::customers(&invoices);
                let total: f64 = names.iter().map(|n| index.get(n)).sum();
                black_box(total)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_customer_table);
criterion_main!(benches);
