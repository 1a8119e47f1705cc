use budgety::ledger::{EntryKind, Ledger};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn build_sample_ledger(entry_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for idx in 0..entry_count {
        let kind = if idx % 4 == 0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        };
        ledger.add_entry(kind, format!("entry {idx}"), 10.0 + (idx % 100) as f64);
    }
    ledger
}

fn bench_recompute(c: &mut Criterion) {
    let ledger = build_sample_ledger(10_000);
    c.bench_function("recompute_aggregates_10k", |b| {
        b.iter(|| black_box(ledger.recompute_aggregates()))
    });

    c.bench_function("recompute_expense_percentages_10k", |b| {
        b.iter_batched(
            || ledger.clone(),
            |mut ledger| {
                ledger.recompute_expense_percentages();
                black_box(ledger.read_expense_percentages())
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_add_delete(c: &mut Criterion) {
    c.bench_function("add_then_delete_first_1k", |b| {
        b.iter_batched(
            || build_sample_ledger(1_000),
            |mut ledger| {
                let first = ledger.entries(EntryKind::Expense)[0].id();
                ledger.delete_entry(EntryKind::Expense, first);
                black_box(ledger.add_entry(EntryKind::Expense, "bench", 1.0).id())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_recompute, bench_add_delete);
criterion_main!(benches);
