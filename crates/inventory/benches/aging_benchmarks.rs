use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gildedrose_inventory::{AgingEngine, Item};

/// Mixed-category inventory of `size` items.
fn inventory(size: usize) -> Vec<Item> {
    let names = [
        "+5 Dexterity Vest",
        "Aged Brie",
        "Elixir of the Mongoose",
        "Sulfuras, Hand of Ragnaros",
        "Backstage passes to a TAFKAL80ETC concert",
        "Conjured Mana Cake",
    ];
    (0..size)
        .map(|i| {
            let name = names[i % names.len()];
            Item::new(name, (i % 30) as i32 - 5, (i % 51) as i32)
        })
        .collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let engine = AgingEngine::new();
    let mut group = c.benchmark_group("advance_day");

    for size in [10usize, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("items", size), &size, |b, &size| {
            let items = inventory(size);
            b.iter_batched(
                || items.clone(),
                |mut items| engine.advance_day(black_box(&mut items)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_simulated_year(c: &mut Criterion) {
    let engine = AgingEngine::new();

    c.bench_function("advance_day/year_100_items", |b| {
        let items = inventory(100);
        b.iter_batched(
            || items.clone(),
            |mut items| {
                for _ in 0..365 {
                    engine.advance_day(black_box(&mut items));
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_advance_day, bench_simulated_year);
criterion_main!(benches);
