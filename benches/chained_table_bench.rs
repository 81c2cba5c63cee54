use chained_hashtable::ChainedTable;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::ops::ControlFlow;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize) -> (ChainedTable<u64>, Vec<String>) {
    let mut t = ChainedTable::new(3).unwrap();
    let keys: Vec<_> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k, i as u64).unwrap();
    }
    (t, keys)
}

fn bench_insert(c: &mut Criterion) {
    let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
    c.bench_function("chained_table_insert_10k_from_min_capacity", |b| {
        b.iter_batched(
            || ChainedTable::<u64>::new(3).unwrap(),
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chained_table_get_hit", |b| {
        let (t, keys) = filled(7, 20_000);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chained_table_get_miss", |b| {
        let (t, _) = filled(11, 10_000);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = key(miss.next().unwrap());
            black_box(t.get(&k));
        })
    });
}

fn bench_traversal(c: &mut Criterion) {
    let (t, _) = filled(13, 10_000);
    c.bench_function("chained_table_for_each_key_10k", |b| {
        b.iter(|| black_box(t.for_each_key(|_, k| {
            black_box(k);
            ControlFlow::Continue(())
        })))
    });
    c.bench_function("chained_table_cursor_10k", |b| {
        b.iter(|| black_box(t.keys().count()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_traversal
}
criterion_main!(benches);
