use chain_hashmap::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

// splitmix64 stream; distinct outputs for distinct states.
fn ids(seed: u64) -> impl Iterator<Item = u64> {
    let mut state = seed;
    std::iter::repeat_with(move || {
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    })
}

fn node_name(id: u64) -> String {
    format!("node-{id:x}")
}

fn filled(seed: u64, n: usize) -> (ChainedHashMap<String, u64>, Vec<String>) {
    let mut m = ChainedHashMap::new();
    let keys: Vec<_> = ids(seed).take(n).map(node_name).collect();
    for (i, k) in keys.iter().cloned().enumerate() {
        m.insert(k, i as u64).unwrap();
    }
    (m, keys)
}

// Growth from the default capacity is part of the measured work.
fn bench_insert(c: &mut Criterion) {
    let keys: Vec<_> = ids(1).take(10_000).map(node_name).collect();
    let mut group = c.benchmark_group("insert_10k");
    group.bench_function("chained", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut m = ChainedHashMap::new();
                for (i, k) in keys.into_iter().enumerate() {
                    m.insert(k, i as u64).unwrap();
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("hashbrown", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut m = hashbrown::HashMap::with_capacity(64);
                for (i, k) in keys.into_iter().enumerate() {
                    m.insert(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_get_hit(c: &mut Criterion) {
    let (m, keys) = filled(7, 20_000);
    let baseline: hashbrown::HashMap<_, _> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
    let mut group = c.benchmark_group("get_hit");
    group.bench_function("chained", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k).unwrap());
        })
    });
    group.bench_function("hashbrown", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(baseline.get(k).unwrap());
        })
    });
    group.finish();
}

fn bench_get_miss(c: &mut Criterion) {
    let (m, _) = filled(11, 10_000);
    c.bench_function("chained_get_miss", |b| {
        let mut miss = ids(0xdead_beef);
        b.iter(|| {
            // keys from another stream are almost surely absent
            let k = node_name(miss.next().unwrap());
            black_box(m.get(&k).is_err());
        })
    });
}

fn bench_remove_reinsert(c: &mut Criterion) {
    let (mut m, keys) = filled(23, 10_000);
    c.bench_function("chained_remove_reinsert", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            let v = m.remove(k).unwrap();
            m.insert(k.clone(), black_box(v)).unwrap();
        })
    });
}

fn table_bench_criterion() -> Criterion {
    Criterion::default()
        .sample_size(40)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
}

criterion_group! {
    name = benches;
    config = table_bench_criterion();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_remove_reinsert
}
criterion_main!(benches);
