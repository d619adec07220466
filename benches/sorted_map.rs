use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use sortedmap::{SortedByValue, SortedMap};
use std::collections::HashMap;

const NUM_OF_ENTRIES: usize = 1000;

fn get_random_map() -> HashMap<u32, u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = HashMap::new();
    for _ in 0..NUM_OF_ENTRIES {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
    }
    map
}

fn bench_from_map(c: &mut Criterion) {
    let map = get_random_map();
    c.bench_function("bench sorted map from map", move |b| {
        b.iter(|| black_box(SortedMap::from_map(map.clone())))
    });
}

fn bench_add_then_sort(c: &mut Criterion) {
    c.bench_function("bench sorted map add then sort", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = SortedMap::new();
            for _ in 0..NUM_OF_ENTRIES {
                map = map.add(rng.next_u32(), rng.next_u32());
            }
            map.sort();
            black_box(map)
        })
    });
}

fn bench_sort_by_value(c: &mut Criterion) {
    let map = get_random_map();
    c.bench_function("bench sorted by value descending", move |b| {
        b.iter(|| black_box(SortedByValue::from_map(map.clone(), false)))
    });
}

fn bench_to_json(c: &mut Criterion) {
    let map = SortedMap::from_map(get_random_map());
    c.bench_function("bench sorted map to json", move |b| {
        b.iter(|| black_box(map.to_json()))
    });
}

criterion_group!(
    benches,
    bench_from_map,
    bench_add_then_sort,
    bench_sort_by_value,
    bench_to_json,
);
criterion_main!(benches);
