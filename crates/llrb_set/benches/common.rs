use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_medium_runtime_config, apply_small_runtime_config, default_rng};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use llrb_set::{LlrbSet, OrderedSet, StdBTreeSet};

const SIZES: [usize; 4] = [1_000, 4_000, 16_000, 64_000];

#[derive(Clone, Copy)]
enum Workload {
    Random,
    Ascending,
    Duplicate,
}

impl Workload {
    fn id(self) -> u64 {
        match self {
            Workload::Random => 1,
            Workload::Ascending => 2,
            Workload::Duplicate => 3,
        }
    }
}

fn bench_insert<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, workload: Workload)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Key = u64>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let base_seed = seed_base(workload.id(), size as u64);
        let keys = generate_keys(size, base_seed, workload);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut set = S::new();
                    if let Workload::Duplicate = workload {
                        for &k in &keys {
                            set.insert(k);
                        }
                    }
                    let start = Instant::now();
                    for &k in &keys {
                        black_box(set.insert(k));
                    }
                    black_box(set.len());
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

fn generate_keys(size: usize, base_seed: u64, workload: Workload) -> Vec<u64> {
    match workload {
        Workload::Ascending => (0..size as u64).collect(),
        Workload::Random | Workload::Duplicate => {
            let mut rng = StdRng::seed_from_u64(base_seed);
            (0..size).map(|_| rng.random()).collect()
        }
    }
}

fn seed_base(workload_id: u64, size: u64) -> u64 {
    mix_seed(0x0DDB_A11A_2026_0000_u64 ^ (workload_id << 48) ^ size)
}

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn bench_all_insert<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    for (name, workload) in [
        ("random", Workload::Random),
        ("ascending", Workload::Ascending),
        ("duplicate", Workload::Duplicate),
    ] {
        bench_insert::<StdBTreeSet<u64>, _>(group, &format!("std_btree/{name}"), workload);
        bench_insert::<LlrbSet<u64>, _>(group, &format!("llrb/{name}"), workload);
    }
}

pub fn bench_heights<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    let mut rng = default_rng();
    for &size in &SIZES {
        apply_medium_runtime_config(group);
        let set: LlrbSet<u64> = (0..size).map(|_| rng.random()).collect();

        group.bench_function(BenchmarkId::new("black_height", size), |bencher| {
            bencher.iter(|| black_box(set.black_height()))
        });
        group.bench_function(BenchmarkId::new("total_height", size), |bencher| {
            bencher.iter(|| black_box(set.total_height()))
        });
    }
}
