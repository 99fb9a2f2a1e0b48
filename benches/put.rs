mod common;

use crate::common::*;
use chained_table::{HashTable, TableConfig};
use criterion::*;
use permutation_iterator::Permutor;
use rand::{thread_rng, RngCore};
use std::hash::RandomState;

fn bench_put(c: &mut Criterion) {
    let mut rng = thread_rng();

    let mut group = c.benchmark_group("put");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for load_factor in LOAD_FACTORS {
        for length in SIZES {
            let keys: Vec<u64> = Permutor::new_with_u64_key(u64::MAX, rng.next_u64())
                .into_iter()
                .take(length)
                .collect();

            // starts small, so the measurement includes every resize on the way up
            group.bench_with_input(
                BenchmarkId::new(format!("put_growing_{}", load_factor), length),
                &keys,
                |b, keys| {
                    b.iter_batched(
                        || {
                            let config = TableConfig::default().with_max_load_factor(load_factor);
                            HashTable::<u64, u64>::with_config(config, RandomState::new()).unwrap()
                        },
                        |mut table| {
                            for &key in keys {
                                table.put(key, key);
                            }
                            table
                        },
                        BatchSize::LargeInput,
                    );
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("put_reserved_{}", load_factor), length),
                &keys,
                |b, keys| {
                    b.iter_batched(
                        || {
                            let config = TableConfig::default().with_max_load_factor(load_factor);
                            let mut table =
                                HashTable::<u64, u64>::with_config(config, RandomState::new())
                                    .unwrap();
                            table.reserve(keys.len());
                            table
                        },
                        |mut table| {
                            for &key in keys {
                                table.put(key, key);
                            }
                            table
                        },
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_put);
criterion_main!(benches);
