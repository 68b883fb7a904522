// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gridstack_index::{Backend, GridSpan, PlacementIndex, PlacementIndexGeneric};

const COLUMNS: u32 = 12;

/// Rows of 2×2 tiles filling a `COLUMNS`-wide grid.
fn gen_tiles(rows: u32) -> Vec<GridSpan> {
    let mut out = Vec::new();
    for row in (0..rows).step_by(2) {
        for column in (0..COLUMNS).step_by(2) {
            out.push(GridSpan::new(column, row, 2, 2));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, bound: u32) -> u32 {
        (self.next_u64() % u64::from(bound)) as u32
    }
}

/// Mixed spans scattered over `rows` rows; overlaps are allowed, the index does not care.
fn gen_scattered(count: usize, rows: u32) -> Vec<GridSpan> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let column_span = 1 + rng.below(4);
            let row_span = 1 + rng.below(3);
            let column = rng.below(COLUMNS - column_span + 1);
            GridSpan::new(column, rng.below(rows), column_span, row_span)
        })
        .collect()
}

fn fill<B: Backend>(idx: &mut PlacementIndexGeneric<u32, B>, spans: &[GridSpan]) {
    for (i, span) in (0_u32..).zip(spans) {
        idx.set(i, *span);
    }
    let _ = idx.commit();
}

/// Query one full-width row at a time, top to bottom.
fn sweep_rows<B: Backend>(idx: &PlacementIndexGeneric<u32, B>, rows: u32) -> usize {
    (0..rows)
        .map(|row| idx.query(GridSpan::new(0, row, COLUMNS, 1), &[]).count())
        .sum()
}

fn bench_set_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_commit");
    for &rows in &[16_u32, 64, 256] {
        let tiles = gen_tiles(rows);
        group.throughput(Throughput::Elements(tiles.len() as u64));
        group.bench_function(format!("flatvec_rows{rows}"), |b| {
            b.iter_batched(
                PlacementIndex::<u32>::new,
                |mut idx| {
                    fill(&mut idx, &tiles);
                    black_box(idx.max_bottom_row());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("row_bands_rows{rows}"), |b| {
            b.iter_batched(
                || PlacementIndex::<u32>::with_row_bands(4),
                |mut idx| {
                    fill(&mut idx, &tiles);
                    black_box(idx.max_bottom_row());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_row_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_sweep");
    for &rows in &[16_u32, 64, 256] {
        let spans = gen_scattered((rows * 3) as usize, rows);
        group.throughput(Throughput::Elements(u64::from(rows)));

        let mut flat = PlacementIndex::<u32>::new();
        fill(&mut flat, &spans);
        group.bench_function(format!("flatvec_rows{rows}"), |b| {
            b.iter(|| black_box(sweep_rows(&flat, rows)));
        });

        for band_height in [2_u32, 4, 8] {
            let mut banded = PlacementIndex::<u32>::with_row_bands(band_height);
            fill(&mut banded, &spans);
            group.bench_function(format!("row_bands{band_height}_rows{rows}"), |b| {
                b.iter(|| black_box(sweep_rows(&banded, rows)));
            });
        }
    }
    group.finish();
}

fn bench_update_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_heavy");
    let tiles = gen_tiles(128);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let moves: Vec<(u32, GridSpan)> = (0..tiles.len())
        .map(|_| {
            let item = rng.below(tiles.len() as u32);
            let span = tiles[item as usize];
            (item, span.with_row(span.row() + 1 + rng.below(8)))
        })
        .collect();

    group.bench_function("flatvec_move_then_commit", |b| {
        b.iter_batched(
            || {
                let mut idx = PlacementIndex::<u32>::new();
                fill(&mut idx, &tiles);
                idx
            },
            |mut idx| {
                for &(item, span) in &moves {
                    idx.set(item, span);
                }
                black_box(idx.commit().moved.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("row_bands_move_then_commit", |b| {
        b.iter_batched(
            || {
                let mut idx = PlacementIndex::<u32>::with_row_bands(4);
                fill(&mut idx, &tiles);
                idx
            },
            |mut idx| {
                for &(item, span) in &moves {
                    idx.set(item, span);
                }
                black_box(idx.commit().moved.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_set_commit,
    bench_row_sweep,
    bench_update_heavy
);
criterion_main!(benches);
