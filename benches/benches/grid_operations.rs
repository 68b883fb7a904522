// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gridstack::{Backend, GridConfig, GridSpan, GridStack, Placement, UniformCells};
use kurbo::{Size, Vec2};

const CELL: f64 = 50.0;

fn config() -> GridConfig {
    GridConfig::default()
        .with_column_count(12)
        .with_default_spans(3, 2)
}

/// Auto-place `count` items of mixed spans.
fn populate<B: Backend>(grid: &mut GridStack<u32, B>, count: u32) {
    for id in 0..count {
        let placement = match id % 3 {
            0 => Placement::Auto,
            1 => Placement::Preferred(GridSpan::new(0, 0, 2, 1)),
            _ => Placement::Preferred(GridSpan::new(0, 0, 4, 3)),
        };
        let _ = grid.item_added(id, placement);
    }
}

fn flat_grid(count: u32) -> GridStack<u32> {
    let mut grid = GridStack::new(config()).expect("valid config");
    populate(&mut grid, count);
    let _ = grid.commit();
    grid
}

fn bench_auto_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_place");
    for &count in &[32_u32, 128, 512] {
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_function(format!("flatvec_n{count}"), |b| {
            b.iter_batched(
                || GridStack::<u32>::new(config()).expect("valid config"),
                |mut grid| {
                    populate(&mut grid, count);
                    black_box(grid.row_count());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("row_bands_n{count}"), |b| {
            b.iter_batched(
                || GridStack::<u32>::with_row_bands(config(), 4).expect("valid config"),
                |mut grid| {
                    populate(&mut grid, count);
                    black_box(grid.row_count());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Drag the lowest item to the top-left corner, pushing every column it covers down.
fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    let cells = UniformCells(Size::new(CELL, CELL));
    for &count in &[32_u32, 128, 512] {
        let grid = flat_grid(count);
        let Some((last, span)) = grid.items().max_by_key(|(_, s)| (s.row(), s.column())) else {
            continue;
        };
        let delta = Vec2::new(
            -f64::from(span.column()) * CELL,
            -f64::from(span.row()) * CELL,
        );
        group.bench_function(format!("drop_to_top_n{count}"), |b| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| {
                    let mut session = grid.drag_started(last).expect("item is placed");
                    let _ = grid.center_drag_delta(&mut session, delta, &cells);
                    let outcome = grid.drag_completed(session).expect("item is placed");
                    black_box(outcome.relocated.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_placeholder_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("placeholder");
    let grid = flat_grid(128);
    let cells = UniformCells(Size::new(CELL, CELL));
    let deltas: Vec<Vec2> = (0..256)
        .map(|i| Vec2::new(f64::from(i) * 3.0, f64::from(i) * 7.0))
        .collect();
    group.throughput(Throughput::Elements(deltas.len() as u64));
    group.bench_function("center_drag_deltas", |b| {
        b.iter(|| {
            let mut session = grid.drag_started(0).expect("item is placed");
            for &delta in &deltas {
                let _ = black_box(grid.center_drag_delta(&mut session, delta, &cells));
            }
        });
    });
    group.bench_function("edge_drag_deltas", |b| {
        let size = Size::new(3.0 * CELL, 2.0 * CELL);
        b.iter(|| {
            let mut session = grid.drag_started(0).expect("item is placed");
            for &delta in &deltas {
                let _ = black_box(grid.edge_drag_delta(&mut session, size, delta, &cells));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_auto_place,
    bench_cascade,
    bench_placeholder_updates
);
criterion_main!(benches);
