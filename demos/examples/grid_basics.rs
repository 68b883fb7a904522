// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid basics.
//!
//! Auto-place a handful of tiles, remove one, clear the grid, and watch the row
//! count follow along. Debug-level engine events are printed to stderr.
//!
//! Run:
//! - `cargo run -p gridstack_demos --example grid_basics`

use gridstack::{GridConfig, GridSpan, GridStack, Placement};
use tracing_subscriber::filter::LevelFilter;

fn render(grid: &GridStack<char>) {
    for row in 0..grid.row_count() {
        let line: String = (0..grid.column_count())
            .map(|column| {
                grid.items()
                    .find(|(_, span)| span.contains_cell(column, row))
                    .map_or('.', |(id, _)| id)
            })
            .collect();
        println!("  {line}");
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut grid: GridStack<char> = GridStack::new(GridConfig::default()).unwrap();

    for id in ['a', 'b', 'c'] {
        let span = grid.item_added(id, Placement::Auto).unwrap();
        println!("{id} -> {span:?}");
    }
    // A narrow tile fills the gap at the right edge.
    grid.item_added('d', Placement::Preferred(GridSpan::new(0, 0, 1, 3))).unwrap();
    // A wide tile is clamped to the grid width.
    grid.item_added('e', Placement::Preferred(GridSpan::new(0, 0, 9, 1))).unwrap();
    println!("rows: {}", grid.row_count());
    render(&grid);

    let damage = grid.commit();
    println!("added: {}", damage.added.len());

    grid.item_removed('e').unwrap();
    println!("rows after removing e: {}", grid.row_count());
    render(&grid);

    let removed = grid.all_items_cleared();
    println!("cleared {removed} items, rows: {}", grid.row_count());
    assert!(grid.is_consistent());
}
