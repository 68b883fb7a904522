// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag and drop with cascading.
//!
//! Simulates a pointer drag over a few frames, printing the placeholder after each
//! delta, then drops the tile on top of two others and prints the cascade.
//! Trace-level engine events are printed to stderr.
//!
//! Run:
//! - `cargo run -p gridstack_demos --example drag_and_drop`

use gridstack::{GridConfig, GridSpan, GridStack, Placement, UniformCells};
use kurbo::{Size, Vec2};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_writer(std::io::stderr)
        .init();

    let mut grid: GridStack<&str> = GridStack::new(GridConfig::default()).unwrap();
    grid.item_added("A", Placement::Preferred(GridSpan::new(0, 0, 2, 1))).unwrap();
    grid.item_added("B", Placement::Preferred(GridSpan::new(0, 1, 2, 1))).unwrap();
    grid.item_added("C", Placement::Preferred(GridSpan::new(2, 0, 2, 2))).unwrap();
    let _ = grid.commit();

    // Cells as laid out by the host: 120 × 80 pixels.
    let cells = UniformCells(Size::new(120.0, 80.0));
    let mut session = grid.drag_started("C").unwrap();

    // Cumulative deltas from the pointer-down position.
    for dx in [-30.0, -90.0, -170.0, -250.0] {
        let placeholder = grid
            .center_drag_delta(&mut session, Vec2::new(dx, 4.0), &cells)
            .unwrap();
        println!("dx {dx:>6}: placeholder {placeholder:?}");
    }

    let outcome = grid.drag_completed(session).unwrap();
    println!("dropped {} at {:?}", outcome.item, outcome.to);
    for m in &outcome.relocated {
        println!("  pushed {} from row {} to row {}", m.item, m.from.row(), m.to.row());
    }
    println!("rows: {} (+{})", grid.row_count(), outcome.rows_added);

    // The host repaints only what changed.
    let damage = grid.commit();
    for m in &damage.moved {
        println!("repaint {}: {:?} -> {:?} ({:?})", m.item, m.from, m.to, m.changes());
    }
    assert!(grid.is_consistent());
}
