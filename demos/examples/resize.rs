// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resizing by the bottom-right handle.
//!
//! Uses per-track sizes, as a host would measure them, grows a tile over its
//! neighbour, and shows a cancelled gesture leaving the grid untouched.
//!
//! Run:
//! - `cargo run -p gridstack_demos --example resize`

use gridstack::{GridConfig, GridError, GridSpan, GridStack, Placement, SnapError, TrackSizes};
use kurbo::{Size, Vec2};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let config = GridConfig::default().with_column_count(4).with_min_row_count(3);
    let mut grid: GridStack<u32> = GridStack::new(config).unwrap();
    grid.item_added(1, Placement::Preferred(GridSpan::new(0, 0, 1, 1))).unwrap();
    grid.item_added(2, Placement::Preferred(GridSpan::new(1, 0, 2, 2))).unwrap();

    // The host has only measured the first two rows.
    let cells = TrackSizes {
        columns: vec![100.0; 4],
        rows: vec![60.0; 2],
    };

    // Grow item 1 to three columns and two rows.
    let mut session = grid.drag_started(1).unwrap();
    let item_size = Size::new(100.0, 60.0);
    let placeholder = grid
        .edge_drag_delta(&mut session, item_size, Vec2::new(210.0, 45.0), &cells)
        .unwrap();
    println!("placeholder: {placeholder:?}");
    let outcome = grid.drag_completed(session).unwrap();
    println!("resized 1 to {:?}", outcome.to);
    for m in &outcome.relocated {
        println!("  pushed {} to {:?}", m.item, m.to);
    }
    println!("rows: {}", grid.row_count());

    // A gesture is cancelled by dropping the session.
    let mut session = grid.drag_started(1).unwrap();
    let shrink = Vec2::new(-500.0, 0.0);
    let placeholder = grid
        .edge_drag_delta(&mut session, Size::new(300.0, 120.0), shrink, &cells)
        .unwrap();
    println!("placeholder {placeholder:?} discarded");
    println!("1 still at {:?}", grid.span_of(1));

    // Item 2 now starts in row 2, which has no measured height.
    let mut session = grid.drag_started(2).unwrap();
    match grid.center_drag_delta(&mut session, Vec2::new(0.0, 10.0), &cells) {
        Err(GridError::Snap(SnapError::MissingCellSize { axis, index })) => {
            println!("no {axis} size for cell {index}; the host must measure it first");
        }
        other => println!("unexpected: {other:?}"),
    }
    assert!(grid.is_consistent());
}
