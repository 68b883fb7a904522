// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Gridstack Index: set, move, commit damage, and query.

use gridstack_index::{GridSpan, PlacementIndex};

fn main() {
    let mut idx: PlacementIndex<&str> = PlacementIndex::new();
    idx.set("clock", GridSpan::new(0, 0, 2, 2));
    idx.set("weather", GridSpan::new(2, 0, 3, 1));
    let _ = idx.commit();

    // Push the clock down one row.
    idx.set("clock", GridSpan::new(0, 1, 2, 2));
    let dmg = idx.commit();
    for m in &dmg.moved {
        println!("moved {:?}: {:?} -> {:?} ({:?})", m.item, m.from, m.to, m.changes());
    }

    // Query a region
    let hits: Vec<_> = idx.query(GridSpan::new(1, 0, 2, 2), &[]).collect();
    println!("hits in columns 1..=2, rows 0..=1: {:?}", hits);
    println!("max bottom row: {:?}", idx.max_bottom_row());
}
