// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridstack --heading-base-level=0

//! Gridstack: an interactive fixed-column grid layout engine.
//!
//! Gridstack arranges rectangular items on a grid with a fixed number of columns and
//! as many rows as needed. It is the engine behind a dashboard-style layout where
//! users drag tiles around and resize them by a corner handle.
//!
//! - New items are auto-placed in the first free region, scanning row by row.
//! - Drag and resize gestures snap pixel deltas to cells at cell midpoints and report
//!   a placeholder span without touching committed placements.
//! - Dropping an item onto others pushes them down, and whatever they land on is
//!   pushed down in turn, until nothing overlaps.
//! - Rows grow to fit the lowest item and trailing empty rows shrink back to a
//!   configured minimum.
//!
//! ## Not a renderer
//!
//! This crate does no drawing, hit testing, or pointer capture. The host supplies
//! pixel deltas and cell sizes (through [`CellSizes`]) and renders the spans it gets
//! back. Placement changes can be pulled in batches with [`GridStack::commit`], which
//! yields a [`Damage`] set of added, removed and moved items.
//!
//! ## API overview
//!
//! - [`GridStack`]: the grid. Lifecycle calls ([`item_added`](GridStack::item_added),
//!   [`item_removed`](GridStack::item_removed),
//!   [`all_items_cleared`](GridStack::all_items_cleared)) and gesture calls
//!   ([`drag_started`](GridStack::drag_started),
//!   [`center_drag_delta`](GridStack::center_drag_delta),
//!   [`edge_drag_delta`](GridStack::edge_drag_delta),
//!   [`drag_completed`](GridStack::drag_completed)).
//! - [`GridConfig`]: column count, minimum rows, and default spans.
//! - [`DragSession`]: caller-held placeholder state for one gesture.
//! - [`GridSpan`]: the cells an item occupies.
//! - The building blocks are public too: [`place::place_auto`], [`snap::snap_move`],
//!   [`snap::snap_resize`], [`cascade::resolve_drop`], and [`rows::RowSet`].
//!
//! ## Logging
//!
//! Committing calls emit [`tracing`] events at `debug` level and cascade relocations
//! and placeholder updates at `trace` level. No subscriber is installed.
//!
//! ## Minimal usage
//!
//! ```
//! use gridstack::{GridConfig, GridSpan, GridStack, Placement, UniformCells};
//! use kurbo::{Size, Vec2};
//!
//! let mut grid: GridStack<&str> = GridStack::new(GridConfig::default()).unwrap();
//! grid.item_added("clock", Placement::Auto).unwrap();
//! grid.item_added("weather", Placement::Auto).unwrap();
//! assert_eq!(grid.span_of("weather"), Some(GridSpan::new(2, 0, 2, 2)));
//!
//! // Drag "weather" two cells left, on top of "clock".
//! let cells = UniformCells(Size::new(120.0, 90.0));
//! let mut session = grid.drag_started("weather").unwrap();
//! grid.center_drag_delta(&mut session, Vec2::new(-240.0, 0.0), &cells).unwrap();
//! let outcome = grid.drag_completed(session).unwrap();
//!
//! // "clock" was pushed below the dropped item.
//! assert_eq!(outcome.relocated.len(), 1);
//! assert_eq!(grid.span_of("clock"), Some(GridSpan::new(0, 2, 2, 2)));
//! assert!(grid.is_consistent());
//! ```

#![no_std]

extern crate alloc;

pub mod cascade;
pub mod config;
pub mod error;
pub mod gesture;
pub mod grid;
pub mod place;
pub mod rows;
pub mod snap;

pub use config::GridConfig;
pub use error::{Axis, ConfigError, GridError, SnapError};
pub use gesture::{DragSession, GestureKind};
pub use grid::{DropOutcome, GridStack, Placement};
pub use snap::{CellSizes, TrackSizes, UniformCells};

pub use gridstack_index::{Backend, Damage, FlatVec, GridSpan, Move, RowBands, SpanChanges};
