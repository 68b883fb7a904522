// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions: caller-held placeholder state for one gesture.
//!
//! ## Usage
//!
//! 1) On pointer capture, call [`GridStack::drag_started`](crate::GridStack::drag_started)
//!    to snapshot the item's span into a [`DragSession`].
//! 2) On every pointer move, feed the cumulative pixel delta to
//!    [`GridStack::center_drag_delta`](crate::GridStack::center_drag_delta) (move) or
//!    [`GridStack::edge_drag_delta`](crate::GridStack::edge_drag_delta) (resize) and render
//!    the returned placeholder span.
//! 3) On release, hand the session to
//!    [`GridStack::drag_completed`](crate::GridStack::drag_completed). To cancel, drop it.
//!
//! Placeholder updates never touch committed placements, so an abandoned session
//! leaves the grid exactly as it was.
//!
//! ## Example
//!
//! ```
//! use gridstack::{GridConfig, GridSpan, GridStack, Placement, UniformCells};
//! use kurbo::{Size, Vec2};
//!
//! let mut grid: GridStack<u32> = GridStack::new(GridConfig::default()).unwrap();
//! grid.item_added(1, Placement::Auto).unwrap();
//!
//! let cells = UniformCells(Size::new(100.0, 80.0));
//! let mut session = grid.drag_started(1).unwrap();
//! // Dragged a little over one and a half cells right: snaps to column 2.
//! let placeholder = grid
//!     .center_drag_delta(&mut session, Vec2::new(160.0, 0.0), &cells)
//!     .unwrap();
//! assert_eq!(placeholder, GridSpan::new(2, 0, 2, 2));
//! // Nothing moved yet.
//! assert_eq!(grid.span_of(1), Some(GridSpan::new(0, 0, 2, 2)));
//! ```

use kurbo::{Size, Vec2};

use gridstack_index::GridSpan;

use crate::error::{Axis, SnapError};
use crate::snap::{CellSizes, snap_move, snap_resize};

/// The kind of gesture a session is carrying out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// The item is dragged by its body; only its origin changes.
    Move,
    /// The item's bottom-right handle is dragged; only its spans change.
    Resize,
}

/// Placeholder state for a single drag or resize gesture.
///
/// Created by [`GridStack::drag_started`](crate::GridStack::drag_started) and owned by
/// the caller for the length of the gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession<K> {
    item: K,
    origin: GridSpan,
    placeholder: GridSpan,
    kind: Option<GestureKind>,
}

impl<K: Copy> DragSession<K> {
    pub(crate) fn new(item: K, origin: GridSpan) -> Self {
        Self {
            item,
            origin,
            placeholder: origin,
            kind: None,
        }
    }

    /// The item being dragged.
    pub fn item(&self) -> K {
        self.item
    }

    /// The item's span when the gesture started.
    pub fn origin(&self) -> GridSpan {
        self.origin
    }

    /// Where the item would land if dropped now.
    pub fn placeholder(&self) -> GridSpan {
        self.placeholder
    }

    /// The gesture seen so far, or `None` if no delta has been delivered.
    pub fn kind(&self) -> Option<GestureKind> {
        self.kind
    }

    /// Whether dropping now would change the item's span.
    pub fn is_changed(&self) -> bool {
        self.placeholder != self.origin
    }

    pub(crate) fn update(&mut self, kind: GestureKind, placeholder: GridSpan) {
        self.kind = Some(kind);
        self.placeholder = placeholder;
    }
}

/// Placeholder for `origin` dragged by its body `delta` pixels from the start point.
///
/// Spans are kept. Columns may move within `column_count`; rows may move up to
/// `row_span` rows past the last existing row, which then materialize on drop.
pub fn moved_placeholder(
    origin: GridSpan,
    delta: Vec2,
    column_count: u32,
    row_count: u32,
    cells: &impl CellSizes,
) -> Result<GridSpan, SnapError> {
    let column = snap_move(
        origin.column(),
        origin.column_span(),
        column_count,
        delta.x,
        Axis::Column,
        |i| cells.column_width(i),
    )?;
    let row = snap_move(
        origin.row(),
        origin.row_span(),
        row_count.saturating_add(origin.row_span()),
        delta.y,
        Axis::Row,
        |i| cells.row_height(i),
    )?;
    Ok(origin.with_column(column).with_row(row))
}

/// Placeholder for `origin` resized by dragging its bottom-right handle `delta` pixels.
///
/// `item_size` is the item's rendered size when the gesture started. The origin is
/// kept; spans are limited to the existing columns and rows.
pub fn resized_placeholder(
    origin: GridSpan,
    item_size: Size,
    delta: Vec2,
    column_count: u32,
    row_count: u32,
    cells: &impl CellSizes,
) -> Result<GridSpan, SnapError> {
    let column_span = snap_resize(
        item_size.width,
        origin.column(),
        column_count,
        delta.x,
        Axis::Column,
        |i| cells.column_width(i),
    )?;
    let row_span = snap_resize(
        item_size.height,
        origin.row(),
        row_count,
        delta.y,
        Axis::Row,
        |i| cells.row_height(i),
    )?;
    Ok(origin.with_spans(column_span, row_span))
}
