// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag/resize snapping math.
//!
//! ## Overview
//!
//! Converts a continuous pixel offset into a discrete cell index (move) or span
//! (resize). Both functions snap at cell midpoints: the result is whichever cell
//! boundary the dragged edge is closer to. They are pure and never touch the
//! placement index; callers run them on every drag delta to update a placeholder.
//!
//! ## Cell size lookups
//!
//! Cell sizes are a layout-time concern of the rendering collaborator and are
//! supplied through [`CellSizes`]. Every lookup made while snapping uses the size of
//! the cell the item started in (the pre-drag index for a move, the origin for a
//! resize), not the size of each cell walked over. On uniform tracks this is exact;
//! on non-uniform tracks the snap follows the starting cell's size.

use alloc::vec::Vec;

use kurbo::Size;

use crate::error::{Axis, SnapError};

/// Pixel sizes of grid cells, supplied by the rendering collaborator.
///
/// Lookups only need to succeed while a gesture is active. Returning `None` fails
/// the gesture call with [`SnapError::MissingCellSize`].
pub trait CellSizes {
    /// Width of `column` in pixels.
    fn column_width(&self, column: usize) -> Option<f64>;
    /// Height of `row` in pixels.
    fn row_height(&self, row: usize) -> Option<f64>;

    /// Size of cell `index` along `axis`.
    fn size_along(&self, axis: Axis, index: usize) -> Option<f64> {
        match axis {
            Axis::Column => self.column_width(index),
            Axis::Row => self.row_height(index),
        }
    }
}

impl<T: CellSizes + ?Sized> CellSizes for &T {
    fn column_width(&self, column: usize) -> Option<f64> {
        (**self).column_width(column)
    }
    fn row_height(&self, row: usize) -> Option<f64> {
        (**self).row_height(row)
    }
}

/// Every cell has the same size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UniformCells(pub Size);

impl CellSizes for UniformCells {
    fn column_width(&self, _column: usize) -> Option<f64> {
        Some(self.0.width)
    }
    fn row_height(&self, _row: usize) -> Option<f64> {
        Some(self.0.height)
    }
}

/// Explicit per-column widths and per-row heights, as measured by the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackSizes {
    /// Width of each column.
    pub columns: Vec<f64>,
    /// Height of each row.
    pub rows: Vec<f64>,
}

impl CellSizes for TrackSizes {
    fn column_width(&self, column: usize) -> Option<f64> {
        self.columns.get(column).copied()
    }
    fn row_height(&self, row: usize) -> Option<f64> {
        self.rows.get(row).copied()
    }
}

fn cell_size(
    axis: Axis,
    index: u32,
    size_of: impl Fn(usize) -> Option<f64>,
) -> Result<f64, SnapError> {
    let index = index as usize;
    match size_of(index) {
        Some(size) if size.is_finite() && size > 0.0 => Ok(size),
        Some(size) => Err(SnapError::DegenerateCellSize { axis, index, size }),
        None => Err(SnapError::MissingCellSize { axis, index }),
    }
}

/// New origin index for an item dragged `drag_distance` pixels along `axis`.
///
/// `value_before_drag` is the item's column (or row) when the drag started, `span`
/// its extent on this axis, and `definition_count` the number of cells the item may
/// occupy on this axis. The result never lets the far edge pass `definition_count`.
pub fn snap_move(
    value_before_drag: u32,
    span: u32,
    definition_count: u32,
    drag_distance: f64,
    axis: Axis,
    size_of: impl Fn(usize) -> Option<f64>,
) -> Result<u32, SnapError> {
    let cell = cell_size(axis, value_before_drag, size_of)?;
    let limit = definition_count.saturating_sub(span);

    let position_before_drag = cell * f64::from(value_before_drag);
    let mut remaining = position_before_drag + drag_distance;
    let mut index = 0_u32;
    while index < limit && remaining > cell / 2.0 {
        remaining -= cell;
        index += 1;
    }
    Ok(index)
}

/// New span for an item whose far edge was dragged `drag_distance` pixels along `axis`.
///
/// `original_size` is the item's rendered size on this axis when the drag started and
/// `origin` its first column (or row). The span is limited to the cells between
/// `origin` and `definition_count`, and is never less than 1.
pub fn snap_resize(
    original_size: f64,
    origin: u32,
    definition_count: u32,
    drag_distance: f64,
    axis: Axis,
    size_of: impl Fn(usize) -> Option<f64>,
) -> Result<u32, SnapError> {
    let cell = cell_size(axis, origin, size_of)?;
    let limit = definition_count.saturating_sub(origin);

    let mut remaining = original_size + drag_distance;
    let mut span = 0_u32;
    while span < limit && remaining > cell / 2.0 {
        remaining -= cell;
        span += 1;
    }
    Ok(span.max(1))
}
