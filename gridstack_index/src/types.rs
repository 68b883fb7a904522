// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid geometry: the cell region occupied by a placed item.

use core::cmp::{max, min};

/// A rectangular region of grid cells: origin column/row plus column/row extent.
///
/// Spans are always at least one cell; [`GridSpan::new`] raises a zero span to `1`
/// and shortens a span whose far edge would pass `u32::MAX`, so
/// [`right_column`](Self::right_column) and [`bottom_row`](Self::bottom_row) are
/// always exact. Values are immutable: every placement change produces a new `GridSpan`.
///
/// The region covers the closed cell ranges
/// `[column, right_column] × [row, bottom_row]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridSpan {
    column: u32,
    row: u32,
    column_span: u32,
    row_span: u32,
}

impl GridSpan {
    /// Create a span at `(column, row)` covering `column_span × row_span` cells.
    ///
    /// Each extent is raised to 1 if zero and capped so the region ends at or
    /// before cell `u32::MAX`.
    pub const fn new(column: u32, row: u32, column_span: u32, row_span: u32) -> Self {
        Self {
            column,
            row,
            column_span: fit_extent(column, column_span),
            row_span: fit_extent(row, row_span),
        }
    }

    /// A single cell at `(column, row)`.
    pub const fn cell(column: u32, row: u32) -> Self {
        Self::new(column, row, 1, 1)
    }

    /// First column covered.
    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// First row covered.
    #[inline]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Number of columns covered (at least 1).
    #[inline]
    pub const fn column_span(&self) -> u32 {
        self.column_span
    }

    /// Number of rows covered (at least 1).
    #[inline]
    pub const fn row_span(&self) -> u32 {
        self.row_span
    }

    /// Last column covered: `column + column_span - 1`.
    #[inline]
    pub const fn right_column(&self) -> u32 {
        self.column + (self.column_span - 1)
    }

    /// Last row covered: `row + row_span - 1`.
    #[inline]
    pub const fn bottom_row(&self) -> u32 {
        self.row + (self.row_span - 1)
    }

    /// One past the last row covered, or `None` when `bottom_row` is `u32::MAX`.
    #[inline]
    pub const fn row_end(&self) -> Option<u32> {
        self.row.checked_add(self.row_span)
    }

    /// Same extent, moved to `row`.
    pub const fn with_row(self, row: u32) -> Self {
        Self::new(self.column, row, self.column_span, self.row_span)
    }

    /// Same extent, moved to `column`.
    pub const fn with_column(self, column: u32) -> Self {
        Self::new(column, self.row, self.column_span, self.row_span)
    }

    /// Same origin, new extent.
    pub const fn with_spans(self, column_span: u32, row_span: u32) -> Self {
        Self::new(self.column, self.row, column_span, row_span)
    }

    /// Whether the two regions share at least one cell.
    ///
    /// Symmetric. Callers never test an item against its own span.
    pub fn intersects(&self, other: &Self) -> bool {
        self.column <= other.right_column()
            && other.column <= self.right_column()
            && self.row <= other.bottom_row()
            && other.row <= self.bottom_row()
    }

    /// Whether the cell `(column, row)` lies inside this region.
    pub fn contains_cell(&self, column: u32, row: u32) -> bool {
        (self.column..=self.right_column()).contains(&column)
            && (self.row..=self.bottom_row()).contains(&row)
    }

    /// Smallest region covering both spans.
    ///
    /// An extent that would exceed `u32::MAX` cells saturates.
    pub fn union(&self, other: &Self) -> Self {
        let column = min(self.column, other.column);
        let row = min(self.row, other.row);
        let right = max(self.right_column(), other.right_column());
        let bottom = max(self.bottom_row(), other.bottom_row());
        Self::new(
            column,
            row,
            (right - column).saturating_add(1),
            (bottom - row).saturating_add(1),
        )
    }
}

/// Clamp an extent starting at `start` to `1..=` the cells left before `u32::MAX`.
const fn fit_extent(start: u32, extent: u32) -> u32 {
    let room = (u32::MAX - start).saturating_add(1);
    if extent == 0 {
        1
    } else if extent > room {
        room
    } else {
        extent
    }
}
