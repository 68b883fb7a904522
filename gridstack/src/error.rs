// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types. Every failure is a caller contract violation and is returned, never logged and dropped.

use core::fmt;

use gridstack_index::GridSpan;

/// Grid axis, used to report which cell-size lookup failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Columns (cell widths).
    Column,
    /// Rows (cell heights).
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => f.write_str("column"),
            Self::Row => f.write_str("row"),
        }
    }
}

/// Rejected [`GridConfig`](crate::GridConfig) values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `column_count` was zero.
    #[error("column count must be at least 1")]
    ZeroColumns,
    /// `min_row_count` was zero.
    #[error("minimum row count must be at least 1")]
    ZeroMinRows,
    /// A default span was zero.
    #[error("default {0} span must be at least 1")]
    ZeroDefaultSpan(Axis),
}

/// Failures of the drag/resize snapping math.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum SnapError {
    /// The rendering collaborator had no size for a cell while a gesture was active.
    #[error("no {axis} size available for cell {index}")]
    MissingCellSize {
        /// Axis of the failed lookup.
        axis: Axis,
        /// Index that was looked up.
        index: usize,
    },
    /// A cell size was zero, negative, or not finite.
    #[error("{axis} cell {index} has unusable size {size}")]
    DegenerateCellSize {
        /// Axis of the failed lookup.
        axis: Axis,
        /// Index that was looked up.
        index: usize,
        /// The size that was returned.
        size: f64,
    },
}

/// Errors returned by [`GridStack`](crate::GridStack) operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GridError<K: fmt::Debug> {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Snapping failed during a gesture.
    #[error(transparent)]
    Snap(#[from] SnapError),
    /// The identity is not placed in the grid.
    #[error("item {0:?} is not in the grid")]
    UnknownItem(K),
    /// The identity is already placed in the grid.
    #[error("item {0:?} is already in the grid")]
    DuplicateItem(K),
    /// Placing the item would cover row `u32::MAX`, so the row count would not fit in a `u32`.
    #[error("item {item:?} at {span:?} extends past the last addressable row")]
    RowOverflow {
        /// The item being placed.
        item: K,
        /// The span that was requested or would have been reached.
        span: GridSpan,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            ConfigError::ZeroDefaultSpan(Axis::Row).to_string(),
            "default row span must be at least 1"
        );
        let snap = SnapError::MissingCellSize {
            axis: Axis::Column,
            index: 3,
        };
        assert_eq!(snap.to_string(), "no column size available for cell 3");
        let err: GridError<u32> = snap.into();
        assert_eq!(err.to_string(), "no column size available for cell 3");
        assert_eq!(
            GridError::UnknownItem(7_u32).to_string(),
            "item 7 is not in the grid"
        );
        let overflow = GridError::RowOverflow {
            item: 2_u32,
            span: GridSpan::new(0, 4, 1, 1),
        };
        assert_eq!(
            overflow.to_string(),
            "item 2 at GridSpan { column: 0, row: 4, column_span: 1, row_span: 1 } \
             extends past the last addressable row"
        );
    }

    #[test]
    fn config_errors_convert() {
        let err: GridError<u32> = ConfigError::ZeroColumns.into();
        assert_eq!(err, GridError::Config(ConfigError::ZeroColumns));
    }
}
