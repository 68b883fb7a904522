// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration.

use crate::error::{Axis, ConfigError};

/// Configuration of a single grid instance.
///
/// Owned by each [`GridStack`](crate::GridStack) rather than held globally, so several
/// independent grids can coexist.
///
/// `column_count` is a hard ceiling: no placed span extends past it. A default column
/// span wider than the grid is clamped to `column_count` when an item is placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Number of columns. At least 1.
    pub column_count: u32,
    /// Rows that always exist, even when empty. At least 1.
    pub min_row_count: u32,
    /// Column span given to auto-placed items. At least 1.
    pub default_column_span: u32,
    /// Row span given to auto-placed items. At least 1.
    pub default_row_span: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: 5,
            min_row_count: 5,
            default_column_span: 2,
            default_row_span: 2,
        }
    }
}

impl GridConfig {
    /// Create and validate a configuration.
    pub fn new(
        column_count: u32,
        min_row_count: u32,
        default_column_span: u32,
        default_row_span: u32,
    ) -> Result<Self, ConfigError> {
        Self {
            column_count,
            min_row_count,
            default_column_span,
            default_row_span,
        }
        .validate()
    }

    /// Check every field, returning the configuration unchanged if valid.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.column_count == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.min_row_count == 0 {
            return Err(ConfigError::ZeroMinRows);
        }
        if self.default_column_span == 0 {
            return Err(ConfigError::ZeroDefaultSpan(Axis::Column));
        }
        if self.default_row_span == 0 {
            return Err(ConfigError::ZeroDefaultSpan(Axis::Row));
        }
        Ok(self)
    }

    /// Set the column count.
    pub fn with_column_count(mut self, column_count: u32) -> Self {
        self.column_count = column_count;
        self
    }

    /// Set the minimum row count.
    pub fn with_min_row_count(mut self, min_row_count: u32) -> Self {
        self.min_row_count = min_row_count;
        self
    }

    /// Set the default spans for auto-placed items.
    pub fn with_default_spans(mut self, column_span: u32, row_span: u32) -> Self {
        self.default_column_span = column_span;
        self.default_row_span = row_span;
        self
    }

    /// `column_span` limited to the grid width.
    pub fn clamp_column_span(&self, column_span: u32) -> u32 {
        column_span.min(self.column_count)
    }
}
