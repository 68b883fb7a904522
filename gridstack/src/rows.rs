// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row count maintenance.

use tracing::debug;

/// The number of materialized rows, bounded below by a configured minimum.
///
/// Grows so the lowest occupied row always exists, and shrinks trailing empty rows
/// back toward the minimum.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowSet {
    count: u32,
    min: u32,
}

impl RowSet {
    /// A row set holding exactly `min` rows (raised to 1 if zero).
    pub fn new(min: u32) -> Self {
        let min = min.max(1);
        Self { count: min, min }
    }

    /// Current number of rows.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Minimum number of rows.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Change the minimum; grows immediately if the current count is below it.
    pub fn set_min(&mut self, min: u32) {
        self.min = min.max(1);
        self.count = self.count.max(self.min);
    }

    /// Append rows until `max_bottom_row` exists. Returns the number of rows added.
    pub fn grow_to_fit(&mut self, max_bottom_row: Option<u32>) -> u32 {
        let Some(needed) = max_bottom_row.map(|r| r.saturating_add(1)) else {
            return 0;
        };
        if needed <= self.count {
            return 0;
        }
        let added = needed - self.count;
        debug!(from = self.count, to = needed, "rows grown");
        self.count = needed;
        added
    }

    /// Remove trailing rows below `max_bottom_row`, never going under the minimum.
    /// Returns the number of rows removed.
    pub fn shrink_to_fit(&mut self, max_bottom_row: Option<u32>) -> u32 {
        let target = max_bottom_row
            .map(|r| r.saturating_add(1))
            .unwrap_or(0)
            .max(self.min);
        if target >= self.count {
            return 0;
        }
        let removed = self.count - target;
        debug!(from = self.count, to = target, "rows shrunk");
        self.count = target;
        removed
    }

    /// Row count a consistent grid must have for `max_bottom_row`.
    pub fn expected(&self, max_bottom_row: Option<u32>) -> u32 {
        max_bottom_row
            .map(|r| r.saturating_add(1))
            .unwrap_or(0)
            .max(self.min)
    }
}
