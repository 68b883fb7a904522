// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-placement search: find the first free region for a new item.
//!
//! Candidates are scanned in row-major order. The first scanned row starts at the
//! preferred column; every later row starts at column 0. The row set grows to fit
//! whatever the search returns, and every row below the lowest placed item is
//! empty, so the search only fails when the item would reach row `u32::MAX`, where
//! the row count is no longer representable.

use core::fmt::Debug;

use gridstack_index::{Backend, GridSpan, PlacementIndexGeneric};

/// Find the first free, in-bounds region of `column_span × row_span` cells,
/// scanning from `preferred` (`(column, row)`).
///
/// `column_span` is clamped to `column_count` first. `column_count` must be at least 1.
/// Returns `None` if the first free region would cover row `u32::MAX`.
pub fn place_auto<K, B>(
    index: &PlacementIndexGeneric<K, B>,
    column_span: u32,
    row_span: u32,
    preferred: (u32, u32),
    column_count: u32,
) -> Option<GridSpan>
where
    K: Copy + Ord + Debug,
    B: Backend,
{
    let column_span = column_span.clamp(1, column_count.max(1));
    let row_span = row_span.max(1);
    let (preferred_column, preferred_row) = preferred;
    // Past the lowest item every row is empty, so the first in-bounds column wins.
    let free_from = index.max_bottom_row().map_or(0, |r| r.saturating_add(1));
    let mut row = preferred_row;
    loop {
        if row.checked_add(row_span).is_none() {
            return None;
        }
        let first_column = if row == preferred_row {
            preferred_column
        } else {
            0
        };
        for column in first_column..column_count {
            let candidate = GridSpan::new(column, row, column_span, row_span);
            if candidate.right_column() >= column_count {
                break;
            }
            if row >= free_from || !index.any_intersecting(candidate, |_| true) {
                return Some(candidate);
            }
        }
        row = row.checked_add(1)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstack_index::PlacementIndex;

    fn place(idx: &mut PlacementIndex<u32>, id: u32, cs: u32, rs: u32, columns: u32) -> GridSpan {
        let span = place_auto(idx, cs, rs, (0, 0), columns).expect("room below");
        idx.set(id, span);
        span
    }

    #[test]
    fn fills_rows_left_to_right() {
        let mut idx = PlacementIndex::new();
        assert_eq!(place(&mut idx, 1, 2, 2, 5), GridSpan::new(0, 0, 2, 2));
        assert_eq!(place(&mut idx, 2, 2, 2, 5), GridSpan::new(2, 0, 2, 2));
        // (4, 0) would overflow the grid; row 1 is still covered by both items.
        assert_eq!(place(&mut idx, 3, 2, 2, 5), GridSpan::new(0, 2, 2, 2));
    }

    #[test]
    fn single_row_items_wrap_to_next_row() {
        let mut idx = PlacementIndex::new();
        place(&mut idx, 1, 2, 1, 5);
        place(&mut idx, 2, 2, 1, 5);
        assert_eq!(place(&mut idx, 3, 2, 1, 5), GridSpan::new(0, 1, 2, 1));
    }

    #[test]
    fn narrow_item_fills_gap() {
        let mut idx = PlacementIndex::new();
        place(&mut idx, 1, 2, 2, 5);
        place(&mut idx, 2, 2, 2, 5);
        assert_eq!(place(&mut idx, 3, 1, 1, 5), GridSpan::new(4, 0, 1, 1));
        assert_eq!(place(&mut idx, 4, 1, 1, 5), GridSpan::new(4, 1, 1, 1));
    }

    #[test]
    fn column_span_is_clamped_to_grid() {
        let idx: PlacementIndex<u32> = PlacementIndex::new();
        let span = place_auto(&idx, 9, 1, (0, 0), 3);
        assert_eq!(span, Some(GridSpan::new(0, 0, 3, 1)));
    }

    #[test]
    fn preferred_column_only_applies_to_first_row() {
        let mut idx = PlacementIndex::new();
        idx.set(1, GridSpan::new(3, 2, 2, 1));
        // Start at (3, 2): blocked, (4, 2) overflows, so the scan moves to row 3 at column 0.
        let span = place_auto(&idx, 2, 1, (3, 2), 5);
        assert_eq!(span, Some(GridSpan::new(0, 3, 2, 1)));
        // A free preferred cell is taken as-is.
        let span = place_auto(&idx, 1, 1, (1, 2), 5);
        assert_eq!(span, Some(GridSpan::new(1, 2, 1, 1)));
    }

    #[test]
    fn search_continues_past_occupied_rows() {
        let mut idx = PlacementIndex::new();
        for (id, row) in (0_u32..).zip(0..6) {
            idx.set(id, GridSpan::new(0, row, 4, 1));
        }
        let span = place_auto(&idx, 4, 2, (0, 0), 4);
        assert_eq!(span, Some(GridSpan::new(0, 6, 4, 2)));
    }

    #[test]
    fn last_addressable_row_is_never_covered() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        let last = u32::MAX - 1;
        assert_eq!(
            place_auto(&idx, 1, 1, (0, last), 2),
            Some(GridSpan::cell(0, last))
        );
        assert_eq!(place_auto(&idx, 1, 2, (0, last), 2), None);
        assert_eq!(place_auto(&idx, 1, 1, (0, u32::MAX), 2), None);

        // The scan gives up instead of stepping past the end of the rows.
        idx.set(1, GridSpan::new(0, last, 2, 1));
        assert_eq!(place_auto(&idx, 1, 1, (0, last), 2), None);
    }
}
