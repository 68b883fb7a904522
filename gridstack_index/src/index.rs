// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `PlacementIndex` API and generic implementation over a pluggable backend.

use alloc::collections::BTreeMap;
use alloc::vec::{self, Vec};
use core::fmt::Debug;

use crate::backend::Backend;
use crate::backends::bands::RowBands;
use crate::backends::flatvec::FlatVec;
use crate::damage::{Damage, Move};
use crate::types::GridSpan;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mark {
    Added,
    Updated,
}

#[derive(Clone, Debug)]
struct Entry<K> {
    item: K,
    span: GridSpan,
    mark: Option<Mark>,
    prev_span: Option<GridSpan>, // span at last commit, for moved damage
}

/// A placement index parameterized by a spatial backend.
///
/// Maps each item identity to its current [`GridSpan`]. The index is a plain store:
/// it never checks overlap, that policy belongs to the layers above.
///
/// The backend is updated eagerly on every [`set`](Self::set) and
/// [`remove`](Self::remove), so queries always see the latest placements.
/// Only damage bookkeeping is batched until [`commit`](Self::commit).
#[derive(Clone, Debug)]
pub struct PlacementIndexGeneric<K: Copy + Ord + Debug, B: Backend> {
    entries: Vec<Option<Entry<K>>>,
    free_list: Vec<usize>,
    slots: BTreeMap<K, usize>,
    removed: Vec<(K, GridSpan)>,
    backend: B,
}

impl<K, B> PlacementIndexGeneric<K, B>
where
    K: Copy + Ord + Debug,
    B: Backend + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<K, B> PlacementIndexGeneric<K, B>
where
    K: Copy + Ord + Debug,
    B: Backend,
{
    /// Create an empty index over an explicitly configured backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            free_list: Vec::new(),
            slots: BTreeMap::new(),
            removed: Vec::new(),
            backend,
        }
    }

    /// Insert `item` at `span`, or overwrite its current span.
    pub fn set(&mut self, item: K, span: GridSpan) {
        if let Some(&slot) = self.slots.get(&item) {
            if let Some(e) = self.entries[slot].as_mut() {
                if e.mark.is_none() {
                    e.prev_span = Some(e.span);
                }
                e.span = span;
                e.mark = Some(match e.mark {
                    Some(Mark::Added) => Mark::Added,
                    _ => Mark::Updated,
                });
            }
            self.backend.update(slot, span);
            return;
        }
        let entry = Entry {
            item,
            span,
            mark: Some(Mark::Added),
            prev_span: None,
        };
        let slot = if let Some(slot) = self.free_list.pop() {
            self.entries[slot] = Some(entry);
            slot
        } else {
            self.entries.push(Some(entry));
            self.entries.len() - 1
        };
        self.slots.insert(item, slot);
        self.backend.insert(slot, span);
    }

    /// Remove `item`, returning its span if it was placed.
    pub fn remove(&mut self, item: K) -> Option<GridSpan> {
        let slot = self.slots.remove(&item)?;
        let entry = self.entries[slot].take()?;
        self.backend.remove(slot);
        self.free_list.push(slot);
        match entry.mark {
            // Never committed; nothing to report.
            Some(Mark::Added) => {}
            Some(Mark::Updated) => self
                .removed
                .push((item, entry.prev_span.unwrap_or(entry.span))),
            None => self.removed.push((item, entry.span)),
        }
        Some(entry.span)
    }

    /// Clear the index (without reporting damage).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.free_list.clear();
        self.slots.clear();
        self.removed.clear();
        self.backend.clear();
    }

    /// Current span of `item`, if placed.
    pub fn get(&self, item: K) -> Option<GridSpan> {
        let slot = *self.slots.get(&item)?;
        self.entries[slot].as_ref().map(|e| e.span)
    }

    /// Whether `item` is placed.
    pub fn contains(&self, item: K) -> bool {
        self.slots.contains_key(&item)
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no items are placed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate placed items in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (K, GridSpan)> + '_ {
        self.slots
            .iter()
            .filter_map(|(&item, &slot)| self.entries[slot].as_ref().map(|e| (item, e.span)))
    }

    /// Items whose span intersects `region`, skipping those listed in `exclude`.
    ///
    /// Results come back in slot order, which is stable for a given index state.
    pub fn query(&self, region: GridSpan, exclude: &[K]) -> vec::IntoIter<(K, GridSpan)> {
        self.query_filtered(region, |k| !exclude.contains(k))
    }

    /// Items intersecting `item`'s own span, always skipping `item` itself.
    ///
    /// Returns `None` if `item` is not placed.
    pub fn query_against(&self, item: K, exclude: &[K]) -> Option<Vec<(K, GridSpan)>> {
        let region = self.get(item)?;
        Some(
            self.query_filtered(region, |k| *k != item && !exclude.contains(k))
                .collect(),
        )
    }

    /// Items whose span intersects `region` and for which `keep` returns true.
    pub fn query_filtered(
        &self,
        region: GridSpan,
        keep: impl Fn(&K) -> bool,
    ) -> vec::IntoIter<(K, GridSpan)> {
        let mut out = Vec::new();
        for slot in self.backend.query_region(region) {
            if let Some(Some(e)) = self.entries.get(slot)
                && keep(&e.item)
            {
                out.push((e.item, e.span));
            }
        }
        out.into_iter()
    }

    /// Whether any placed item (other than those `keep` rejects) intersects `region`.
    pub fn any_intersecting(&self, region: GridSpan, keep: impl Fn(&K) -> bool) -> bool {
        self.backend.query_region(region).any(|slot| {
            matches!(self.entries.get(slot), Some(Some(e)) if keep(&e.item))
        })
    }

    /// Largest `bottom_row` over all placed items, or `None` if the index is empty.
    pub fn max_bottom_row(&self) -> Option<u32> {
        self.entries
            .iter()
            .flatten()
            .map(|e| e.span.bottom_row())
            .max()
    }

    /// Summarize changes since the previous commit.
    pub fn commit(&mut self) -> Damage<K> {
        let mut dmg = Damage {
            removed: core::mem::take(&mut self.removed),
            ..Damage::default()
        };
        for entry in self.entries.iter_mut().flatten() {
            match entry.mark.take() {
                Some(Mark::Added) => dmg.added.push((entry.item, entry.span)),
                Some(Mark::Updated) => {
                    if let Some(prev) = entry.prev_span.take()
                        && prev != entry.span
                    {
                        dmg.moved.push(Move {
                            item: entry.item,
                            from: prev,
                            to: entry.span,
                        });
                    }
                }
                None => {}
            }
        }
        dmg
    }
}

/// Default placement index using a flat vector backend.
pub type PlacementIndex<K> = PlacementIndexGeneric<K, FlatVec>;

impl<K: Copy + Ord + Debug> Default for PlacementIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Ord + Debug> PlacementIndex<K> {
    /// Create a row-band-backed index grouping `band_height` rows per band.
    pub fn with_row_bands(band_height: u32) -> PlacementIndexGeneric<K, RowBands> {
        PlacementIndexGeneric::with_backend(RowBands::new(band_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ids(it: impl Iterator<Item = (u32, GridSpan)>) -> Vec<u32> {
        let mut v: Vec<_> = it.map(|(k, _)| k).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn query_excludes_listed_items() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        idx.set(1, GridSpan::new(0, 0, 2, 2));
        idx.set(2, GridSpan::new(2, 0, 2, 2));
        idx.set(3, GridSpan::new(0, 2, 4, 1));
        let region = GridSpan::new(1, 1, 2, 2);
        assert_eq!(ids(idx.query(region, &[])), vec![1, 2, 3]);
        assert_eq!(ids(idx.query(region, &[2])), vec![1, 3]);
    }

    #[test]
    fn query_against_skips_self() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        idx.set(1, GridSpan::new(0, 0, 2, 2));
        idx.set(2, GridSpan::new(1, 1, 2, 2));
        idx.set(3, GridSpan::new(1, 0, 1, 1));
        let hits = idx.query_against(1, &[]).unwrap_or_default();
        assert_eq!(ids(hits.into_iter()), vec![2, 3]);
        let hits = idx.query_against(1, &[3]).unwrap_or_default();
        assert_eq!(ids(hits.into_iter()), vec![2]);
        assert!(idx.query_against(9, &[]).is_none());
    }

    #[test]
    fn set_overwrites_and_remove_forgets() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        idx.set(7, GridSpan::new(0, 0, 1, 1));
        idx.set(7, GridSpan::new(3, 3, 1, 1));
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.get(7), Some(GridSpan::new(3, 3, 1, 1)));
        assert_eq!(idx.query(GridSpan::cell(0, 0), &[]).count(), 0);
        assert_eq!(idx.remove(7), Some(GridSpan::new(3, 3, 1, 1)));
        assert!(idx.is_empty());
        assert_eq!(idx.remove(7), None);
    }

    #[test]
    fn max_bottom_row_tracks_tallest_item() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        assert_eq!(idx.max_bottom_row(), None);
        idx.set(1, GridSpan::new(0, 0, 1, 2));
        idx.set(2, GridSpan::new(1, 3, 1, 3));
        assert_eq!(idx.max_bottom_row(), Some(5));
        idx.remove(2);
        assert_eq!(idx.max_bottom_row(), Some(1));
    }

    #[test]
    fn slots_are_reused_after_remove() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        idx.set(1, GridSpan::cell(0, 0));
        idx.set(2, GridSpan::cell(1, 0));
        idx.remove(1);
        idx.set(3, GridSpan::cell(2, 0));
        assert_eq!(idx.entries.len(), 2);
        assert_eq!(ids(idx.iter()), vec![2, 3]);
    }

    #[test]
    fn added_then_removed_before_commit_is_ignored() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        idx.set(1, GridSpan::cell(0, 0));
        idx.remove(1);
        assert!(idx.commit().is_empty());
    }

    #[test]
    fn removed_after_commit_reports_committed_span() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        idx.set(1, GridSpan::cell(0, 0));
        let _ = idx.commit();
        idx.set(1, GridSpan::cell(0, 4));
        idx.remove(1);
        let dmg = idx.commit();
        assert_eq!(dmg.removed, vec![(1, GridSpan::cell(0, 0))]);
        assert!(dmg.added.is_empty());
        assert!(dmg.moved.is_empty());
    }

    #[test]
    fn moved_reports_pair_and_round_trip_is_silent() {
        let mut idx: PlacementIndex<u32> = PlacementIndex::new();
        idx.set(1, GridSpan::new(0, 0, 2, 1));
        let _ = idx.commit();
        idx.set(1, GridSpan::new(0, 2, 2, 1));
        idx.set(1, GridSpan::new(0, 3, 2, 1));
        let dmg = idx.commit();
        assert_eq!(dmg.moved.len(), 1);
        assert_eq!(dmg.moved[0].from, GridSpan::new(0, 0, 2, 1));
        assert_eq!(dmg.moved[0].to, GridSpan::new(0, 3, 2, 1));

        idx.set(1, GridSpan::new(0, 5, 2, 1));
        idx.set(1, GridSpan::new(0, 3, 2, 1));
        assert!(idx.commit().is_empty());
    }

    #[test]
    fn row_band_index_matches_flat_index() {
        let mut flat: PlacementIndex<u32> = PlacementIndex::new();
        let mut banded = PlacementIndex::<u32>::with_row_bands(2);
        let spans = [
            GridSpan::new(0, 0, 2, 3),
            GridSpan::new(2, 1, 3, 1),
            GridSpan::new(0, 5, 5, 1),
            GridSpan::new(3, 2, 1, 4),
        ];
        for (i, s) in (0_u32..).zip(spans) {
            flat.set(i, s);
            banded.set(i, s);
        }
        banded.set(1, GridSpan::new(2, 6, 3, 1));
        flat.set(1, GridSpan::new(2, 6, 3, 1));
        for row in 0..8 {
            let region = GridSpan::new(0, row, 5, 1);
            assert_eq!(
                ids(flat.query(region, &[])),
                ids(banded.query(region, &[])),
                "row {row}"
            );
        }
        assert_eq!(flat.max_bottom_row(), banded.max_bottom_row());
    }
}
