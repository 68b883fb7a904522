// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-band backend. Buckets slots by horizontal bands of rows.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::RangeInclusive;

use crate::backend::Backend;
use crate::types::GridSpan;

/// Row-band backend.
///
/// Rows are grouped into bands of `band_height` rows. A span is registered in every
/// band it touches; a region query gathers candidates from the bands the region
/// touches, filters them by exact intersection, and de-duplicates.
///
/// Bands are stored sparsely, keyed by band number, so memory follows the number of
/// occupied bands rather than how far down the rows go.
#[derive(Clone)]
pub struct RowBands {
    band_height: u32,
    entries: Vec<Option<GridSpan>>,
    bands: BTreeMap<u32, Vec<usize>>,
}

impl Default for RowBands {
    fn default() -> Self {
        Self::new(4)
    }
}

impl RowBands {
    /// Create a backend grouping `band_height` rows per band (raised to 1 if zero).
    pub fn new(band_height: u32) -> Self {
        Self {
            band_height: band_height.max(1),
            entries: Vec::new(),
            bands: BTreeMap::new(),
        }
    }

    /// Rows per band.
    pub fn band_height(&self) -> u32 {
        self.band_height
    }

    /// Number of bands currently holding at least one slot.
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    fn band_range(&self, span: &GridSpan) -> RangeInclusive<u32> {
        (span.row() / self.band_height)..=(span.bottom_row() / self.band_height)
    }

    fn add_to_bands(&mut self, slot: usize, span: &GridSpan) {
        for band in self.band_range(span) {
            self.bands.entry(band).or_default().push(slot);
        }
    }

    fn remove_from_bands(&mut self, slot: usize) {
        let Some(Some(span)) = self.entries.get(slot).copied() else {
            return;
        };
        for band in self.band_range(&span) {
            if let Some(slots) = self.bands.get_mut(&band)
                && let Some(pos) = slots.iter().position(|&s| s == slot)
            {
                slots.swap_remove(pos);
                if slots.is_empty() {
                    self.bands.remove(&band);
                }
            }
        }
    }
}

impl Backend for RowBands {
    fn insert(&mut self, slot: usize, span: GridSpan) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.remove_from_bands(slot);
        self.entries[slot] = Some(span);
        self.add_to_bands(slot, &span);
    }
    fn update(&mut self, slot: usize, span: GridSpan) {
        self.remove_from_bands(slot);
        if let Some(e) = self.entries.get_mut(slot) {
            *e = Some(span);
            self.add_to_bands(slot, &span);
        }
    }
    fn remove(&mut self, slot: usize) {
        self.remove_from_bands(slot);
        if let Some(e) = self.entries.get_mut(slot) {
            *e = None;
        }
    }
    fn clear(&mut self) {
        self.entries.clear();
        self.bands.clear();
    }
    fn query_region<'a>(&'a self, region: GridSpan) -> Box<dyn Iterator<Item = usize> + 'a> {
        let mut set = BTreeSet::new();
        for slots in self.bands.range(self.band_range(&region)).map(|(_, v)| v) {
            for &s in slots {
                if let Some(Some(span)) = self.entries.get(s)
                    && span.intersects(&region)
                {
                    set.insert(s);
                }
            }
        }
        Box::new(set.into_iter())
    }
}

impl Debug for RowBands {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("RowBands")
            .field("band_height", &self.band_height)
            .field("total_slots", &total)
            .field("alive", &alive)
            .field("bands", &self.bands.len())
            .finish_non_exhaustive()
    }
}
