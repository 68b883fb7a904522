// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched placement damage returned by [`PlacementIndex::commit`](crate::PlacementIndex::commit).

use alloc::vec::Vec;

use crate::types::GridSpan;

bitflags::bitflags! {
    /// Which parts of a span changed between two placements.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SpanChanges: u8 {
        /// Origin column changed.
        const COLUMN      = 0b0000_0001;
        /// Origin row changed.
        const ROW         = 0b0000_0010;
        /// Column extent changed.
        const COLUMN_SPAN = 0b0000_0100;
        /// Row extent changed.
        const ROW_SPAN    = 0b0000_1000;
    }
}

impl SpanChanges {
    /// Compare two spans field by field.
    pub fn between(from: &GridSpan, to: &GridSpan) -> Self {
        let mut out = Self::empty();
        out.set(Self::COLUMN, from.column() != to.column());
        out.set(Self::ROW, from.row() != to.row());
        out.set(Self::COLUMN_SPAN, from.column_span() != to.column_span());
        out.set(Self::ROW_SPAN, from.row_span() != to.row_span());
        out
    }

    /// The origin moved.
    pub fn is_reposition(self) -> bool {
        self.intersects(Self::COLUMN | Self::ROW)
    }

    /// The extent changed; renderers re-measure the item.
    pub fn is_resize(self) -> bool {
        self.intersects(Self::COLUMN_SPAN | Self::ROW_SPAN)
    }
}

/// A committed placement change for one item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move<K> {
    /// The relocated item.
    pub item: K,
    /// Span at the previous commit.
    pub from: GridSpan,
    /// Span now.
    pub to: GridSpan,
}

impl<K> Move<K> {
    /// Which parts of the span changed.
    pub fn changes(&self) -> SpanChanges {
        SpanChanges::between(&self.from, &self.to)
    }
}

/// Batched damage summary returned by [`PlacementIndex::commit`](crate::PlacementIndex::commit).
#[derive(Clone, Debug)]
pub struct Damage<K> {
    /// Items placed since last commit, with their spans.
    pub added: Vec<(K, GridSpan)>,
    /// Items removed since last commit, with their last committed spans.
    pub removed: Vec<(K, GridSpan)>,
    /// Items whose span changed since last commit.
    pub moved: Vec<Move<K>>,
}

impl<K> Default for Damage<K> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            moved: Vec::new(),
        }
    }
}

impl<K> Damage<K> {
    /// True if no damage entries recorded.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.moved.is_empty()
    }

    /// Union of all regions affected. Returns `None` if empty.
    pub fn union(&self) -> Option<GridSpan> {
        let mut it = self
            .added
            .iter()
            .map(|(_, s)| *s)
            .chain(self.removed.iter().map(|(_, s)| *s))
            .chain(self.moved.iter().flat_map(|m| [m.from, m.to]));
        let first = it.next()?;
        Some(it.fold(first, |acc, s| acc.union(&s)))
    }
}
