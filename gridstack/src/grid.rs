// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid facade: lifecycle and gesture entry points over one placement index.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Size, Vec2};
use tracing::{debug, trace};

use gridstack_index::{
    Backend, Damage, FlatVec, GridSpan, Move, PlacementIndex, PlacementIndexGeneric, RowBands,
};

use crate::cascade::resolve_drop;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::gesture::{DragSession, GestureKind, moved_placeholder, resized_placeholder};
use crate::place::place_auto;
use crate::rows::RowSet;
use crate::snap::CellSizes;

/// How a newly added item chooses its initial span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Default spans from the configuration, searching from the top-left cell.
    Auto,
    /// The given spans, searching from the given origin. The span is a starting
    /// point, not a guarantee: if it is taken the search moves on.
    Preferred(GridSpan),
}

/// Result of a completed drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropOutcome<K> {
    /// The dropped item.
    pub item: K,
    /// Its span before the gesture.
    pub from: GridSpan,
    /// Its span after the drop.
    pub to: GridSpan,
    /// Items pushed down by the drop, in relocation order.
    pub relocated: Vec<Move<K>>,
    /// Rows appended to fit the new placements.
    pub rows_added: u32,
    /// Trailing rows removed after the drop.
    pub rows_removed: u32,
}

/// An interactive fixed-column grid.
///
/// Items are placed without overlap, never extend past
/// [`column_count`](GridConfig::column_count), and the row count always equals the
/// larger of the configured minimum and the lowest occupied row plus one. Every
/// committing method leaves these three properties intact; see
/// [`is_consistent`](Self::is_consistent).
///
/// `B` selects the lookup backend of the underlying placement index.
#[derive(Clone, Debug)]
pub struct GridStack<K: Copy + Ord + Debug, B: Backend = FlatVec> {
    config: GridConfig,
    index: PlacementIndexGeneric<K, B>,
    rows: RowSet,
}

impl<K: Copy + Ord + Debug> GridStack<K, FlatVec> {
    /// Create an empty grid over a flat-vector index.
    pub fn new(config: GridConfig) -> Result<Self, GridError<K>> {
        Self::with_backend(config, FlatVec::default())
    }

    /// Create an empty grid over a row-band index grouping `band_height` rows per band.
    pub fn with_row_bands(
        config: GridConfig,
        band_height: u32,
    ) -> Result<GridStack<K, RowBands>, GridError<K>> {
        GridStack::with_backend(config, RowBands::new(band_height))
    }
}

impl<K, B> GridStack<K, B>
where
    K: Copy + Ord + Debug,
    B: Backend,
{
    /// Create an empty grid over an explicitly configured backend.
    pub fn with_backend(config: GridConfig, backend: B) -> Result<Self, GridError<K>> {
        let config = config.validate()?;
        Ok(Self {
            config,
            index: PlacementIndexGeneric::with_backend(backend),
            rows: RowSet::new(config.min_row_count),
        })
    }

    /// Place a new item in the first free region and return its span.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn item_added(&mut self, id: K, placement: Placement) -> Result<GridSpan, GridError<K>> {
        if self.index.contains(id) {
            return Err(GridError::DuplicateItem(id));
        }
        let requested = match placement {
            Placement::Auto => GridSpan::new(
                0,
                0,
                self.config.default_column_span,
                self.config.default_row_span,
            ),
            Placement::Preferred(span) => span,
        };
        let span = place_auto(
            &self.index,
            self.config.clamp_column_span(requested.column_span()),
            requested.row_span(),
            (requested.column(), requested.row()),
            self.config.column_count,
        )
        .ok_or(GridError::RowOverflow {
            item: id,
            span: requested,
        })?;
        self.index.set(id, span);
        debug!(?id, ?span, "item placed");
        self.rows.grow_to_fit(self.index.max_bottom_row());
        Ok(span)
    }

    /// Remove an item and drop trailing empty rows. Returns the span it occupied.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn item_removed(&mut self, id: K) -> Result<GridSpan, GridError<K>> {
        let span = self.index.remove(id).ok_or(GridError::UnknownItem(id))?;
        debug!(?id, ?span, "item removed");
        self.rows.shrink_to_fit(self.index.max_bottom_row());
        Ok(span)
    }

    /// Remove every item and return the row count to the minimum.
    ///
    /// Returns the number of items removed. Removals are reported by the next
    /// [`commit`](Self::commit).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn all_items_cleared(&mut self) -> usize {
        let ids: Vec<K> = self.index.iter().map(|(id, _)| id).collect();
        for &id in &ids {
            self.index.remove(id);
        }
        self.rows.shrink_to_fit(None);
        debug!(removed = ids.len(), "grid cleared");
        ids.len()
    }

    /// Begin a gesture on `id`.
    pub fn drag_started(&self, id: K) -> Result<DragSession<K>, GridError<K>> {
        let span = self.index.get(id).ok_or(GridError::UnknownItem(id))?;
        Ok(DragSession::new(id, span))
    }

    /// Update a move gesture with the cumulative pointer `delta` and return the new
    /// placeholder. Committed placements are not touched.
    pub fn center_drag_delta(
        &self,
        session: &mut DragSession<K>,
        delta: Vec2,
        cells: &impl CellSizes,
    ) -> Result<GridSpan, GridError<K>> {
        self.ensure_placed(session.item())?;
        let placeholder = moved_placeholder(
            session.origin(),
            delta,
            self.config.column_count,
            self.rows.count(),
            cells,
        )?;
        trace!(item = ?session.item(), ?placeholder, "move placeholder");
        session.update(GestureKind::Move, placeholder);
        Ok(placeholder)
    }

    /// Update a resize gesture with the cumulative pointer `delta` on the
    /// bottom-right handle and return the new placeholder.
    ///
    /// `item_size` is the item's rendered size when the gesture started.
    pub fn edge_drag_delta(
        &self,
        session: &mut DragSession<K>,
        item_size: Size,
        delta: Vec2,
        cells: &impl CellSizes,
    ) -> Result<GridSpan, GridError<K>> {
        self.ensure_placed(session.item())?;
        let placeholder = resized_placeholder(
            session.origin(),
            item_size,
            delta,
            self.config.column_count,
            self.rows.count(),
            cells,
        )?;
        trace!(item = ?session.item(), ?placeholder, "resize placeholder");
        session.update(GestureKind::Resize, placeholder);
        Ok(placeholder)
    }

    /// Commit a gesture: place the item at its placeholder and push displaced items down.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn drag_completed(
        &mut self,
        session: DragSession<K>,
    ) -> Result<DropOutcome<K>, GridError<K>> {
        let item = session.item();
        let from = self.index.get(item).ok_or(GridError::UnknownItem(item))?;
        let to = self.fit_columns(session.placeholder());
        self.ensure_cascade_fits(item, to)?;

        let relocated = resolve_drop(&mut self.index, item, to);
        let max_bottom = self.index.max_bottom_row();
        let rows_added = self.rows.grow_to_fit(max_bottom);
        let rows_removed = self.rows.shrink_to_fit(max_bottom);
        debug!(
            ?item,
            ?from,
            ?to,
            relocated = relocated.len(),
            "item dropped"
        );
        Ok(DropOutcome {
            item,
            from,
            to,
            relocated,
            rows_added,
            rows_removed,
        })
    }

    /// Replace the configuration and lay every item out again.
    ///
    /// Items are re-placed in row-major order of their current origins, each
    /// searching from where it was, with column spans clamped to the new width.
    /// The changes are reported as moves by the next [`commit`](Self::commit).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reconfigure(&mut self, config: GridConfig) -> Result<(), GridError<K>> {
        let config = config.validate()?;
        let mut placed: Vec<(K, GridSpan)> = self.index.iter().collect();
        placed.sort_by_key(|(id, span)| (span.row(), span.column(), *id));

        let mut layout: PlacementIndex<K> = PlacementIndex::new();
        for (id, span) in placed {
            let column_span = config.clamp_column_span(span.column_span());
            let column = span.column().min(config.column_count - column_span);
            let to = place_auto(
                &layout,
                column_span,
                span.row_span(),
                (column, span.row()),
                config.column_count,
            )
            .ok_or(GridError::RowOverflow { item: id, span })?;
            layout.set(id, to);
        }
        for (id, span) in layout.iter() {
            self.index.set(id, span);
        }

        self.config = config;
        self.rows.set_min(config.min_row_count);
        let max_bottom = self.index.max_bottom_row();
        self.rows.grow_to_fit(max_bottom);
        self.rows.shrink_to_fit(max_bottom);
        debug!(?config, items = self.index.len(), "grid reconfigured");
        Ok(())
    }

    /// Current span of `id`, if placed.
    pub fn span_of(&self, id: K) -> Option<GridSpan> {
        self.index.get(id)
    }

    /// Placed items in identity order.
    pub fn items(&self) -> impl Iterator<Item = (K, GridSpan)> + '_ {
        self.index.iter()
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the grid holds no items.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of materialized rows.
    pub fn row_count(&self) -> u32 {
        self.rows.count()
    }

    /// Number of columns.
    pub fn column_count(&self) -> u32 {
        self.config.column_count
    }

    /// The active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Read-only access to the placement index, for custom queries.
    pub fn index(&self) -> &PlacementIndexGeneric<K, B> {
        &self.index
    }

    /// Whether the grid is at rest in a valid state: no overlaps, no item past the
    /// last column, and the row count matching the placed items.
    pub fn is_consistent(&self) -> bool {
        let column_count = self.config.column_count;
        let placed_ok = self.index.iter().all(|(id, span)| {
            span.right_column() < column_count && !self.index.any_intersecting(span, |k| *k != id)
        });
        placed_ok && self.rows.count() == self.rows.expected(self.index.max_bottom_row())
    }

    /// Summarize placement changes since the previous commit.
    pub fn commit(&mut self) -> Damage<K> {
        self.index.commit()
    }

    fn ensure_placed(&self, id: K) -> Result<(), GridError<K>> {
        if self.index.contains(id) {
            Ok(())
        } else {
            Err(GridError::UnknownItem(id))
        }
    }

    /// Reject a drop whose cascade could push an item onto row `u32::MAX`.
    ///
    /// Every relocated item lands below the drop target or below an item relocated
    /// before it, so the lowest possible bottom row after the cascade is the
    /// target's bottom row plus the row spans of every other item.
    fn ensure_cascade_fits(&self, item: K, to: GridSpan) -> Result<(), GridError<K>> {
        let pushed: u64 = self
            .index
            .iter()
            .filter(|(id, _)| *id != item)
            .map(|(_, span)| u64::from(span.row_span()))
            .sum();
        let lowest = u64::from(to.bottom_row()) + pushed;
        if to.row_end().is_none() || lowest >= u64::from(u32::MAX) {
            return Err(GridError::RowOverflow { item, span: to });
        }
        Ok(())
    }

    /// Pull a span back inside the columns, in case the grid narrowed mid-gesture.
    fn fit_columns(&self, span: GridSpan) -> GridSpan {
        let column_span = self.config.clamp_column_span(span.column_span());
        let column = span
            .column()
            .min(self.config.column_count - column_span);
        span.with_spans(column_span, span.row_span())
            .with_column(column)
    }
}
