// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial lookups over placed spans.

use alloc::boxed::Box;

use crate::types::GridSpan;

/// Spatial backend abstraction used by `PlacementIndexGeneric`.
///
/// A backend only maps slots to spans; identities and damage live in the index.
pub trait Backend {
    /// Insert a new slot into the spatial structure.
    fn insert(&mut self, slot: usize, span: GridSpan);

    /// Update an existing slot's span.
    fn update(&mut self, slot: usize, span: GridSpan);

    /// Remove a slot from the spatial structure.
    fn remove(&mut self, slot: usize);

    /// Clear all spatial structures.
    fn clear(&mut self);

    /// Query slots whose span intersects the region, in ascending slot order.
    fn query_region<'a>(&'a self, region: GridSpan) -> Box<dyn Iterator<Item = usize> + 'a>;
}
