// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridstack_index --heading-base-level=0

//! Gridstack Index: cell-based placement index for fixed-column grids.
//!
//! Gridstack Index is the storage layer of the grid packing engine.
//!
//! - Describe the cells an item occupies with a [`GridSpan`] (origin plus extent, spans ≥ 1).
//! - Set, move, and remove items by identity in a [`PlacementIndex`].
//! - Query which items intersect a region, optionally excluding some identities.
//! - Batch changes with [`PlacementIndex::commit`] and receive [`Damage`] (added/removed/moved items).
//!
//! The index never enforces non-overlap; it only answers questions about the current placements.
//! Packing and collision policy live in the `gridstack` crate.
//!
//! Backends are pluggable via a simple trait so you can swap the lookup strategy without API churn.
//! The default backend is a flat vector (linear scan).
//! The [`RowBands`] backend buckets items by bands of rows, which keeps lookups local on tall grids.
//!
//! # Example
//!
//! ```rust
//! use gridstack_index::{GridSpan, PlacementIndex};
//!
//! let mut idx: PlacementIndex<u32> = PlacementIndex::new();
//! idx.set(1, GridSpan::new(0, 0, 2, 2));
//! idx.set(2, GridSpan::new(2, 0, 2, 1));
//! let _ = idx.commit();
//!
//! // Which items touch the cells (1..=2, 0..=0)?
//! let hits: Vec<_> = idx.query(GridSpan::new(1, 0, 2, 1), &[]).map(|(k, _)| k).collect();
//! assert_eq!(hits, [1, 2]);
//!
//! // Move the second item down and commit a damage set.
//! idx.set(2, GridSpan::new(2, 3, 2, 1));
//! let damage = idx.commit();
//! assert_eq!(damage.moved.len(), 1);
//! assert_eq!(idx.max_bottom_row(), Some(3));
//! ```
//!
//! ## Choosing a backend
//!
//! - `FlatVec` (default): simplest and smallest, linear scans. Good for dashboards with
//!   tens of items.
//! - `RowBands`: items are registered in every band of rows they touch. Choose a band
//!   height close to the typical row span.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod damage;
pub mod index;
pub mod types;

pub use backend::Backend;
pub use backends::bands::RowBands;
pub use backends::flatvec::FlatVec;
pub use damage::{Damage, Move, SpanChanges};
pub use index::{PlacementIndex, PlacementIndexGeneric};
pub use types::GridSpan;
