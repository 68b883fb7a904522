// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade resolution: push items displaced by a drop downward.
//!
//! ## Rules
//!
//! - The dropped item is committed at its candidate span first and never moves again.
//! - Every item overlapping a committed span (the trigger) moves to the row just below
//!   the trigger's bottom edge; its column and spans are unchanged.
//! - Each relocated item becomes a trigger in turn, so whatever it now overlaps is
//!   pushed below it.
//!
//! ## Ordering and termination
//!
//! Triggers are processed breadth-first from a work queue, and the victims of one
//! trigger are relocated top to bottom (row, then column). An item is relocated at
//! most once per cascade: once moved it joins the settled set and is never a victim
//! again. A victim whose target would land on an already-settled item is pushed
//! further down, below that item, so settled items never overlap each other.
//! Every relocation strictly increases the victim's row and the item set is finite,
//! so the cascade terminates without recursion.

use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::fmt::Debug;

use gridstack_index::{Backend, GridSpan, Move, PlacementIndexGeneric};
use tracing::trace;

/// Commit `candidate` for `moved` and relocate everything it displaces.
///
/// Returns the relocations in the order they were made. `moved` itself is not
/// included. The index must have no overlaps before the call; it has none after,
/// provided no relocation needs a row past `u32::MAX`.
/// [`GridStack::drag_completed`](crate::GridStack::drag_completed) refuses such drops
/// before calling this.
pub fn resolve_drop<K, B>(
    index: &mut PlacementIndexGeneric<K, B>,
    moved: K,
    candidate: GridSpan,
) -> Vec<Move<K>>
where
    K: Copy + Ord + Debug,
    B: Backend,
{
    index.set(moved, candidate);

    let mut settled = BTreeSet::from([moved]);
    let mut relocated = Vec::new();
    let mut queue = VecDeque::from([candidate]);

    while let Some(trigger) = queue.pop_front() {
        let mut victims: Vec<_> = index
            .query_filtered(trigger, |k| !settled.contains(k))
            .collect();
        if victims.is_empty() {
            continue;
        }
        victims.sort_by_key(|(_, span)| (span.row(), span.column()));

        let Some(target_row) = trigger.bottom_row().checked_add(1) else {
            continue;
        };
        for (victim, from) in victims {
            let to = settle_below(index, &settled, from.with_row(target_row));
            index.set(victim, to);
            settled.insert(victim);
            trace!(?victim, ?from, ?to, "cascade relocation");
            relocated.push(Move {
                item: victim,
                from,
                to,
            });
            queue.push_back(to);
        }
    }
    relocated
}

/// Push `span` down until it clears every settled item, or until it reaches the
/// last row.
fn settle_below<K, B>(
    index: &PlacementIndexGeneric<K, B>,
    settled: &BTreeSet<K>,
    mut span: GridSpan,
) -> GridSpan
where
    K: Copy + Ord + Debug,
    B: Backend,
{
    while let Some(bottom) = index
        .query_filtered(span, |k| settled.contains(k))
        .map(|(_, s)| s.bottom_row())
        .max()
    {
        let Some(next) = bottom.checked_add(1) else {
            break;
        };
        span = span.with_row(next);
    }
    span
}
