// Copyright 2025 the Gridstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different lookup strategies.
//!
//! - `flatvec`: flat vector with linear scans (small, simple).
//! - `bands`: slots bucketed by horizontal bands of rows; queries only visit the
//!   bands a region touches. Grids grow downward without bound, so banding by
//!   row keeps lookups local on tall grids.

pub mod bands;
pub mod flatvec;

pub use bands::RowBands;
pub use flatvec::FlatVec;
