//! Fixture builders shared by the deepvec benchmarks.
//!
//! Provides reference workloads:
//!
//! - [`flat_profile`]: a flat integer vector of `n` elements.
//! - [`grid_profile`]: a `rows × cols` grid of [`Span`] vectors with every
//!   cell populated to `fill` elements.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use deepvec::{scalar_large, DeepVec};

/// A trivial 16-byte element, declared scalar-large.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Span {
    /// Inclusive start.
    pub start: i64,
    /// Exclusive end.
    pub end: i64,
}

scalar_large!(Span);

/// Build a flat vector of `n` sequential integers through amortized growth.
pub fn flat_profile(n: usize) -> DeepVec<i64> {
    let mut v = DeepVec::new();
    for i in 0..n {
        v.push(i as i64);
    }
    v
}

/// Build a `rows × cols` grid with `fill` spans in every cell.
///
/// Construction goes through `filled` chaining, so the grid allocates
/// exactly what it declares before the per-cell appends.
pub fn grid_profile(rows: usize, cols: usize, fill: usize) -> DeepVec<DeepVec<DeepVec<Span>>> {
    let mut grid = DeepVec::filled(rows, DeepVec::filled(cols, DeepVec::new()));
    for r in 0..rows {
        for c in 0..cols {
            let cell = grid.at_mut(r).at_mut(c);
            cell.reserve_exact(fill);
            for k in 0..fill {
                cell.push(Span {
                    start: k as i64,
                    end: (k + r + c) as i64,
                });
            }
        }
    }
    grid
}
