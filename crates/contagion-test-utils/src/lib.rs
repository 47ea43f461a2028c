//! Test utilities for Contagion development.
//!
//! Grids are written as text, one line per row and one letter per cell
//! (`H`ealthy, `V`accinated, `C`ontaminated, `D`ead):
//!
//! ```
//! use contagion_test_utils::grid;
//!
//! let g = grid("HCH\nVD");
//! assert_eq!(g.shape(), vec![3, 2]);
//! ```

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod strategies;

use contagion_core::{HealthState, SimError};
use contagion_space::Grid;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Parse a text grid, reporting unknown letters as `InvalidArgument` and
/// malformed shapes as `InvalidState`.
pub fn try_grid(text: &str) -> Result<Grid, SimError> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| {
            line.chars()
                .map(|c| {
                    HealthState::from_symbol(c).ok_or_else(|| {
                        SimError::invalid_argument("grid", format!("unknown cell symbol {c:?}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_rows(rows)
}

/// Parse a text grid, panicking on malformed input.
pub fn grid(text: &str) -> Grid {
    match try_grid(text) {
        Ok(g) => g,
        Err(e) => panic!("bad test grid {text:?}: {e}"),
    }
}

/// A ChaCha8 RNG seeded from `seed`, the same generator the simulation
/// driver uses.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Wraps an RNG and counts how many values are drawn from it.
///
/// Each `next_u32`, `next_u64`, or `fill_bytes` call counts as one draw;
/// a uniform `f64` costs exactly one `next_u64`.
pub struct CountingRng<R> {
    inner: R,
    draws: usize,
}

impl<R: RngCore> CountingRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }

    /// Draws taken since construction.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dst)
    }
}

/// A [`CountingRng`] over [`seeded_rng`].
pub fn counting_rng(seed: u64) -> CountingRng<ChaCha8Rng> {
    CountingRng::new(seeded_rng(seed))
}

/// Number of cells of `grid` in `state`.
pub fn count(grid: &Grid, state: HealthState) -> usize {
    grid.cells().iter().filter(|&&s| s == state).count()
}
