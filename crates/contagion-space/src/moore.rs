//! Moore (8-connected) neighbourhood lookup with clipped edges.

use crate::grid::Grid;
use contagion_core::{HealthState, SimError};
use smallvec::SmallVec;

/// States of the up-to-8 cells surrounding a cell.
pub type Neighbours = SmallVec<[HealthState; 8]>;

/// The 3x3 block minus its centre, in row-major order.
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Grid {
    /// States of the Moore neighbours of `(row, col)`.
    ///
    /// Cells outside the grid, including positions past the end of a
    /// shorter final row, are omitted rather than defaulted. A corner of
    /// a full grid yields 3 states, an interior cell 8, and the only cell
    /// of a 1x1 grid none.
    ///
    /// Returns [`SimError::InvalidArgument`] if `(row, col)` itself is not
    /// a cell of this grid.
    pub fn neighbours(&self, row: usize, col: usize) -> Result<Neighbours, SimError> {
        self.checked_index(row, col)?;
        Ok(self.neighbours_unchecked(row, col).collect())
    }

    /// Number of Moore neighbours of `(row, col)` in state `state`.
    ///
    /// Returns [`SimError::InvalidArgument`] if `(row, col)` is not a cell
    /// of this grid.
    pub fn count_neighbours(
        &self,
        row: usize,
        col: usize,
        state: HealthState,
    ) -> Result<u32, SimError> {
        self.checked_index(row, col)?;
        Ok(self.count_neighbours_unchecked(row, col, state))
    }

    /// [`count_neighbours`](Self::count_neighbours) for callers iterating
    /// over cells they already know exist, such as the day-step loop.
    ///
    /// `(row, col)` must be a cell of this grid; debug builds panic
    /// otherwise.
    #[doc(hidden)]
    #[inline]
    pub fn count_neighbours_unchecked(&self, row: usize, col: usize, state: HealthState) -> u32 {
        debug_assert!(
            self.index(row, col).is_some(),
            "({row}, {col}) is not a cell of this grid"
        );
        self.neighbours_unchecked(row, col)
            .filter(|&s| s == state)
            .count() as u32
    }

    fn neighbours_unchecked(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = HealthState> + '_ {
        OFFSETS_8.iter().filter_map(move |&(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            self.get(nr, nc)
        })
    }
}
