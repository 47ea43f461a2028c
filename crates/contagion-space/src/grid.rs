//! Ragged row-major population grid.

use crate::layout::layout;
use contagion_core::{HealthState, SimError};
use std::fmt;

/// A grid of health states whose last row may be shorter than the others.
///
/// Cells are stored row-major in one flat buffer; row `i` occupies
/// `cells[i * cols .. min((i + 1) * cols, len)]`. Every row except the
/// last therefore has exactly `cols` cells and the last row has between
/// 1 and `cols` cells. A `Grid` is never empty.
///
/// Grids are snapshots: stepping produces a new grid via
/// [`map_cells`](Grid::map_cells) and never mutates the input.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cols: usize,
    cells: Vec<HealthState>,
}

/// Build an all-`Healthy` grid holding exactly `population` cells.
///
/// Returns [`SimError::InvalidArgument`] if `population` is 0.
pub fn build(population: usize) -> Result<Grid, SimError> {
    Grid::filled(population, HealthState::Healthy)
}

impl Grid {
    /// A grid laid out for `population` cells, every one set to `state`.
    ///
    /// Returns [`SimError::InvalidArgument`] if `population` is 0.
    pub fn filled(population: usize, state: HealthState) -> Result<Self, SimError> {
        let l = layout(population)?;
        Ok(Self {
            cols: l.cols,
            cells: vec![state; l.cell_count()],
        })
    }

    /// Build a grid from explicit rows.
    ///
    /// Returns [`SimError::InvalidState`] if there are no rows, the first
    /// row is empty, a row other than the last differs in length from the
    /// first, or the last row is empty or longer than the first.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, SimError>
    where
        R: AsRef<[HealthState]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let Some(first) = rows.first() else {
            return Err(SimError::invalid_state("grid has no rows"));
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(SimError::invalid_state("grid has no columns"));
        }
        let last = rows.len() - 1;
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if i < last && row.len() != cols {
                return Err(SimError::invalid_state(format!(
                    "row {i} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            if i == last && !(1..=cols).contains(&row.len()) {
                return Err(SimError::invalid_state(format!(
                    "last row has {} cells, expected 1..={cols}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { cols, cells })
    }

    /// Number of rows, including a trailing partial row.
    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(self.cols)
    }

    /// Length of every full row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Alias of [`len`](Self::len).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the last row is shorter than `cols`.
    pub fn has_partial_row(&self) -> bool {
        self.cells.len() % self.cols != 0
    }

    /// Length of row `row`, or `None` past the last row.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.row(row).map(<[HealthState]>::len)
    }

    /// The cells of row `row`, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[HealthState]> {
        self.cells.chunks(self.cols).nth(row)
    }

    /// Iterate over rows in order. The last item may be shorter.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, HealthState> {
        self.cells.chunks(self.cols)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[HealthState] {
        &self.cells
    }

    /// Per-row lengths.
    pub fn shape(&self) -> Vec<usize> {
        self.iter_rows().map(<[HealthState]>::len).collect()
    }

    /// Whether `other` has the same row count and per-row lengths.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.cols == other.cols && self.cells.len() == other.cells.len()
    }

    /// Flat index of `(row, col)`, or `None` if the cell does not exist.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        let idx = row.checked_mul(self.cols)?.checked_add(col)?;
        (idx < self.cells.len()).then_some(idx)
    }

    /// State of the cell at `(row, col)`, or `None` if it does not exist.
    pub fn get(&self, row: usize, col: usize) -> Option<HealthState> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Copy of this grid with the cell at `(row, col)` replaced.
    ///
    /// Returns [`SimError::InvalidArgument`] if the cell does not exist.
    pub fn with_cell(&self, row: usize, col: usize, state: HealthState) -> Result<Grid, SimError> {
        let idx = self.checked_index(row, col)?;
        let mut next = self.clone();
        next.cells[idx] = state;
        Ok(next)
    }

    /// Allocate a new grid of identical shape by applying `f` to every
    /// cell in row-major order.
    ///
    /// `f` receives `(row, col, state)` for the current cell.
    pub fn map_cells<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(usize, usize, HealthState) -> HealthState,
    {
        let cols = self.cols;
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &s)| f(i / cols, i % cols, s))
            .collect();
        Grid { cols, cells }
    }

    pub(crate) fn checked_index(&self, row: usize, col: usize) -> Result<usize, SimError> {
        self.index(row, col).ok_or_else(|| {
            SimError::invalid_argument(
                "cell",
                format!(
                    "({row}, {col}) is outside a grid of {} rows x {} cols with {} cells",
                    self.rows(),
                    self.cols,
                    self.cells.len()
                ),
            )
        })
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows())
            .field("cols", &self.cols)
            .field("len", &self.cells.len())
            .finish()
    }
}

/// One line per row, one symbol per cell (`H`, `V`, `C`, `D`).
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for s in row {
                write!(f, "{s}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use HealthState::{Contaminated as C, Dead as D, Healthy as H, Vaccinated as V};

    #[test]
    fn build_four_is_single_row() {
        let g = build(4).unwrap();
        assert_eq!(g.rows(), 1);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.row(0).unwrap(), &[H, H, H, H]);
        assert!(!g.has_partial_row());
    }

    #[test]
    fn build_with_remainder_has_short_last_row() {
        let g = build(17).unwrap();
        assert_eq!(g.shape(), vec![5, 5, 5, 2]);
        assert!(g.has_partial_row());
        assert_eq!(g.row_len(3), Some(2));
        assert_eq!(g.row_len(4), None);
    }

    #[test]
    fn build_zero_is_rejected() {
        assert!(matches!(build(0), Err(SimError::InvalidArgument { .. })));
    }

    #[test]
    fn filled_uses_the_packing_layout() {
        let g = Grid::filled(17, D).unwrap();
        assert_eq!(g.shape(), vec![5, 5, 5, 2]);
        assert!(g.cells().iter().all(|&s| s == D));
    }

    #[test]
    fn filled_rejects_empty_population() {
        assert!(matches!(
            Grid::filled(0, H),
            Err(SimError::InvalidArgument {
                name: "population",
                ..
            })
        ));
    }

    #[test]
    fn get_respects_partial_row() {
        let g = build(17).unwrap();
        assert_eq!(g.get(3, 1), Some(H));
        assert_eq!(g.get(3, 2), None);
        assert_eq!(g.get(0, 5), None);
        assert_eq!(g.get(4, 0), None);
    }

    #[test]
    fn from_rows_accepts_ragged_tail() {
        let g = Grid::from_rows([vec![H, C, V], vec![D]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.len(), 4);
        assert_eq!(g.get(0, 1), Some(C));
        assert_eq!(g.get(1, 0), Some(D));
        assert_eq!(g.to_string(), "HCV\nD");
    }

    #[test]
    fn from_rows_rejects_malformed() {
        let empty: Vec<Vec<HealthState>> = vec![];
        assert!(matches!(
            Grid::from_rows(empty),
            Err(SimError::InvalidState { .. })
        ));
        assert!(matches!(
            Grid::from_rows([Vec::<HealthState>::new()]),
            Err(SimError::InvalidState { .. })
        ));
        // Short middle row.
        assert!(matches!(
            Grid::from_rows([vec![H, H], vec![H], vec![H]]),
            Err(SimError::InvalidState { .. })
        ));
        // Last row longer than cols.
        assert!(matches!(
            Grid::from_rows([vec![H, H], vec![H, H, H]]),
            Err(SimError::InvalidState { .. })
        ));
        // Empty last row.
        assert!(matches!(
            Grid::from_rows([vec![H, H], vec![]]),
            Err(SimError::InvalidState { .. })
        ));
    }

    #[test]
    fn with_cell_copies() {
        let g = build(4).unwrap();
        let g2 = g.with_cell(0, 2, C).unwrap();
        assert_eq!(g.get(0, 2), Some(H));
        assert_eq!(g2.get(0, 2), Some(C));
        assert!(matches!(
            g.with_cell(1, 0, C),
            Err(SimError::InvalidArgument { name: "cell", .. })
        ));
    }

    #[test]
    fn map_cells_visits_row_major() {
        let g = build(7).unwrap();
        let mut seen = Vec::new();
        let out = g.map_cells(|r, c, s| {
            seen.push((r, c));
            s
        });
        assert_eq!(
            seen,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0)]
        );
        assert_eq!(out, g);
    }

    #[test]
    fn debug_is_summary() {
        let g = build(17).unwrap();
        assert_eq!(format!("{g:?}"), "Grid { rows: 4, cols: 5, len: 17 }");
    }

    proptest! {
        #[test]
        fn build_matches_population(population in 1usize..20_000) {
            let g = build(population).unwrap();
            let l = layout(population).unwrap();
            prop_assert_eq!(g.len(), population);
            prop_assert_eq!(g.rows(), l.row_count());
            prop_assert_eq!(g.cols(), l.cols);
            prop_assert!(g.cells().iter().all(|&s| s == H));
        }

        #[test]
        fn from_rows_round_trips_built_grids(population in 1usize..2_000) {
            let g = build(population).unwrap();
            let rebuilt = Grid::from_rows(g.iter_rows()).unwrap();
            prop_assert_eq!(rebuilt, g);
        }
    }
}
