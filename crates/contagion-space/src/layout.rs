//! Near-square packing of a population count.

use contagion_core::SimError;

/// How a population is packed into rows.
///
/// `rows` full rows of `cols` cells, followed by one partial row of
/// `remainder` cells when `remainder > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Number of full rows.
    pub rows: usize,
    /// Length of every full row.
    pub cols: usize,
    /// Length of the trailing partial row; 0 if there is none.
    pub remainder: usize,
}

impl Layout {
    /// Number of rows including the partial one.
    pub fn row_count(&self) -> usize {
        self.rows + usize::from(self.remainder > 0)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols + self.remainder
    }
}

/// Compute the packing for `population` individuals.
///
/// `rows = ceil(sqrt(population) / 2)`, `cols = floor(population / rows)`,
/// and the remainder goes to a trailing partial row. The result is wider
/// than it is tall, roughly 4:1.
///
/// Returns [`SimError::InvalidArgument`] if `population` is 0.
pub fn layout(population: usize) -> Result<Layout, SimError> {
    if population == 0 {
        return Err(SimError::invalid_argument(
            "population",
            "must be at least 1, got 0",
        ));
    }
    let rows = ((population as f64).sqrt() / 2.0).ceil().max(1.0) as usize;
    let cols = population / rows;
    Ok(Layout {
        rows,
        cols,
        remainder: population - rows * cols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn four_is_one_row() {
        assert_eq!(
            layout(4).unwrap(),
            Layout {
                rows: 1,
                cols: 4,
                remainder: 0
            }
        );
    }

    #[test]
    fn single_individual() {
        let l = layout(1).unwrap();
        assert_eq!((l.rows, l.cols, l.remainder), (1, 1, 0));
        assert_eq!(l.row_count(), 1);
    }

    #[test]
    fn remainder_adds_a_row() {
        // ceil(sqrt(17)/2) = 3, floor(17/3) = 5, 17 - 15 = 2
        let l = layout(17).unwrap();
        assert_eq!((l.rows, l.cols, l.remainder), (3, 5, 2));
        assert_eq!(l.row_count(), 4);
        assert_eq!(l.cell_count(), 17);
    }

    #[test]
    fn default_population() {
        // ceil(sqrt(1000)/2) = ceil(15.81) = 16, floor(1000/16) = 62, 1000 - 992 = 8
        let l = layout(1000).unwrap();
        assert_eq!((l.rows, l.cols, l.remainder), (16, 62, 8));
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            layout(0),
            Err(SimError::InvalidArgument {
                name: "population",
                ..
            })
        ));
    }

    proptest! {
        #[test]
        fn packing_is_exact(population in 1usize..200_000) {
            let l = layout(population).unwrap();
            prop_assert!(l.rows >= 1);
            prop_assert!(l.cols >= 1);
            prop_assert!(l.remainder < l.cols);
            prop_assert_eq!(l.rows * l.cols + l.remainder, population);
            prop_assert_eq!(l.cell_count(), population);
        }
    }
}
