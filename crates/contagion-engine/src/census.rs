//! Per-state population counts.

use contagion_core::HealthState;
use contagion_space::Grid;
use std::fmt;

/// Number of cells in each [`HealthState`] for one grid snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Census {
    counts: [usize; 4],
}

impl Census {
    /// Count the cells of `grid`.
    pub fn of(grid: &Grid) -> Self {
        let mut counts = [0usize; 4];
        for &s in grid.cells() {
            counts[s as usize] += 1;
        }
        Self { counts }
    }

    /// Cells in `state`.
    pub fn get(&self, state: HealthState) -> usize {
        self.counts[state as usize]
    }

    /// Healthy cells.
    pub fn healthy(&self) -> usize {
        self.get(HealthState::Healthy)
    }

    /// Vaccinated (seeded or recovered) cells.
    pub fn vaccinated(&self) -> usize {
        self.get(HealthState::Vaccinated)
    }

    /// Contaminated cells.
    pub fn contaminated(&self) -> usize {
        self.get(HealthState::Contaminated)
    }

    /// Dead cells.
    pub fn dead(&self) -> usize {
        self.get(HealthState::Dead)
    }

    /// Total number of cells.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Whether no contaminated cell remains.
    ///
    /// A settled grid is a fixed point: healthy cells have nobody to
    /// catch the disease from and every other cell is absorbing.
    pub fn is_settled(&self) -> bool {
        self.contaminated() == 0
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H={} V={} C={} D={}",
            self.healthy(),
            self.vaccinated(),
            self.contaminated(),
            self.dead()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contagion_test_utils::grid;

    #[test]
    fn counts_each_state() {
        let c = Census::of(&grid("HHVC\nDCH"));
        assert_eq!(c.healthy(), 3);
        assert_eq!(c.vaccinated(), 1);
        assert_eq!(c.contaminated(), 2);
        assert_eq!(c.dead(), 1);
        assert_eq!(c.total(), 7);
        assert!(!c.is_settled());
    }

    #[test]
    fn settled_without_contamination() {
        let c = Census::of(&grid("HVD\nH"));
        assert!(c.is_settled());
    }

    #[test]
    fn display() {
        let c = Census::of(&grid("HHVC\nDCH"));
        assert_eq!(c.to_string(), "H=3 V=1 C=2 D=1");
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Census::default().total(), 0);
    }
}
