//! Strongly-typed counters.

use std::fmt;

/// Simulated day counter.
///
/// Zero after a simulation is created or reset, incremented by one on
/// every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(pub u64);

impl Day {
    /// The following day.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Day {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(Day(0).next(), Day(1));
        assert_eq!(Day::default().next().next(), Day(2));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Day(17).to_string(), "17");
    }
}
