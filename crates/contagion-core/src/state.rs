//! Per-cell health state.

use std::fmt;

/// Health of one simulated individual.
///
/// `Vaccinated` and `Dead` are absorbing: once a cell reaches either, no
/// later step changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthState {
    /// Susceptible; may be infected by contaminated neighbours.
    #[default]
    Healthy,
    /// Immune, either seeded as vaccinated or recovered after infection.
    Vaccinated,
    /// Infected; may recover or die each day, and exposes its neighbours.
    Contaminated,
    /// Deceased.
    Dead,
}

impl HealthState {
    /// All states, in declaration order.
    pub const ALL: [HealthState; 4] = [
        HealthState::Healthy,
        HealthState::Vaccinated,
        HealthState::Contaminated,
        HealthState::Dead,
    ];

    /// Whether no transition ever leaves this state.
    pub fn is_absorbing(self) -> bool {
        matches!(self, Self::Vaccinated | Self::Dead)
    }

    /// One-letter symbol: `H`, `V`, `C`, or `D`.
    pub fn symbol(self) -> char {
        match self {
            Self::Healthy => 'H',
            Self::Vaccinated => 'V',
            Self::Contaminated => 'C',
            Self::Dead => 'D',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'H' => Some(Self::Healthy),
            'V' => Some(Self::Vaccinated),
            'C' => Some(Self::Contaminated),
            'D' => Some(Self::Dead),
            _ => None,
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
