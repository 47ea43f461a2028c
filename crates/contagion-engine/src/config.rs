//! Simulation configuration and validation.
//!
//! [`SimConfig`] is the plain caller-facing record. [`validate()`](SimConfig::validate)
//! checks every option at the boundary and splits it into the two
//! validated pieces the engine consumes: [`SeedRatios`] for the initial
//! grid and [`TransitionProbs`] for each day.

use contagion_core::{Probability, SimError};

// ── SeedRatios ─────────────────────────────────────────────────────

/// Per-cell probabilities used once, when seeding the initial grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeedRatios {
    /// Probability that a cell starts `Contaminated`.
    pub contaminated: Probability,
    /// Probability that a cell not seeded as contaminated starts
    /// `Vaccinated`.
    pub vaxxed: Probability,
}

impl SeedRatios {
    /// Validate raw ratios.
    pub fn new(contaminated: f64, vaxxed: f64) -> Result<Self, SimError> {
        Ok(Self {
            contaminated: Probability::new("contaminated_ratio", contaminated)?,
            vaxxed: Probability::new("vaxxed_ratio", vaxxed)?,
        })
    }
}

// ── TransitionProbs ────────────────────────────────────────────────

/// Per-day transition probabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionProbs {
    /// Chance that one contaminated neighbour infects a healthy cell.
    pub contamination: Probability,
    /// Chance that a contaminated cell recovers (becomes `Vaccinated`).
    pub remission: Probability,
    /// Chance that a contaminated cell dies. Overrides remission.
    pub death: Probability,
}

impl TransitionProbs {
    /// Validate raw probabilities.
    pub fn new(contamination: f64, remission: f64, death: f64) -> Result<Self, SimError> {
        Ok(Self {
            contamination: Probability::new("contamination_prob", contamination)?,
            remission: Probability::new("remission_prob", remission)?,
            death: Probability::new("death_prob", death)?,
        })
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete caller-supplied configuration for a simulation.
///
/// Fields are raw values as collected from a user interface; nothing is
/// trusted until [`validate()`](Self::validate) succeeds.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Total number of individuals. Must be at least 1.
    pub population: usize,
    /// Initial contamination probability per cell. Default: 0.05.
    pub contaminated_ratio: f64,
    /// Initial vaccination probability per non-contaminated cell. Default: 0.7.
    pub vaxxed_ratio: f64,
    /// Per-neighbour daily transmission probability. Default: 0.95.
    pub contamination_prob: f64,
    /// Daily recovery probability of a contaminated cell. Default: 0.0.
    pub remission_prob: f64,
    /// Daily death probability of a contaminated cell. Default: 0.1.
    pub death_prob: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population: 1000,
            contaminated_ratio: 0.05,
            vaxxed_ratio: 0.7,
            contamination_prob: 0.95,
            remission_prob: 0.0,
            death_prob: 0.1,
        }
    }
}

impl SimConfig {
    /// Check every option and return the validated seeding ratios and
    /// transition probabilities.
    ///
    /// Options are checked in declaration order; the first failure is
    /// returned as [`SimError::InvalidArgument`].
    pub fn validate(&self) -> Result<(SeedRatios, TransitionProbs), SimError> {
        if self.population == 0 {
            return Err(SimError::invalid_argument(
                "population",
                "must be at least 1, got 0",
            ));
        }
        let ratios = SeedRatios::new(self.contaminated_ratio, self.vaxxed_ratio)?;
        let probs =
            TransitionProbs::new(self.contamination_prob, self.remission_prob, self.death_prob)?;
        Ok((ratios, probs))
    }

    /// Validated seeding ratios only.
    pub fn seed_ratios(&self) -> Result<SeedRatios, SimError> {
        self.validate().map(|(ratios, _)| ratios)
    }

    /// Validated transition probabilities only.
    pub fn transition_probs(&self) -> Result<TransitionProbs, SimError> {
        self.validate().map(|(_, probs)| probs)
    }
}
