//! One simulated day.
//!
//! Transition rules, applied to every cell of the previous day's grid:
//!
//! - **Healthy**: with `c` contaminated Moore neighbours, becomes
//!   contaminated with probability `1 - (1 - contamination)^c`.
//! - **Contaminated**: draws for remission, then independently for death;
//!   a successful death draw overrides a successful remission.
//! - **Vaccinated**, **Dead**: unchanged, no draw.
//!
//! Every cell reads only the previous grid, so the update is synchronous.

use crate::config::TransitionProbs;
use contagion_core::HealthState;
use contagion_space::Grid;
use rand::Rng;

/// Advance `grid` by one day and return the new grid.
///
/// The input is left untouched; the output has the same shape. Cells are
/// visited row-major and consume random draws in that order, so a seeded
/// `rng` makes the result reproducible.
pub fn step<R: Rng + ?Sized>(grid: &Grid, probs: &TransitionProbs, rng: &mut R) -> Grid {
    let mut infected = 0usize;
    let mut recovered = 0usize;
    let mut died = 0usize;

    let next = grid.map_cells(|row, col, state| match state {
        HealthState::Healthy => {
            let exposures = grid.count_neighbours_unchecked(row, col, HealthState::Contaminated);
            let p_infect = probs.contamination.at_least_once(exposures);
            if rng.random::<f64>() < p_infect {
                infected += 1;
                HealthState::Contaminated
            } else {
                HealthState::Healthy
            }
        }
        HealthState::Contaminated => {
            let mut outcome = if probs.remission.hit(rng.random()) {
                HealthState::Vaccinated
            } else {
                HealthState::Contaminated
            };
            if probs.death.hit(rng.random()) {
                outcome = HealthState::Dead;
            }
            match outcome {
                HealthState::Vaccinated => recovered += 1,
                HealthState::Dead => died += 1,
                _ => {}
            }
            outcome
        }
        HealthState::Vaccinated | HealthState::Dead => state,
    });

    tracing::trace!(infected, recovered, died, "stepped grid");
    next
}
