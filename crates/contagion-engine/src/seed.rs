//! Random seeding of the initial population.
//!
//! Each cell gets two prioritised Bernoulli trials: contamination first,
//! then vaccination for cells that were not contaminated. The achieved
//! vaccination rate is therefore `(1 - contaminated) * vaxxed` of the
//! population, not `vaxxed`.

use crate::config::SeedRatios;
use contagion_core::{HealthState, SimError};
use contagion_space::{build, Grid};
use rand::Rng;

/// Seed `grid` with contaminated and vaccinated cells.
///
/// For every cell in row-major order: draw once and contaminate the cell
/// if the draw is below `ratios.contaminated`; otherwise draw again and
/// vaccinate it if that draw is below `ratios.vaxxed`; otherwise keep its
/// current state. Returns a new grid of identical shape.
pub fn seed<R: Rng + ?Sized>(grid: &Grid, ratios: &SeedRatios, rng: &mut R) -> Grid {
    grid.map_cells(|_, _, state| {
        if ratios.contaminated.hit(rng.random()) {
            HealthState::Contaminated
        } else if ratios.vaxxed.hit(rng.random()) {
            HealthState::Vaccinated
        } else {
            state
        }
    })
}

/// Build an all-healthy grid for `population` and seed it.
///
/// Returns [`SimError::InvalidArgument`] if `population` is 0.
pub fn seed_population<R: Rng + ?Sized>(
    population: usize,
    ratios: &SeedRatios,
    rng: &mut R,
) -> Result<Grid, SimError> {
    let grid = build(population)?;
    Ok(seed(&grid, ratios, rng))
}
