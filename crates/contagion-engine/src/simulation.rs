//! Caller-owned simulation driver.
//!
//! [`Simulation`] bundles everything needed to advance an epidemic day by
//! day: the validated configuration, the current grid, the day counter,
//! and a ChaCha8 RNG seeded from a caller-chosen `u64`. It holds no
//! timers; the caller decides when to call [`step()`](Simulation::step)
//! and simply stops calling it to pause.
//!
//! # Determinism
//!
//! Two simulations created from the same configuration and seed produce
//! identical grids on every day. [`reset()`](Simulation::reset) with the
//! same seed reproduces the day-0 grid exactly.

use crate::census::Census;
use crate::config::{SeedRatios, SimConfig, TransitionProbs};
use crate::seed::seed;
use crate::step::step;
use contagion_core::{Day, HealthState, SimError};
use contagion_space::Grid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Compile-time assertion: a Simulation can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// A running epidemic simulation.
///
/// # Example
///
/// ```
/// use contagion_engine::{SimConfig, Simulation};
///
/// let mut sim = Simulation::new(SimConfig::default(), 7).unwrap();
/// assert_eq!(sim.grid().len(), 1000);
/// for _ in 0..10 {
///     sim.step();
/// }
/// assert_eq!(sim.day().0, 10);
/// assert_eq!(sim.census().total(), 1000);
/// ```
pub struct Simulation {
    config: SimConfig,
    blank: Grid,
    ratios: SeedRatios,
    probs: TransitionProbs,
    grid: Grid,
    day: Day,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Validate `config` and seed the day-0 grid from `seed`.
    ///
    /// Returns [`SimError::InvalidArgument`] before allocating anything if
    /// any option is out of range.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        let (ratios, probs) = config.validate()?;
        let blank = Grid::filled(config.population, HealthState::Healthy)?;
        let (grid, rng) = generate(&blank, &ratios, seed);
        tracing::debug!(
            population = config.population,
            rows = grid.rows(),
            cols = grid.cols(),
            seed,
            "created simulation"
        );
        Ok(Self {
            config,
            blank,
            ratios,
            probs,
            grid,
            day: Day::default(),
            seed,
            rng,
        })
    }

    /// Advance one day and return the new grid.
    pub fn step(&mut self) -> &Grid {
        let was_settled = self.is_settled();
        self.grid = step(&self.grid, &self.probs, &mut self.rng);
        self.day = self.day.next();

        let census = Census::of(&self.grid);
        tracing::trace!(
            day = self.day.0,
            healthy = census.healthy(),
            vaccinated = census.vaccinated(),
            contaminated = census.contaminated(),
            dead = census.dead(),
            "day complete"
        );
        if !was_settled && census.is_settled() {
            tracing::debug!(day = self.day.0, %census, "epidemic settled");
        }
        &self.grid
    }

    /// Advance up to `days` days, stopping early once the epidemic has
    /// settled (further steps could not change the grid).
    pub fn run(&mut self, days: u64) -> &Grid {
        for _ in 0..days {
            if self.is_settled() {
                break;
            }
            self.step();
        }
        &self.grid
    }

    /// Discard the current grid, reseed from `seed`, and go back to day 0.
    pub fn reset(&mut self, seed: u64) -> &Grid {
        let (grid, rng) = generate(&self.blank, &self.ratios, seed);
        self.grid = grid;
        self.rng = rng;
        self.seed = seed;
        self.day = Day::default();
        tracing::debug!(seed, population = self.config.population, "reset simulation");
        &self.grid
    }

    /// Replace the configuration and regenerate the grid with the current
    /// seed.
    ///
    /// On error the simulation is left exactly as it was.
    pub fn reconfigure(&mut self, config: SimConfig) -> Result<&Grid, SimError> {
        let (ratios, probs) = config.validate()?;
        let blank = Grid::filled(config.population, HealthState::Healthy)?;
        tracing::debug!(?config, "reconfigured simulation");
        self.config = config;
        self.blank = blank;
        self.ratios = ratios;
        self.probs = probs;
        Ok(self.reset(self.seed))
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Days simulated since creation or the last reset.
    pub fn day(&self) -> Day {
        self.day
    }

    /// Seed used for the current run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The accepted configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Validated per-day transition probabilities.
    pub fn transition_probs(&self) -> &TransitionProbs {
        &self.probs
    }

    /// Per-state counts of the current grid.
    pub fn census(&self) -> Census {
        Census::of(&self.grid)
    }

    /// Whether no contaminated cell remains.
    ///
    /// Same answer as [`Census::is_settled`], but stops at the first
    /// contaminated cell instead of counting the whole grid.
    pub fn is_settled(&self) -> bool {
        !self
            .grid
            .cells()
            .contains(&HealthState::Contaminated)
    }
}

/// Day-0 grid and the RNG positioned right after seeding it.
fn generate(blank: &Grid, ratios: &SeedRatios, seed_value: u64) -> (Grid, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_value);
    let grid = seed(blank, ratios, &mut rng);
    (grid, rng)
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("day", &self.day)
            .field("seed", &self.seed)
            .field("grid", &self.grid)
            .finish()
    }
}
