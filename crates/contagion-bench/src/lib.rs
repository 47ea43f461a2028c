//! Benchmark profiles and utilities for the Contagion simulator.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_profile`]: the default 1000-person outbreak
//! - [`stress_profile`]: 100K people, slow transmission, long-lived
//! - [`warm_simulation`]: a simulation already advanced into its epidemic
//!   phase, so benchmarks measure a busy grid rather than day 0

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use contagion_core::SimError;
use contagion_engine::{SimConfig, Simulation};

/// The default configuration: 1000 people, 5% initially contaminated,
/// 70% of the rest vaccinated, highly contagious, 10% daily mortality.
pub fn reference_profile() -> SimConfig {
    SimConfig::default()
}

/// 100K people with no vaccination and slow transmission, so the
/// epidemic stays active for many days.
pub fn stress_profile() -> SimConfig {
    SimConfig {
        population: 100_000,
        contaminated_ratio: 0.01,
        vaxxed_ratio: 0.0,
        contamination_prob: 0.15,
        remission_prob: 0.05,
        death_prob: 0.01,
    }
}

/// Build a simulation from `config` and advance it `days` days.
pub fn warm_simulation(config: SimConfig, seed: u64, days: u64) -> Result<Simulation, SimError> {
    let mut sim = Simulation::new(config, seed)?;
    sim.run(days);
    Ok(sim)
}
