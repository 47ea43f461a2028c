//! Epidemic dynamics for the Contagion simulator.
//!
//! - [`seed()`](seed::seed): random initial contamination and vaccination
//! - [`step()`](step::step): one simulated day over the whole grid
//! - [`SimConfig`]: caller-facing options, validated into
//!   [`SeedRatios`] and [`TransitionProbs`]
//! - [`Census`]: per-state counts of a snapshot
//! - [`Simulation`]: caller-owned driver bundling config, grid, day
//!   counter, and a seeded RNG
//!
//! The free functions take any [`rand::Rng`], so callers can inject a
//! seeded generator for reproducible runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod census;
pub mod config;
pub mod seed;
pub mod simulation;
pub mod step;

pub use census::Census;
pub use config::{SeedRatios, SimConfig, TransitionProbs};
pub use seed::{seed, seed_population};
pub use simulation::Simulation;
pub use step::step;
