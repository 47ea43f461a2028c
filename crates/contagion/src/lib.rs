//! Contagion: a probabilistic cellular-automaton epidemic simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Contagion sub-crates. For most users, adding `contagion` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! Driving a whole simulation:
//!
//! ```rust
//! use contagion::prelude::*;
//!
//! let mut sim = Simulation::new(SimConfig::default(), 42).unwrap();
//! while !sim.is_settled() && sim.day().0 < 100 {
//!     sim.step();
//! }
//! assert_eq!(sim.census().total(), 1000);
//! ```
//!
//! Using the free functions with your own RNG:
//!
//! ```rust
//! use contagion::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let ratios = SeedRatios::new(0.1, 0.5).unwrap();
//! let probs = TransitionProbs::new(0.3, 0.1, 0.05).unwrap();
//!
//! let day0 = seed(&build(500).unwrap(), &ratios, &mut rng);
//! let day1 = step(&day0, &probs, &mut rng);
//! assert!(day1.same_shape(&day0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `contagion-core` | `HealthState`, `Probability`, `Day`, `SimError` |
//! | [`space`] | `contagion-space` | `Layout`, `Grid`, Moore neighbourhood |
//! | [`engine`] | `contagion-engine` | seeding, stepping, config, census, driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`contagion-core`).
pub use contagion_core as types;

/// Grid layout and neighbourhood lookup (`contagion-space`).
pub use contagion_space as space;

/// Seeding, day stepping, configuration, and the simulation driver
/// (`contagion-engine`).
pub use contagion_engine as engine;

/// Common imports for typical Contagion usage.
///
/// ```rust
/// use contagion::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use contagion_core::{Day, HealthState, Probability, SimError};

    // Space
    pub use contagion_space::{build, layout, Grid, Layout};

    // Engine
    pub use contagion_engine::{
        seed, step, Census, SeedRatios, SimConfig, Simulation, TransitionProbs,
    };
}
