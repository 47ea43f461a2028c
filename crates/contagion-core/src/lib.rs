//! Core types for the Contagion epidemic simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! per-cell [`HealthState`], the validated [`Probability`] newtype, the
//! [`Day`] counter, and the [`SimError`] type shared by every other crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod probability;
pub mod state;

pub use error::SimError;
pub use id::Day;
pub use probability::Probability;
pub use state::HealthState;
