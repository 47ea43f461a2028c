//! Population grid for the Contagion simulator.
//!
//! A population of `n` individuals is packed into a near-square
//! [`Layout`]: `rows` full rows of `cols` cells, plus one shorter trailing
//! row holding the remainder. [`Grid`] stores such a layout of
//! [`HealthState`](contagion_core::HealthState) values and answers
//! Moore-neighbourhood queries with edges clipped (no wraparound).
//!
//! ```
//! use contagion_space::{build, layout};
//!
//! let l = layout(10).unwrap();
//! assert_eq!((l.rows, l.cols, l.remainder), (2, 5, 0));
//!
//! let grid = build(7).unwrap();
//! assert_eq!(grid.len(), 7);
//! assert_eq!(grid.shape(), vec![3, 3, 1]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod layout;
pub mod moore;

pub use grid::{build, Grid};
pub use layout::{layout, Layout};
pub use moore::Neighbours;
