//! Proptest strategies for grids and probabilities.

use contagion_core::HealthState;
use contagion_space::{layout, Grid};
use proptest::prelude::*;

/// Any single health state.
pub fn arb_state() -> impl Strategy<Value = HealthState> {
    prop_oneof![
        Just(HealthState::Healthy),
        Just(HealthState::Vaccinated),
        Just(HealthState::Contaminated),
        Just(HealthState::Dead),
    ]
}

/// A grid laid out for a population in `1..max_population`, with every
/// cell drawn independently from [`arb_state`].
pub fn arb_grid(max_population: usize) -> impl Strategy<Value = Grid> {
    (1..max_population).prop_flat_map(|population| {
        prop::collection::vec(arb_state(), population).prop_map(move |cells| {
            let l = layout(population).expect("population is at least 1");
            let rows: Vec<Vec<HealthState>> =
                cells.chunks(l.cols).map(<[HealthState]>::to_vec).collect();
            Grid::from_rows(rows).expect("chunks of a layout form a valid grid")
        })
    })
}

/// A probability in `[0, 1]`, biased towards the deterministic endpoints.
pub fn arb_probability() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), 0.0f64..=1.0]
}
