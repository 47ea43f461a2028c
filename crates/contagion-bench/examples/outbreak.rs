//! Headless outbreak run.
//!
//! Builds the reference simulation, advances it day by day until the
//! epidemic settles (or 365 days pass), and prints the census each day
//! followed by the final grid.
//!
//! Run with:
//!   RUST_LOG=contagion_engine=debug cargo run --example outbreak -- [seed]

use contagion_bench::reference_profile;
use contagion_engine::Simulation;
use tracing_subscriber::EnvFilter;

const MAX_DAYS: u64 = 365;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };

    let mut sim = Simulation::new(reference_profile(), seed)?;
    tracing::info!(seed, population = sim.grid().len(), "starting outbreak");

    println!("day {:>3}: {}", sim.day().0, sim.census());
    while !sim.is_settled() && sim.day().0 < MAX_DAYS {
        sim.step();
        println!("day {:>3}: {}", sim.day().0, sim.census());
    }

    println!();
    println!("{}", sim.grid());
    Ok(())
}
