//! Rust PIMC - ground-state Path Integral Monte Carlo in one dimension
//!
//! Estimates the ground-state probability density, wavefunction magnitude
//! and an energy estimate for a particle in one of four model potentials.
//! A closed imaginary-time path is updated bead by bead with the Metropolis
//! rule, while a birth/death population-control pass runs after every move
//! and accepted positions are binned into a histogram.

pub mod error;
pub mod potential;
pub mod path;
pub mod params;
pub mod rng;
pub mod sampling;
pub mod io;
pub mod runner;


// Re-export commonly used types at crate root
pub use error::{PimcError, Result};
pub use potential::{Potential, PotentialModel};
pub use path::{BeadClass, RingPath};
pub use params::SimulationParams;
pub use rng::{seeded, ReplaySource, UniformSource};
pub use sampling::{BranchingResult, DistributionAccumulator, Observables, PimcSimulation, WalkerPopulation, BIN_WIDTH};
pub use io::{read_config, RunConfig};
pub use runner::{run_pimc, RunSummary};
