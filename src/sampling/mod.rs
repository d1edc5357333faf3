//! Sampling module - path updates, population control and estimators.

mod histogram;
mod pimc;
mod population;

pub use histogram::{DistributionAccumulator, BIN_WIDTH};
pub use pimc::{Observables, PimcSimulation};
pub use population::{BranchingResult, WalkerPopulation};
