//! IO module - run configuration and result files.

mod config;
mod output;

pub use config::{read_config, RunConfig};
pub use output::{write_distribution, write_energy_trace, write_path, write_results};
