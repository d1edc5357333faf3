// Run configuration read from YAML, e.g.
//
// simulation:
//   n_segments: 200
//   tau: 10.0
//   delta: 1.0
//   potential: double_well   # or its id, 3
// sweeps: 5000
// seed: 42
// steps_per_report: 100
// output_dir: out

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::SimulationParams;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub simulation: SimulationParams,
    /// Number of sweeps to run
    pub sweeps: u64,
    /// Seed for a reproducible run; a random seed is drawn when absent
    pub seed: Option<u64>,
    /// Log progress every this many sweeps
    pub steps_per_report: u64,
    /// Directory for CSV output; nothing is written when absent
    pub output_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationParams::default(),
            sweeps: 1000,
            seed: None,
            steps_per_report: 100,
            output_dir: None,
        }
    }
}

/// Read and validate a run configuration in YAML format.
pub fn read_config<P: AsRef<Path>>(filename: P) -> Result<RunConfig> {
    let file = std::fs::File::open(filename)?;
    let reader = std::io::BufReader::new(file);
    let config: RunConfig = serde_yaml::from_reader(reader)?;
    config.simulation.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::Potential;

    #[test]
    fn test_parse_named_potential() {
        let yaml = "
simulation:
  n_segments: 120
  tau: 8.0
  delta: 0.5
  potential: double_well
sweeps: 300
seed: 42
output_dir: out
";
        let config: RunConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.simulation.n_segments, 120);
        assert_eq!(config.simulation.potential, Potential::DoubleWell);
        assert_eq!(config.sweeps, 300);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.steps_per_report, 100);
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_numeric_potential_and_defaults() {
        let yaml = "
simulation:
  potential: 2
";
        let config: RunConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.simulation.potential, Potential::Morse);
        assert_eq!(config.simulation.n_segments, 200);
        assert_eq!(config.simulation.tau, 10.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_reject_unsupported_potential() {
        let yaml = "
simulation:
  potential: 9
";
        assert!(serde_yaml::from_str::<RunConfig>(yaml).is_err());
    }

    #[test]
    fn test_read_config_validates() {
        let path = std::env::temp_dir().join(format!("rust_pimc_config_{}.yml", std::process::id()));
        std::fs::write(&path, "simulation:\n  n_segments: 0\n").unwrap();
        assert!(read_config(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }
}
