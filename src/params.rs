//! Run parameters for a PIMC simulation.

use serde::{Deserialize, Serialize};

use crate::error::{PimcError, Result};
use crate::potential::Potential;

/// Parameters fixed for the duration of a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Number of path segments N (the ring holds N+1 beads)
    pub n_segments: usize,
    /// Total imaginary time τ (units of ω⁻¹)
    pub tau: f64,
    /// Maximum trial displacement δ of a bead
    pub delta: f64,
    /// Potential the particle moves in
    pub potential: Potential,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            n_segments: 200,
            tau: 10.0,
            delta: 1.0,
            potential: Potential::Harmonic,
        }
    }
}

impl SimulationParams {
    pub fn new(n_segments: usize, tau: f64, delta: f64, potential: Potential) -> Self {
        Self { n_segments, tau, delta, potential }
    }

    /// Imaginary time slice Δτ = τ/N
    pub fn dtau(&self) -> f64 {
        self.tau / self.n_segments as f64
    }

    /// Desired walker population M0 = N/5
    pub fn walker_target(&self) -> usize {
        self.n_segments / 5
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_segments == 0 {
            return Err(PimcError::InvalidSegments(self.n_segments));
        }
        if !self.tau.is_finite() || self.tau <= 0.0 {
            return Err(PimcError::InvalidParameter { name: "tau", value: self.tau });
        }
        if !self.delta.is_finite() || self.delta < 0.0 {
            return Err(PimcError::InvalidParameter { name: "delta", value: self.delta });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_matches_reference_run() {
        let params = SimulationParams::default();
        assert_eq!(params.n_segments, 200);
        assert_eq!(params.walker_target(), 40);
        assert_relative_eq!(params.dtau(), 0.05, epsilon = 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = SimulationParams::default();
        assert!(matches!(
            SimulationParams { n_segments: 0, ..base }.validate(),
            Err(PimcError::InvalidSegments(0))
        ));
        assert!(SimulationParams { tau: 0.0, ..base }.validate().is_err());
        assert!(SimulationParams { tau: f64::NAN, ..base }.validate().is_err());
        assert!(SimulationParams { delta: -1.0, ..base }.validate().is_err());
        assert!(SimulationParams { n_segments: 1, ..base }.validate().is_ok());
    }
}
