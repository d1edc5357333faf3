//! Histogram estimators for the ground-state density, wavefunction and energy.

use std::f64::consts::PI;

use crate::path::RingPath;
use crate::potential::PotentialModel;

/// Bin width Δx
pub const BIN_WIDTH: f64 = 0.1;

/// Scale applied with N·mcs when normalising raw counts.
const NORMALIZATION_SCALE: f64 = 0.10;

#[derive(Clone, Debug, PartialEq)]
pub struct DistributionAccumulator {
    /// Lower edge of bin 0: -Δx·(N+1)/2
    xmin: f64,
    /// Bin centres xv[0..=N]
    centers: Vec<f64>,
    /// Raw visit counts
    counts: Vec<u64>,
    /// Normalised density
    density: Vec<f64>,
    /// Wavefunction magnitude estimate Ψ0
    psi0: Vec<f64>,
    /// Latest energy estimate E0
    energy: f64,
}

impl DistributionAccumulator {
    pub fn new(n_segments: usize) -> Self {
        let n_bins = n_segments + 1;
        let xmin = -BIN_WIDTH * n_bins as f64 / 2.0;
        let mut centers = Vec::with_capacity(n_bins);
        let mut edge = xmin;
        for _ in 0..n_bins {
            centers.push(edge);
            edge += BIN_WIDTH;
        }
        Self {
            xmin,
            centers,
            counts: vec![0; n_bins],
            density: vec![0.0; n_bins],
            psi0: vec![0.0; n_bins],
            energy: 0.0,
        }
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn density(&self) -> &[f64] {
        &self.density
    }

    pub fn wavefunction(&self) -> &[f64] {
        &self.psi0
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn total_counts(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Bin holding `x`, if it lies inside the histogram.
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        let bin = ((x - self.xmin) / BIN_WIDTH).floor();
        if bin >= 0.0 && bin < self.counts.len() as f64 {
            Some(bin as usize)
        } else {
            None
        }
    }

    /// Record one visit to `x` during sweep `sweep` (> 0) and refresh the
    /// estimates of that bin. The energy estimate reads the path bead whose
    /// index equals the bin.
    ///
    /// Returns the bin that was updated; positions outside the histogram
    /// are dropped.
    pub fn accumulate<P: PotentialModel>(
        &mut self,
        x: f64,
        sweep: u64,
        path: &RingPath,
        potential: &P,
    ) -> Option<usize> {
        if sweep == 0 {
            return None;
        }
        let bin = self.bin_index(x)?;
        let norm = path.n_segments() as f64 * sweep as f64 * NORMALIZATION_SCALE;

        self.counts[bin] += 1;
        self.density[bin] = self.counts[bin] as f64 / norm;
        self.psi0[bin] = (self.density[bin] / (BIN_WIDTH * 2.0 * PI)).sqrt();

        let x_bin = path.bead(bin);
        self.energy = self.density[bin] * potential.virial(x_bin) * potential.value(x_bin);
        Some(bin)
    }

    /// Zero counts and estimates; bin centres are kept.
    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.density.iter_mut().for_each(|d| *d = 0.0);
        self.psi0.iter_mut().for_each(|p| *p = 0.0);
        self.energy = 0.0;
    }
}
