//! Path Integral Monte Carlo for a single particle in a 1D potential
//!
//! The particle's imaginary-time worldline is a closed ring of N beads
//! (x[N] = x[0]). Each sweep makes N+1 single-bead Metropolis moves using
//! the local primitive action, runs one population-control pass per move,
//! and, after the first (warm-up) sweep, bins the moved bead into the
//! ground-state histogram.
//!
//! Reference: Ceperley, D.M. (1995) "Path integrals in the theory of condensed helium"
//! Rev. Mod. Phys. 67, 279

use log::{debug, trace};
use serde::Serialize;

use super::histogram::{DistributionAccumulator, BIN_WIDTH};
use super::population::WalkerPopulation;
use crate::error::Result;
use crate::params::SimulationParams;
use crate::path::RingPath;
use crate::potential::PotentialModel;
use crate::rng::UniformSource;

/// Scalar observables after a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Observables {
    pub sweep: u64,
    pub energy: f64,
    pub walkers: usize,
    pub reference_potential: f64,
    pub acceptance_rate: f64,
}

/// All state of one PIMC run.
#[derive(Clone, Debug)]
pub struct PimcSimulation {
    params: SimulationParams,
    /// Imaginary time step Δτ = τ/N
    dtau: f64,
    path: RingPath,
    population: WalkerPopulation,
    histogram: DistributionAccumulator,
    /// Completed sweeps (mcs)
    sweeps: u64,
    /// Acceptance tracking since initialisation or the last reset
    proposals: u64,
    accepted: u64,
}

impl PimcSimulation {
    /// Allocate and seed a new run.
    pub fn new<R: UniformSource>(params: SimulationParams, rng: &mut R) -> Result<Self> {
        params.validate()?;
        let n = params.n_segments;
        let path = RingPath::seeded(n, &params.potential, rng);
        let population = WalkerPopulation::new(params.walker_target(), path.len(), BIN_WIDTH * BIN_WIDTH);
        debug!(
            "initialised PIMC run: N = {}, tau = {}, delta = {}, potential = {}, walkers = {}",
            n,
            params.tau,
            params.delta,
            params.potential,
            population.count()
        );
        Ok(Self {
            params,
            dtau: params.dtau(),
            path,
            population,
            histogram: DistributionAccumulator::new(n),
            sweeps: 0,
            proposals: 0,
            accepted: 0,
        })
    }

    /// Replace this run with a freshly initialised one.
    pub fn reinitialize<R: UniformSource>(&mut self, params: SimulationParams, rng: &mut R) -> Result<()> {
        *self = Self::new(params, rng)?;
        Ok(())
    }

    /// Local action change for moving bead `j` to `xt`:
    ///
    /// ΔE = ½[((hi-xt)/Δτ)² + ((xt-lo)/Δτ)² + V(xt) - ((hi-xj)/Δτ)² - ((xj-lo)/Δτ)² - V(xj)]
    pub fn action_change(&self, j: usize, xt: f64) -> f64 {
        let (hi, lo) = self.path.neighbors(j);
        let xj = self.path.bead(j);
        let potential = &self.params.potential;
        0.5 * (((hi - xt) / self.dtau).powi(2) + ((xt - lo) / self.dtau).powi(2) + potential.trial_value(xt)
            - ((hi - xj) / self.dtau).powi(2)
            - ((xj - lo) / self.dtau).powi(2)
            - potential.value(xj))
    }

    /// One Metropolis move; returns the bead index that was tried.
    fn metropolis_move<R: UniformSource>(&mut self, rng: &mut R) -> usize {
        let n = self.params.n_segments;
        let j = ((rng.next_uniform() * n as f64).floor() as usize).min(n - 1);
        let xt = self.path.bead(j) + self.params.delta * (2.0 * rng.next_uniform() - 1.0);

        let class = self.path.classify(j);
        let delta_e = self.action_change(j, xt);
        self.path.synchronize(class);

        let p = (-self.dtau * delta_e).exp();
        let r = rng.next_uniform();
        self.proposals += 1;
        if delta_e < 0.0 || r <= p {
            self.path.set(j, xt);
            self.accepted += 1;
        }
        j
    }

    /// One full sweep of N+1 moves; the sweep counter advances afterwards.
    pub fn step<R: UniformSource>(&mut self, rng: &mut R) {
        for _ in 0..=self.params.n_segments {
            let j = self.metropolis_move(rng);
            self.population.branch(&self.path, &self.params.potential, rng);
            if self.sweeps > 0 {
                let x = self.path.bead(j);
                self.histogram.accumulate(x, self.sweeps, &self.path, &self.params.potential);
            }
        }
        self.sweeps += 1;
        trace!(
            "sweep {}: E0 = {:.6}, M = {}, acceptance = {:.3}",
            self.sweeps,
            self.histogram.energy(),
            self.population.count(),
            self.acceptance_rate()
        );
    }

    /// Zero the path, histogram and sweep counter. Parameters and the
    /// walker population are kept.
    pub fn reset_data(&mut self) {
        self.path.zero();
        self.histogram.reset();
        self.sweeps = 0;
        self.proposals = 0;
        self.accepted = 0;
        debug!("reset accumulated data (N = {})", self.params.n_segments);
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn dtau(&self) -> f64 {
        self.dtau
    }

    pub fn path(&self) -> &RingPath {
        &self.path
    }

    pub fn population(&self) -> &WalkerPopulation {
        &self.population
    }

    pub fn histogram(&self) -> &DistributionAccumulator {
        &self.histogram
    }

    pub fn bin_centers(&self) -> &[f64] {
        self.histogram.centers()
    }

    pub fn counts(&self) -> &[u64] {
        self.histogram.counts()
    }

    pub fn density(&self) -> &[f64] {
        self.histogram.density()
    }

    pub fn wavefunction(&self) -> &[f64] {
        self.histogram.wavefunction()
    }

    pub fn energy(&self) -> f64 {
        self.histogram.energy()
    }

    pub fn sweeps(&self) -> u64 {
        self.sweeps
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.proposals == 0 {
            0.0
        } else {
            self.accepted as f64 / self.proposals as f64
        }
    }

    /// Path as `(i·Δτ, x[i])` for the N distinct beads.
    pub fn path_trace(&self) -> Vec<(f64, f64)> {
        (0..self.params.n_segments)
            .map(|i| (i as f64 * self.dtau, self.path.bead(i)))
            .collect()
    }

    pub fn observables(&self) -> Observables {
        Observables {
            sweep: self.sweeps,
            energy: self.energy(),
            walkers: self.population.count(),
            reference_potential: self.population.reference_potential(),
            acceptance_rate: self.acceptance_rate(),
        }
    }
}
