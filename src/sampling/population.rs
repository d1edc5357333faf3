//! Birth/death population control for virtual walkers.
//!
//! Walkers are not stored separately: walker slot `i` reads its potential
//! from bead `i` of the path. Each pass visits the slots from the top down,
//! cloning walkers that sit below the reference potential and killing those
//! above it, then moves the reference potential so the count drifts back
//! toward the target.

use log::trace;

use crate::path::RingPath;
use crate::potential::PotentialModel;
use crate::rng::UniformSource;

/// Outcome of the branching test for one walker slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchingResult {
    Clone,
    Kill,
    Keep,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalkerPopulation {
    /// Current walker count M
    count: usize,
    /// Desired walker count M0
    target: usize,
    /// Upper bound on M (the path array length)
    capacity: usize,
    /// Running sum of walker potentials
    psum: f64,
    /// Mean walker potential
    pave: f64,
    /// Feedback-adjusted reference potential
    pref: f64,
    /// Control time step
    dt: f64,
    births: u64,
    deaths: u64,
}

impl WalkerPopulation {
    /// Start with `target` walkers, also the target population.
    pub fn new(target: usize, capacity: usize, dt: f64) -> Self {
        Self {
            count: target.min(capacity),
            target,
            capacity,
            psum: 0.0,
            pave: 0.0,
            pref: 0.0,
            dt,
            births: 0,
            deaths: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn mean_potential(&self) -> f64 {
        self.pave
    }

    pub fn reference_potential(&self) -> f64 {
        self.pref
    }

    pub fn potential_sum(&self) -> f64 {
        self.psum
    }

    pub fn births(&self) -> u64 {
        self.births
    }

    pub fn deaths(&self) -> u64 {
        self.deaths
    }

    /// Branching test for a walker with potential `pot`.
    ///
    /// A draw is consumed unless the population is empty and the walker
    /// sits below the reference.
    fn branching_decision<R: UniformSource>(&self, pot: f64, rng: &mut R) -> BranchingResult {
        let dp = pot - self.pref;
        if dp < 0.0 {
            if self.count == 0 || (rng.next_uniform() < -dp * self.dt && self.count < self.capacity) {
                BranchingResult::Clone
            } else {
                BranchingResult::Keep
            }
        } else if rng.next_uniform() < dp * self.dt && self.count > 0 {
            BranchingResult::Kill
        } else {
            BranchingResult::Keep
        }
    }

    /// One branching pass over slots M-1 down to 0, followed by the
    /// reference potential update.
    pub fn branch<P, R>(&mut self, path: &RingPath, potential: &P, rng: &mut R)
    where
        P: PotentialModel,
        R: UniformSource,
    {
        for i in (0..self.count).rev() {
            let pot = potential.value(path.bead(i));
            self.psum += pot;
            match self.branching_decision(pot, rng) {
                BranchingResult::Clone => {
                    self.psum += pot;
                    self.count += 1;
                    self.births += 1;
                }
                BranchingResult::Kill => {
                    self.psum -= pot;
                    self.count -= 1;
                    self.deaths += 1;
                }
                BranchingResult::Keep => {}
            }
        }

        self.pave = if self.count == 0 { 0.0 } else { self.psum / self.count as f64 };
        if self.target > 0 {
            // walker offset is an integer ratio, truncated toward zero
            let offset = (self.count as i64 - self.target as i64) / self.target as i64;
            self.pref = self.pave - offset as f64 / self.dt;
        }
        trace!("population pass: M = {}, pave = {:.6}, pref = {:.6}", self.count, self.pave, self.pref);
    }
}
