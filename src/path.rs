//! Closed imaginary-time path of a single particle.
//!
//! The ring stores N+1 beads with periodic boundary conditions in imaginary
//! time: x[N] is the same bead as x[0]. Every write through this type keeps
//! both ends equal.

use crate::potential::PotentialModel;
use crate::rng::UniformSource;

/// Position of a bead relative to the ring ends, which decides its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeadClass {
    First,
    Last,
    Interior,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RingPath {
    /// Bead positions x[0..=N], x[N] == x[0]
    beads: Vec<f64>,
}

impl RingPath {
    /// All beads at the origin.
    pub fn new(n_segments: usize) -> Self {
        Self { beads: vec![0.0; n_segments + 1] }
    }

    /// Initial path: each bead gets a random-sign unit-interval draw offset
    /// by the potential at that bead.
    pub fn seeded<P, R>(n_segments: usize, potential: &P, rng: &mut R) -> Self
    where
        P: PotentialModel,
        R: UniformSource,
    {
        let mut path = Self::new(n_segments);
        for i in 0..n_segments {
            let sign = if (10.0 * rng.next_uniform()).round() as u32 % 2 == 0 { 1.0 } else { -1.0 };
            let magnitude = rng.next_uniform();
            let offset = potential.value(path.beads[i]);
            path.set(i, sign * magnitude + offset);
        }
        path.close_ring();
        path
    }

    /// Number of segments N.
    pub fn n_segments(&self) -> usize {
        self.beads.len() - 1
    }

    /// Array length N+1, also the walker capacity.
    pub fn len(&self) -> usize {
        self.beads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    pub fn bead(&self, j: usize) -> f64 {
        self.beads[j]
    }

    pub fn beads(&self) -> &[f64] {
        &self.beads
    }

    /// Write bead `j`; writing either end writes both.
    pub fn set(&mut self, j: usize, x: f64) {
        let n = self.n_segments();
        self.beads[j] = x;
        if j == 0 {
            self.beads[n] = x;
        } else if j == n {
            self.beads[0] = x;
        }
    }

    /// x[N] = x[0]
    pub fn close_ring(&mut self) {
        let n = self.n_segments();
        self.beads[n] = self.beads[0];
    }

    /// x[0] = x[N]
    pub fn open_from_tail(&mut self) {
        let n = self.n_segments();
        self.beads[0] = self.beads[n];
    }

    pub fn classify(&self, j: usize) -> BeadClass {
        let n = self.n_segments();
        if j + 1 == n && j > 0 {
            BeadClass::Last
        } else if j == 0 {
            BeadClass::First
        } else {
            BeadClass::Interior
        }
    }

    /// Imaginary-time neighbours `(hi, lo)` of bead `j` in `0..N`.
    pub fn neighbors(&self, j: usize) -> (f64, f64) {
        let n = self.n_segments();
        match self.classify(j) {
            BeadClass::Last => (self.beads[n], self.beads[j - 1]),
            BeadClass::First => (self.beads[1], self.beads[n - 1]),
            BeadClass::Interior => (self.beads[j + 1], self.beads[j - 1]),
        }
    }

    /// Re-synchronise the ring ends after an action evaluation at bead `j`.
    pub fn synchronize(&mut self, class: BeadClass) {
        match class {
            BeadClass::First => self.close_ring(),
            BeadClass::Last | BeadClass::Interior => self.open_from_tail(),
        }
        self.close_ring();
    }

    pub fn is_closed(&self) -> bool {
        self.beads[0] == self.beads[self.n_segments()]
    }

    pub fn zero(&mut self) {
        self.beads.iter_mut().for_each(|x| *x = 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::Potential;
    use crate::rng::{seeded, ReplaySource};

    #[test]
    fn test_seeded_path_is_closed() {
        let mut rng = seeded(3);
        let path = RingPath::seeded(50, &Potential::Harmonic, &mut rng);
        assert_eq!(path.len(), 51);
        assert!(path.is_closed());
        assert!(path.beads()[..50].iter().all(|x| x.abs() < 1.0));
    }

    #[test]
    fn test_seeded_sign_and_magnitude_draws() {
        // round(10 * 0.1) = 1 -> negative, round(10 * 0.2) = 2 -> positive
        let mut rng = ReplaySource::new(vec![0.1, 0.5, 0.2, 0.25]);
        let path = RingPath::seeded(2, &Potential::DoubleWell, &mut rng);
        assert_eq!(path.beads(), &[-0.5, 0.25, -0.5]);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_set_keeps_ring_closed() {
        let mut path = RingPath::new(4);
        path.set(0, 1.5);
        assert_eq!(path.bead(4), 1.5);
        path.set(4, -2.0);
        assert_eq!(path.bead(0), -2.0);
        path.set(2, 0.3);
        assert!(path.is_closed());
    }

    #[test]
    fn test_classify_and_neighbors() {
        let mut path = RingPath::new(4);
        for j in 0..4 {
            path.set(j, j as f64 + 1.0);
        }
        assert_eq!(path.classify(0), BeadClass::First);
        assert_eq!(path.classify(3), BeadClass::Last);
        assert_eq!(path.classify(2), BeadClass::Interior);
        assert_eq!(path.neighbors(0), (2.0, 4.0));
        assert_eq!(path.neighbors(3), (1.0, 3.0));
        assert_eq!(path.neighbors(1), (3.0, 1.0));
    }

    #[test]
    fn test_single_segment_ring() {
        let mut path = RingPath::new(1);
        path.set(0, 0.7);
        assert_eq!(path.classify(0), BeadClass::First);
        assert_eq!(path.neighbors(0), (0.7, 0.7));
    }

    #[test]
    fn test_zero() {
        let mut rng = seeded(11);
        let mut path = RingPath::seeded(10, &Potential::Morse, &mut rng);
        path.zero();
        assert!(path.beads().iter().all(|&x| x == 0.0));
    }
}
