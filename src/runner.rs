//! Driver loop: repeatedly steps a simulation and collects its observables.

use log::info;
use rand::RngCore;

use crate::error::Result;
use crate::io::{write_results, RunConfig};
use crate::rng::seeded;
use crate::sampling::{Observables, PimcSimulation};

/// Outcome of a driven run.
pub struct RunSummary {
    pub simulation: PimcSimulation,
    /// Observables after every sweep
    pub trace: Vec<Observables>,
    pub seed: u64,
}

impl RunSummary {
    /// Bin centre with the largest density.
    pub fn density_peak(&self) -> Option<f64> {
        self.simulation
            .bin_centers()
            .iter()
            .zip(self.simulation.density())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&x, _)| x)
    }

    /// Mean of the energy estimate over the sweeps that produced one.
    pub fn mean_energy(&self) -> f64 {
        let sampled: Vec<f64> = self.trace.iter().filter(|o| o.sweep > 1).map(|o| o.energy).collect();
        if sampled.is_empty() {
            0.0
        } else {
            sampled.iter().sum::<f64>() / sampled.len() as f64
        }
    }
}

/// Run `config.sweeps` sweeps, logging every `config.steps_per_report`,
/// and write CSV results when an output directory is configured.
pub fn run_pimc(config: &RunConfig) -> Result<RunSummary> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    let mut rng = seeded(seed);
    let params = config.simulation;

    info!("=== PIMC ground state ===");
    info!("Potential: {}", params.potential);
    info!("Segments N: {}, total time tau: {:.4}, dtau: {:.4}", params.n_segments, params.tau, params.dtau());
    info!("Max displacement delta: {:.4}, seed: {}", params.delta, seed);

    let mut simulation = PimcSimulation::new(params, &mut rng)?;
    let mut trace = Vec::with_capacity(config.sweeps as usize);
    let report = config.steps_per_report.max(1);

    for _ in 0..config.sweeps {
        simulation.step(&mut rng);
        let obs = simulation.observables();
        if obs.sweep % report == 0 {
            info!(
                "  {:6} Monte Carlo steps: E0 = {:10.6}, walkers = {}, acceptance = {:.2}%",
                obs.sweep,
                obs.energy,
                obs.walkers,
                100.0 * obs.acceptance_rate
            );
        }
        trace.push(obs);
    }

    if let Some(dir) = &config.output_dir {
        write_results(dir, &simulation, &trace)?;
        info!("Results written to {}", dir.display());
    }

    Ok(RunSummary { simulation, trace, seed })
}
