use std::path::PathBuf;

use clap::Parser;
use rust_pimc::{read_config, run_pimc, PimcError, Potential, RunConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Ground-state Path Integral Monte Carlo in 1D", long_about = None)]
struct Args {
    /// YAML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total number of segments N
    #[arg(short = 'n', long)]
    segments: Option<usize>,

    /// Total imaginary time τ (ω⁻¹)
    #[arg(long)]
    tau: Option<f64>,

    /// Maximum change in bead displacement δ
    #[arg(long)]
    delta: Option<f64>,

    /// Potential: 1/harmonic, 2/morse, 3/double_well, 4/anharmonic
    #[arg(short, long)]
    potential: Option<Potential>,

    /// Number of Monte Carlo sweeps
    #[arg(short, long)]
    sweeps: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Directory for path.csv, distribution.csv and energy.csv
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<RunConfig, PimcError> {
        let mut config = match &self.config {
            Some(file) => read_config(file)?,
            None => RunConfig::default(),
        };
        if let Some(n) = self.segments {
            config.simulation.n_segments = n;
        }
        if let Some(tau) = self.tau {
            config.simulation.tau = tau;
        }
        if let Some(delta) = self.delta {
            config.simulation.delta = delta;
        }
        if let Some(potential) = self.potential {
            config.simulation.potential = potential;
        }
        if let Some(sweeps) = self.sweeps {
            config.sweeps = sweeps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.output_dir.is_some() {
            config.output_dir = self.output_dir;
        }
        config.simulation.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), PimcError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    let summary = run_pimc(&config)?;
    let sim = &summary.simulation;

    println!("PIMC Results for {} potential", config.simulation.potential);
    println!("----------------------------------------");
    println!("Number of segments: {}", config.simulation.n_segments);
    println!("Monte Carlo steps: {}", sim.sweeps());
    println!("Seed: {}", summary.seed);
    println!("Final E0 estimate: {:.6}", sim.energy());
    println!("Mean E0 estimate: {:.6}", summary.mean_energy());
    if let Some(peak) = summary.density_peak() {
        println!("Density peak at x = {:.2}", peak);
    }
    println!("Walkers: {} (target {})", sim.population().count(), sim.population().target());
    println!("Acceptance rate: {:.2}%", 100.0 * sim.acceptance_rate());
    Ok(())
}
