//! Ground-state density in the double-well potential
//!
//! Run with: cargo run --release --example double_well
//!
//! V(x) = x⁴/4 - x²/2 has minima at x = ±1; the sampled density should
//! show weight around both wells.

use rust_pimc::{run_pimc, Potential, RunConfig, SimulationParams};

fn main() -> Result<(), rust_pimc::PimcError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig {
        simulation: SimulationParams::new(200, 10.0, 1.0, Potential::DoubleWell),
        sweeps: 2000,
        seed: Some(2024),
        steps_per_report: 200,
        output_dir: None,
    };
    let summary = run_pimc(&config)?;
    let sim = &summary.simulation;

    let centers = sim.bin_centers();
    let density = sim.density();
    let left: f64 = centers.iter().zip(density).filter(|&(&x, _)| x < 0.0).map(|(_, &d)| d).sum();
    let right: f64 = centers.iter().zip(density).filter(|&(&x, _)| x >= 0.0).map(|(_, &d)| d).sum();

    println!("Density peak at x = {:.2}", summary.density_peak().unwrap_or(0.0));
    println!("Weight left of origin:  {:.4}", left);
    println!("Weight right of origin: {:.4}", right);
    println!("Final E0 estimate: {:.6}", sim.energy());
    Ok(())
}
