//! CSV output of the path, the ground-state distribution and the energy trace.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::sampling::{Observables, PimcSimulation};

#[derive(Serialize)]
struct PathRow {
    tau: f64,
    x: f64,
}

#[derive(Serialize)]
struct DistributionRow {
    x: f64,
    count: u64,
    density: f64,
    psi0: f64,
}

/// Bead positions against imaginary time.
pub fn write_path<P: AsRef<Path>>(filename: P, sim: &PimcSimulation) -> Result<()> {
    let mut writer = csv::Writer::from_path(filename)?;
    for (tau, x) in sim.path_trace() {
        writer.serialize(PathRow { tau, x })?;
    }
    writer.flush()?;
    Ok(())
}

/// Histogram bins with their normalised density and |Ψ0|.
pub fn write_distribution<P: AsRef<Path>>(filename: P, sim: &PimcSimulation) -> Result<()> {
    let mut writer = csv::Writer::from_path(filename)?;
    let rows = sim
        .bin_centers()
        .iter()
        .zip(sim.counts())
        .zip(sim.density())
        .zip(sim.wavefunction());
    for (((&x, &count), &density), &psi0) in rows {
        writer.serialize(DistributionRow { x, count, density, psi0 })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_energy_trace<P: AsRef<Path>>(filename: P, trace: &[Observables]) -> Result<()> {
    let mut writer = csv::Writer::from_path(filename)?;
    for row in trace {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `path.csv`, `distribution.csv` and `energy.csv` into `dir`.
pub fn write_results<P: AsRef<Path>>(dir: P, sim: &PimcSimulation, trace: &[Observables]) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    write_path(dir.join("path.csv"), sim)?;
    write_distribution(dir.join("distribution.csv"), sim)?;
    write_energy_trace(dir.join("energy.csv"), trace)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;
    use crate::potential::Potential;
    use crate::rng::seeded;

    #[test]
    fn test_write_results() {
        let mut rng = seeded(21);
        let mut sim = PimcSimulation::new(SimulationParams::new(20, 5.0, 0.5, Potential::Anharmonic), &mut rng).unwrap();
        let mut trace = Vec::new();
        for _ in 0..5 {
            sim.step(&mut rng);
            trace.push(sim.observables());
        }

        let dir = std::env::temp_dir().join(format!("rust_pimc_output_{}", std::process::id()));
        write_results(&dir, &sim, &trace).unwrap();

        let path_csv = fs::read_to_string(dir.join("path.csv")).unwrap();
        assert_eq!(path_csv.lines().next(), Some("tau,x"));
        assert_eq!(path_csv.lines().count(), 21);

        let dist_csv = fs::read_to_string(dir.join("distribution.csv")).unwrap();
        assert_eq!(dist_csv.lines().next(), Some("x,count,density,psi0"));
        assert_eq!(dist_csv.lines().count(), 22);

        let energy_csv = fs::read_to_string(dir.join("energy.csv")).unwrap();
        assert_eq!(
            energy_csv.lines().next(),
            Some("sweep,energy,walkers,reference_potential,acceptance_rate")
        );
        assert_eq!(energy_csv.lines().count(), 6);

        fs::remove_dir_all(&dir).unwrap();
    }
}
