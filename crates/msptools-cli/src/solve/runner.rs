use anyhow::{Context, Result};
use msptools::{Array1, Array2, FaerLapack, Solver};

use crate::solve::input::SolveConfig;

/// Read A and b, solve, write x.
///
/// Solver failures are returned as `msptools::LinalgError` inside the
/// `anyhow::Error`, so callers can recover the status code.
pub fn run_solve(config: &SolveConfig) -> Result<Array1> {
    let method = config.method()?;

    let mut a = Array2::from_file(&config.matrix_file)
        .with_context(|| format!("Error reading file {}", config.matrix_file))?;
    let mut b = Array1::from_file(&config.rhs_file)
        .with_context(|| format!("Error reading file {}", config.rhs_file))?;
    log::info!(
        "Loaded A with shape {:?} and b with {} entries",
        a.shape(),
        b.len()
    );

    if config.print_arrays {
        print!("{}", a);
        print!("{}", b);
    }

    Solver::new(FaerLapack)
        .solve(method, &mut a, &mut b)
        .with_context(|| format!("{} failed: system could not be solved", method.name()))?;

    if config.print_arrays {
        print!("{}", b);
    }

    b.to_file(&config.solution_file)
        .with_context(|| format!("Error writing file {}", config.solution_file))?;
    log::info!("Wrote solution to {}", config.solution_file);
    Ok(b)
}
