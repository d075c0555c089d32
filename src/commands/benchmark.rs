//! Benchmark command
//!
//! Generates many equations in parallel and checks every one of them.

use crate::core::{Equation, Operator, validate_equation};
use crate::generator::{GenerateError, generate_equation_with};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total: usize,
    pub valid: usize,
    pub unique: usize,
    /// Indexed by [`Operator::index`]
    pub operator_counts: [usize; 4],
    pub duration: Duration,
    pub equations_per_second: f64,
}

/// Generate `count` equations and tally validity, uniqueness and operators
///
/// With a seed, equation `i` comes from `StdRng::seed_from_u64(seed + i)`, so
/// results do not depend on how rayon schedules the work.
///
/// # Errors
/// Returns the first `GenerateError` hit.
pub fn run_benchmark(
    count: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<BenchmarkResult, GenerateError> {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("generating");

    let start = Instant::now();
    let equations: Vec<Equation> = (0..count)
        .into_par_iter()
        .map(|i| {
            let equation = match seed {
                Some(seed) => {
                    generate_equation_with(&mut StdRng::seed_from_u64(seed.wrapping_add(i as u64)))
                }
                None => generate_equation_with(&mut rand::rng()),
            };
            pb.inc(1);
            equation
        })
        .collect::<Result<_, _>>()?;
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let valid = equations
        .par_iter()
        .filter(|eq| validate_equation(eq.as_str()))
        .count();
    let unique = equations
        .iter()
        .map(Equation::as_str)
        .collect::<FxHashSet<_>>()
        .len();
    let mut operator_counts = [0; Operator::ALL.len()];
    for equation in &equations {
        operator_counts[equation.operator().index()] += 1;
    }

    let equations_per_second = if duration.as_secs_f64() > 0.0 {
        count as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    info!(count, valid, unique, ?duration, "benchmark finished");

    Ok(BenchmarkResult {
        total: count,
        valid,
        unique,
        operator_counts,
        duration,
        equations_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_generated_equation_is_valid() {
        let result = run_benchmark(400, Some(17), false).unwrap();
        assert_eq!(result.total, 400);
        assert_eq!(result.valid, 400);
        assert!(result.unique > 1);
        assert_eq!(result.operator_counts.iter().sum::<usize>(), 400);
        assert!(result.operator_counts.iter().all(|&n| n > 0));
    }

    #[test]
    fn seeded_runs_agree() {
        let a = run_benchmark(100, Some(5), false).unwrap();
        let b = run_benchmark(100, Some(5), false).unwrap();
        assert_eq!(a.unique, b.unique);
        assert_eq!(a.operator_counts, b.operator_counts);
    }

    #[test]
    fn empty_run() {
        let result = run_benchmark(0, None, false).unwrap();
        assert_eq!(result.total, 0);
        assert_eq!(result.unique, 0);
    }
}
