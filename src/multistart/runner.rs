//! Multi-start execution engine.
//!
//! # Algorithm
//!
//! 1. Build the starting points: cheapest single facility and cheapest
//!    quartile (engineered), then `random_restarts` uniform random seeds
//!    drawn in order from one seeded generator
//! 2. Run local search from each starting point with its depth budget
//! 3. Fold the run outcomes, keeping the strictly cheapest (earliest run
//!    wins ties)

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::MultiStartConfig;
use crate::instance::Instance;
use crate::local_search::{LocalSearchConfig, LocalSearchRunner, Termination};
use crate::seed::{cheapest_quartile, cheapest_single, uniform_random};
use crate::solution::{Assignment, OpenSet, Solution};

/// Where a run's starting solution came from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOrigin {
    /// Only the cheapest facility open.
    CheapestSingle,
    /// The cheapest quarter of facilities open.
    CheapestQuartile,
    /// The n-th random restart (0-based).
    Random(usize),
}

/// Statistics of one local search run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Seed strategy that produced the starting solution.
    pub origin: SeedOrigin,
    /// Cost of the starting solution.
    pub start_cost: f64,
    /// Cost of the solution the run ended on.
    pub best_cost: f64,
    /// Number of adopted moves.
    pub iterations: usize,
    /// Why the run stopped.
    pub termination: Termination,
}

/// Result of a multi-start run.
#[derive(Debug, Clone)]
pub struct MultiStartResult {
    /// Best solution over all runs.
    pub best: Solution,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Index into `runs` of the run that produced `best`.
    pub best_run: usize,
    /// Per-run statistics in execution order.
    pub runs: Vec<RunSummary>,
    /// Seed actually used for the random starting points.
    pub seed: u64,
}

struct Start {
    origin: SeedOrigin,
    solution: Solution,
    depth: usize,
}

struct Outcome {
    summary: RunSummary,
    solution: Solution,
}

/// Multi-start local search runner.
pub struct MultiStartRunner;

impl MultiStartRunner {
    /// Runs multi-start local search on `instance`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`MultiStartConfig::validate`] first to get a descriptive error).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_facility::instance::Instance;
    /// use u_facility::multistart::{MultiStartConfig, MultiStartRunner};
    ///
    /// let instance: Instance = "2 2\n0 0 1\n9 9 50\n0 1\n1 0\n".parse().unwrap();
    /// let config = MultiStartConfig::default().with_seed(42);
    /// let result = MultiStartRunner::run(&instance, &config);
    /// assert_eq!(result.best.open(), &[true, false]);
    /// assert_eq!(result.runs.len(), config.run_count());
    /// ```
    pub fn run(instance: &Instance, config: &MultiStartConfig) -> MultiStartResult {
        config.validate().expect("invalid MultiStartConfig");

        let seed = config.seed.unwrap_or_else(rand::random);
        let starts = starting_points(instance, config, seed);
        log::debug!(
            "multistart: start m={} s={} runs={} seed={}",
            instance.facility_count(),
            instance.satellite_count(),
            starts.len(),
            seed
        );

        let outcomes = run_all(instance, starts, config);

        let (best_run, best, best_cost) = outcomes
            .iter()
            .enumerate()
            .fold(None::<(usize, &Solution, f64)>, |best, (i, outcome)| {
                match best {
                    Some((_, _, cost)) if outcome.summary.best_cost >= cost => best,
                    _ => Some((i, &outcome.solution, outcome.summary.best_cost)),
                }
            })
            .map(|(i, solution, cost)| (i, solution.clone(), cost))
            .expect("at least one run");

        let runs: Vec<RunSummary> = outcomes.into_iter().map(|o| o.summary).collect();
        log::info!(
            "multistart: done best_cost={:.3} open={} best_run={:?}",
            best_cost,
            best.open_count(),
            runs[best_run].origin
        );

        MultiStartResult {
            best,
            best_cost,
            best_run,
            runs,
            seed,
        }
    }
}

/// Solves `instance` with the default configuration.
///
/// Returns the open-set and assignment of the best solution found. The
/// result is reproducible only through [`solve_with`] and a fixed seed.
pub fn solve(instance: &Instance) -> (OpenSet, Assignment) {
    solve_with(instance, &MultiStartConfig::default())
}

/// Solves `instance` with an explicit configuration.
pub fn solve_with(instance: &Instance, config: &MultiStartConfig) -> (OpenSet, Assignment) {
    MultiStartRunner::run(instance, config).best.into_parts()
}

/// Engineered seeds first, then random seeds drawn in order from one
/// generator, so the set of starts does not depend on how runs execute.
fn starting_points(instance: &Instance, config: &MultiStartConfig, seed: u64) -> Vec<Start> {
    let mut starts = Vec::with_capacity(config.run_count());
    if config.engineered_seeds {
        starts.push(Start {
            origin: SeedOrigin::CheapestSingle,
            solution: cheapest_single(instance),
            depth: config.engineered_depth,
        });
        starts.push(Start {
            origin: SeedOrigin::CheapestQuartile,
            solution: cheapest_quartile(instance),
            depth: config.engineered_depth,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    starts.extend((0..config.random_restarts).map(|i| Start {
        origin: SeedOrigin::Random(i),
        solution: uniform_random(instance, &mut rng),
        depth: config.random_depth,
    }));
    starts
}

fn run_all(instance: &Instance, starts: Vec<Start>, config: &MultiStartConfig) -> Vec<Outcome> {
    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            use rayon::prelude::*;
            return starts
                .into_par_iter()
                .map(|start| run_one(instance, start, config))
                .collect();
        }
    }

    starts
        .into_iter()
        .map(|start| run_one(instance, start, config))
        .collect()
}

fn run_one(instance: &Instance, start: Start, config: &MultiStartConfig) -> Outcome {
    let search = LocalSearchConfig::default()
        .with_max_iterations(start.depth)
        .with_policy(config.policy);
    let start_cost = instance.cost(&start.solution);
    let result = LocalSearchRunner::run(instance, start.solution, &search);

    log::debug!(
        "multistart: run {:?} cost {:.3} -> {:.3} iterations={} {:?}",
        start.origin,
        start_cost,
        result.best_cost,
        result.iterations,
        result.termination
    );

    Outcome {
        summary: RunSummary {
            origin: start.origin,
            start_cost,
            best_cost: result.best_cost,
            iterations: result.iterations,
            termination: result.termination,
        },
        solution: result.best,
    }
}
