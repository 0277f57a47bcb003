//! Local search execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting solution
//! 2. While fewer than `max_iterations` moves have been adopted:
//!    a. Generate the full neighborhood of the incumbent
//!    b. Select a strictly improving neighbor according to the policy
//!    c. If none exists, stop (local optimum); otherwise adopt it
//! 3. Return the incumbent

use super::config::{ImprovementPolicy, LocalSearchConfig};
use super::types::{Candidate, LocalSearchProblem};

/// Why a local search run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No neighbor strictly improves the incumbent.
    LocalOptimum,
    /// The iteration budget ran out first.
    IterationLimit,
}

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult<S: Clone> {
    /// Best (final) solution.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Number of adopted moves.
    pub iterations: usize,
    /// Why the run stopped.
    pub termination: Termination,
    /// Incumbent cost, starting with the initial cost and then after each
    /// adopted move.
    pub cost_history: Vec<f64>,
}

/// Hill-climbing local search runner.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs local search from `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_facility::local_search::{
    ///     Candidate, LocalSearchConfig, LocalSearchProblem, LocalSearchRunner,
    /// };
    ///
    /// struct Descend;
    /// impl LocalSearchProblem for Descend {
    ///     type Solution = i32;
    ///     fn cost(&self, &x: &i32) -> f64 { (x * x) as f64 }
    ///     fn neighbors(&self, &x: &i32) -> Vec<Candidate<i32>> {
    ///         [x - 1, x + 1]
    ///             .into_iter()
    ///             .map(|n| Candidate { solution: n, cost: self.cost(&n) })
    ///             .collect()
    ///     }
    /// }
    ///
    /// let result = LocalSearchRunner::run(&Descend, 7, &LocalSearchConfig::default());
    /// assert_eq!(result.best, 0);
    /// ```
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        start: P::Solution,
        config: &LocalSearchConfig,
    ) -> LocalSearchResult<P::Solution> {
        let mut current = start;
        let mut current_cost = problem.cost(&current);
        let mut cost_history = Vec::with_capacity(config.max_iterations.min(1024) + 1);
        cost_history.push(current_cost);

        let mut termination = Termination::IterationLimit;
        let mut iterations = 0;

        while iterations < config.max_iterations {
            let neighbors = problem.neighbors(&current);
            let Some(next) = select(neighbors, current_cost, config.policy) else {
                termination = Termination::LocalOptimum;
                break;
            };

            log::trace!(
                "local_search: iteration={} cost {} -> {}",
                iterations,
                current_cost,
                next.cost
            );
            current = next.solution;
            current_cost = next.cost;
            cost_history.push(current_cost);
            iterations += 1;
        }

        LocalSearchResult {
            best: current,
            best_cost: current_cost,
            iterations,
            termination,
            cost_history,
        }
    }
}

/// Picks the neighbor to adopt, if any strictly improves on `current_cost`.
fn select<S: Clone>(
    neighbors: Vec<Candidate<S>>,
    current_cost: f64,
    policy: ImprovementPolicy,
) -> Option<Candidate<S>> {
    match policy {
        ImprovementPolicy::FirstImprovement => {
            neighbors.into_iter().find(|c| c.cost < current_cost)
        }
        ImprovementPolicy::BestImprovement => {
            let mut best: Option<Candidate<S>> = None;
            let mut best_cost = current_cost;
            for candidate in neighbors {
                if candidate.cost < best_cost {
                    best_cost = candidate.cost;
                    best = Some(candidate);
                }
            }
            best
        }
    }
}
