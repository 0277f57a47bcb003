//! Core trait for local search problems.

/// A neighboring solution together with its cost.
#[derive(Debug, Clone)]
pub struct Candidate<S: Clone> {
    /// The neighboring solution.
    pub solution: S,
    /// Cost of `solution`.
    pub cost: f64,
}

/// Defines a minimization problem for hill-climbing local search.
///
/// Unlike metaheuristics that sample a random neighbor, local search
/// enumerates the whole neighborhood, so [`neighbors`](Self::neighbors)
/// takes no random source and must be deterministic. Candidates are
/// considered in the order they are returned; that order decides ties.
pub trait LocalSearchProblem: Send + Sync {
    /// The solution type.
    type Solution: Clone + Send;

    /// Evaluates the cost of a solution (lower is better).
    ///
    /// Infeasible solutions may be given `f64::INFINITY`.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates every neighbor of `solution` with its cost.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<Candidate<Self::Solution>>;
}
