//! Local search configuration.

/// Rule for choosing which improving neighbor to adopt.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImprovementPolicy {
    /// Steepest descent: adopt the lowest-cost strictly improving neighbor.
    /// Among equal costs the first one generated wins.
    #[default]
    BestImprovement,
    /// Adopt the first strictly improving neighbor in generation order.
    FirstImprovement,
}

/// Configuration parameters for local search.
///
/// # Examples
///
/// ```
/// use u_facility::local_search::{ImprovementPolicy, LocalSearchConfig};
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(40)
///     .with_policy(ImprovementPolicy::FirstImprovement);
/// assert_eq!(config.max_iterations, 40);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct LocalSearchConfig {
    /// Maximum number of adopted moves.
    pub max_iterations: usize,
    /// Neighbor selection rule.
    pub policy: ImprovementPolicy,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            policy: ImprovementPolicy::default(),
        }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the improvement policy.
    pub fn with_policy(mut self, policy: ImprovementPolicy) -> Self {
        self.policy = policy;
        self
    }
}
