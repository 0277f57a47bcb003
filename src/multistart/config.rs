//! Multi-start configuration.

use crate::local_search::ImprovementPolicy;

/// Configuration parameters for multi-start local search.
///
/// Defaults: engineered seeds searched 15 moves deep, followed by 25 random
/// restarts searched 40 moves deep.
///
/// # Examples
///
/// ```
/// use u_facility::multistart::MultiStartConfig;
///
/// let config = MultiStartConfig::default()
///     .with_random_restarts(50)
///     .with_random_depth(60)
///     .with_seed(42);
/// assert_eq!(config.random_restarts, 50);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct MultiStartConfig {
    /// Whether to run the cheapest-single and cheapest-quartile seeds.
    pub engineered_seeds: bool,
    /// Iteration budget for each engineered seed.
    pub engineered_depth: usize,
    /// Number of uniform random restarts.
    pub random_restarts: usize,
    /// Iteration budget for each random restart.
    pub random_depth: usize,
    /// Neighbor selection rule used by every run.
    pub policy: ImprovementPolicy,
    /// Random seed (None draws one from entropy).
    pub seed: Option<u64>,
    /// Whether to run restarts in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            engineered_seeds: true,
            engineered_depth: 15,
            random_restarts: 25,
            random_depth: 40,
            policy: ImprovementPolicy::BestImprovement,
            seed: None,
            parallel: false,
        }
    }
}

impl MultiStartConfig {
    /// Enables or disables the engineered seeds.
    pub fn with_engineered_seeds(mut self, enabled: bool) -> Self {
        self.engineered_seeds = enabled;
        self
    }

    /// Sets the iteration budget of the engineered seeds.
    pub fn with_engineered_depth(mut self, n: usize) -> Self {
        self.engineered_depth = n;
        self
    }

    /// Sets the number of random restarts.
    pub fn with_random_restarts(mut self, n: usize) -> Self {
        self.random_restarts = n;
        self
    }

    /// Sets the iteration budget of each random restart.
    pub fn with_random_depth(mut self, n: usize) -> Self {
        self.random_depth = n;
        self
    }

    /// Sets the neighbor selection rule.
    pub fn with_policy(mut self, policy: ImprovementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel restarts.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Total number of local search runs this configuration performs.
    pub fn run_count(&self) -> usize {
        let engineered = if self.engineered_seeds { 2 } else { 0 };
        engineered + self.random_restarts
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.run_count() == 0 {
            return Err(
                "at least one run required: enable engineered_seeds or set random_restarts > 0"
                    .into(),
            );
        }
        Ok(())
    }
}
