//! Hill-climbing local search.
//!
//! Starting from a given solution, repeatedly scans the full neighborhood
//! of the incumbent and moves to a strictly improving neighbor. The search
//! stops as soon as no neighbor improves (a local optimum) or the iteration
//! budget is exhausted. Cost never increases along the trajectory.
//!
//! # References
//!
//! - Aarts, E. & Lenstra, J. K. (1997). *Local Search in Combinatorial
//!   Optimization*, Wiley.

mod config;
mod runner;
mod types;

pub use config::{ImprovementPolicy, LocalSearchConfig};
pub use runner::{LocalSearchResult, LocalSearchRunner, Termination};
pub use types::{Candidate, LocalSearchProblem};
