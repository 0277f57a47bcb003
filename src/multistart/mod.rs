//! Multi-start local search.
//!
//! Runs hill-climbing from several independent starting points and keeps
//! the cheapest local optimum. Two engineered seeds (cheapest single
//! facility, cheapest quarter of facilities) are searched with a shallow
//! budget; a configurable number of uniform random seeds are then searched
//! with a deeper budget to escape the basins the engineered seeds fall into.
//!
//! Restarts are independent of each other, so with the `parallel` feature
//! they can be spread over a rayon pool without changing the result.

mod config;
mod runner;

pub use config::MultiStartConfig;
pub use runner::{solve, solve_with, MultiStartResult, MultiStartRunner, RunSummary, SeedOrigin};
