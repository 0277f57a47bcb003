//! Multi-start local search for the two-tier uncapacitated facility
//! location problem.
//!
//! Given main facilities (each with an opening cost) and satellites (demand
//! points), choose which facilities to open and connect every satellite to
//! an open facility, minimizing opening costs plus Euclidean connection
//! distances. At least one facility must be open.
//!
//! - **Instance** ([`instance`]): immutable problem data, text loader and
//!   precomputed connection-cost matrix.
//! - **Cost model** ([`cost`]): connection distance and total solution cost;
//!   an empty open-set costs `f64::INFINITY`.
//! - **Assignment policy** ([`assignment`]): nearest open facility per
//!   satellite, ties to the lowest index.
//! - **Neighborhood** ([`neighborhood`]): open or close exactly one facility.
//! - **Local search** ([`local_search`]): generic hill climbing with a
//!   no-improvement stop and an iteration budget.
//! - **Seeds** ([`seed`]): engineered and random starting solutions.
//! - **Multi-start** ([`multistart`]): runs local search from many seeds and
//!   keeps the best; [`solve`] is the entry point.
//!
//! # Example
//!
//! ```
//! use u_facility::instance::Instance;
//! use u_facility::solution::check_solution;
//!
//! let instance: Instance = "3 4\n0 0 5\n10 0 5\n5 5 30\n0 1\n1 0\n10 1\n9 0\n"
//!     .parse()
//!     .unwrap();
//! let (open, assignment) = u_facility::solve(&instance);
//! assert!(check_solution(&instance, &open, &assignment).is_ok());
//! ```

pub mod assignment;
pub mod cost;
pub mod error;
pub mod instance;
pub mod local_search;
pub mod multistart;
pub mod neighborhood;
pub mod seed;
pub mod solution;

pub use error::{CheckError, InstanceError};
pub use instance::{Instance, Point};
pub use multistart::{solve, solve_with, MultiStartConfig, MultiStartResult, MultiStartRunner};
pub use solution::{check_solution, Assignment, OpenSet, Solution};
