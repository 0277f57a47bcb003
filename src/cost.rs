//! Cost model: connection distances and total solution cost.
//!
//! A solution with no open facility is infeasible and costs
//! [`f64::INFINITY`], so ordinary `<` comparisons reject it without any
//! special casing at call sites.

use crate::instance::{Instance, Point};
use crate::solution::Solution;

/// Euclidean distance between two points.
pub fn connection_cost(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Total cost of an `(open, assignment)` pair.
///
/// Returns `f64::INFINITY` when no facility is open. Otherwise the sum of
/// opening costs of open facilities plus the precomputed connection cost of
/// each satellite to its assigned facility. The caller guarantees that every
/// entry of `assignment` references an open facility; this is not checked
/// here (see [`check_solution`](crate::solution::check_solution)).
pub fn solution_cost(instance: &Instance, open: &[bool], assignment: &[usize]) -> f64 {
    if !open.iter().any(|&o| o) {
        return f64::INFINITY;
    }
    let opening: f64 = open
        .iter()
        .zip(instance.opening_costs())
        .filter(|&(&o, _)| o)
        .map(|(_, &c)| c)
        .sum();
    let connection: f64 = assignment
        .iter()
        .enumerate()
        .map(|(satellite, &facility)| instance.connection_cost(facility, satellite))
        .sum();
    opening + connection
}

impl Instance {
    /// Total cost of a [`Solution`].
    pub fn cost(&self, solution: &Solution) -> f64 {
        solution_cost(self, solution.open(), solution.assignment())
    }
}
