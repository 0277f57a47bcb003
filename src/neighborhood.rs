//! Single-flip neighborhood over facility open/closed status.
//!
//! A neighbor differs from the current solution in exactly one facility
//! flag, with every satellite reassigned to its nearest open facility.
//! Any open-set can be reached from any other by single flips, so the move
//! graph is connected, although it has local optima.

use crate::assignment::assign_nearest;
use crate::instance::Instance;
use crate::local_search::{Candidate, LocalSearchProblem};
use crate::solution::Solution;

/// A single-facility status change.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flip {
    /// Open a closed facility.
    Open(usize),
    /// Close an open facility.
    Close(usize),
}

impl Flip {
    /// Index of the facility the flip changes.
    pub fn facility(self) -> usize {
        match self {
            Flip::Open(i) | Flip::Close(i) => i,
        }
    }

    /// Applies the flip to an open-set, producing a new one.
    pub fn apply(self, open: &[bool]) -> Box<[bool]> {
        let mut flipped: Box<[bool]> = open.into();
        match self {
            Flip::Open(i) => flipped[i] = true,
            Flip::Close(i) => flipped[i] = false,
        }
        flipped
    }
}

/// A neighboring solution, the flip that produced it and its cost.
#[derive(Debug, Clone)]
pub struct Neighbor {
    /// Move that produced this neighbor.
    pub flip: Flip,
    /// The neighbor, reassigned to nearest open facilities.
    pub solution: Solution,
    /// Cost of `solution`.
    pub cost: f64,
}

/// Lists the flips available from `solution`.
///
/// Opening moves come first, then closing moves, each in ascending facility
/// order. Opening moves exist only while some facility is closed; closing
/// moves only while more than one facility is open.
pub fn flips(solution: &Solution) -> Vec<Flip> {
    let open = solution.open();
    let open_count = solution.open_count();
    let mut moves = Vec::with_capacity(open.len());

    if open_count < open.len() {
        moves.extend((0..open.len()).filter(|&i| !open[i]).map(Flip::Open));
    }
    if open_count > 1 {
        moves.extend((0..open.len()).filter(|&i| open[i]).map(Flip::Close));
    }
    moves
}

/// Generates every single-flip neighbor of `solution`, reassigned and costed.
///
/// With `k` open facilities out of `M`, this yields `M - k` opening moves
/// and, when `k > 1`, `k` closing moves.
pub fn neighbors(instance: &Instance, solution: &Solution) -> Vec<Neighbor> {
    flips(solution)
        .into_iter()
        .map(|flip| {
            let solution = assign_nearest(instance, flip.apply(solution.open()));
            let cost = instance.cost(&solution);
            Neighbor {
                flip,
                solution,
                cost,
            }
        })
        .collect()
}

impl LocalSearchProblem for Instance {
    type Solution = Solution;

    fn cost(&self, solution: &Solution) -> f64 {
        Instance::cost(self, solution)
    }

    fn neighbors(&self, solution: &Solution) -> Vec<Candidate<Solution>> {
        neighbors(self, solution)
            .into_iter()
            .map(|n| Candidate {
                solution: n.solution,
                cost: n.cost,
            })
            .collect()
    }
}
