//! Starting solutions for local search.
//!
//! Two engineered seeds reach good basins quickly; the uniform random seed
//! supplies diversification for restarts. [`random_baseline`] is not a
//! search seed but the reference "random agent" score to beat.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::assignment::assign_nearest;
use crate::instance::Instance;
use crate::solution::Solution;

/// Index of the cheapest facility to open (first one on ties).
pub fn cheapest_facility(instance: &Instance) -> usize {
    instance
        .opening_costs()
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best, best_cost), (i, &c)| {
            if c < best_cost {
                (i, c)
            } else {
                (best, best_cost)
            }
        })
        .0
}

/// Opens only the cheapest facility and assigns every satellite to it.
pub fn cheapest_single(instance: &Instance) -> Solution {
    let facility = cheapest_facility(instance);
    let mut open = vec![false; instance.facility_count()];
    open[facility] = true;
    Solution::new(open, vec![facility; instance.satellite_count()])
}

/// Opens the `max(1, M / 4)` cheapest facilities and assigns satellites to
/// the nearest one.
///
/// Facilities are ranked by a stable sort on opening cost, so equal costs
/// keep index order.
pub fn cheapest_quartile(instance: &Instance) -> Solution {
    let m = instance.facility_count();
    let costs = instance.opening_costs();
    let mut ranked: Vec<usize> = (0..m).collect();
    ranked.sort_by(|&a, &b| costs[a].total_cmp(&costs[b]));

    let mut open = vec![false; m];
    for &facility in ranked.iter().take((m / 4).max(1)) {
        open[facility] = true;
    }
    assign_nearest(instance, open)
}

/// Opens each facility independently with probability 1/2.
///
/// If every flag comes out closed, the cheapest facility is opened.
/// Satellites are assigned to the nearest open facility.
pub fn uniform_random<R: Rng>(instance: &Instance, rng: &mut R) -> Solution {
    let mut open: Vec<bool> = (0..instance.facility_count())
        .map(|_| rng.random_bool(0.5))
        .collect();
    if !open.iter().any(|&o| o) {
        open[cheapest_facility(instance)] = true;
    }
    assign_nearest(instance, open)
}

/// A feasible but unoptimized solution: random open-set (an all-closed draw
/// opens a uniformly random facility) and each satellite assigned to a
/// uniformly random open facility.
pub fn random_baseline<R: Rng>(instance: &Instance, rng: &mut R) -> Solution {
    let m = instance.facility_count();
    let mut open: Vec<bool> = (0..m).map(|_| rng.random_bool(0.5)).collect();
    if !open.iter().any(|&o| o) {
        open[rng.random_range(0..m)] = true;
    }
    let open_indices: Vec<usize> = (0..m).filter(|&i| open[i]).collect();
    let assignment: Vec<usize> = (0..instance.satellite_count())
        .filter_map(|_| open_indices.choose(rng).copied())
        .collect();
    Solution::new(open, assignment)
}
