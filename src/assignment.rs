//! Nearest-open-facility assignment policy.

use crate::instance::Instance;
use crate::solution::{Assignment, Solution};

/// Assigns every satellite to its nearest open facility.
///
/// Facilities are scanned in ascending index order and only a strictly
/// smaller connection cost replaces the incumbent, so ties go to the lowest
/// index. The result depends only on `open`.
///
/// # Panics
///
/// Panics if no facility is open. Seeds and moves in this crate never
/// produce such an open-set.
pub fn nearest_assignment(instance: &Instance, open: &[bool]) -> Assignment {
    let first_open = open
        .iter()
        .position(|&o| o)
        .expect("nearest_assignment requires at least one open facility");
    debug_assert_eq!(open.len(), instance.facility_count());

    (0..instance.satellite_count())
        .map(|satellite| {
            let mut nearest = first_open;
            let mut nearest_cost = instance.connection_cost(first_open, satellite);
            for facility in (first_open + 1..open.len()).filter(|&f| open[f]) {
                let cost = instance.connection_cost(facility, satellite);
                if cost < nearest_cost {
                    nearest = facility;
                    nearest_cost = cost;
                }
            }
            nearest
        })
        .collect()
}

/// Builds a [`Solution`] from an open-set using [`nearest_assignment`].
pub fn assign_nearest(instance: &Instance, open: impl Into<Box<[bool]>>) -> Solution {
    let open = open.into();
    let assignment = nearest_assignment(instance, &open);
    Solution::new(open, assignment)
}
