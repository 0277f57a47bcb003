//! Solution representation and structural checking.

use crate::error::CheckError;
use crate::instance::Instance;

/// Open/closed flag per facility. Length is always `M`.
pub type OpenSet = Box<[bool]>;

/// Assigned facility index per satellite. Length is always `S`.
pub type Assignment = Box<[usize]>;

/// An immutable `(open-set, assignment)` pair.
///
/// Moves never mutate a solution; they build a new one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    open: OpenSet,
    assignment: Assignment,
}

impl Solution {
    /// Pairs an open-set with an assignment. No validation is done; see
    /// [`check_solution`].
    pub fn new(open: impl Into<OpenSet>, assignment: impl Into<Assignment>) -> Self {
        Self {
            open: open.into(),
            assignment: assignment.into(),
        }
    }

    /// Open/closed flag per facility.
    pub fn open(&self) -> &[bool] {
        &self.open
    }

    /// Assigned facility per satellite.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Whether `facility` is open.
    pub fn is_open(&self, facility: usize) -> bool {
        self.open[facility]
    }

    /// Number of open facilities.
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Indices of open facilities in ascending order.
    pub fn open_facilities(&self) -> impl Iterator<Item = usize> + '_ {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(i, &o)| o.then_some(i))
    }

    /// Splits the solution into its open-set and assignment.
    pub fn into_parts(self) -> (OpenSet, Assignment) {
        (self.open, self.assignment)
    }
}

impl From<Solution> for (OpenSet, Assignment) {
    fn from(solution: Solution) -> Self {
        solution.into_parts()
    }
}

/// Verifies the structural validity of `(open, assignment)` for `instance`.
///
/// Checks, in order: open-set length equals `M`, assignment length equals
/// `S`, at least one facility is open, and every assignment entry is in
/// range and references an open facility. Flag values are binary by
/// construction.
pub fn check_solution(
    instance: &Instance,
    open: &[bool],
    assignment: &[usize],
) -> Result<(), CheckError> {
    let m = instance.facility_count();
    let s = instance.satellite_count();
    if open.len() != m {
        return Err(CheckError::OpenSetLength {
            expected: m,
            actual: open.len(),
        });
    }
    if assignment.len() != s {
        return Err(CheckError::AssignmentLength {
            expected: s,
            actual: assignment.len(),
        });
    }
    if !open.iter().any(|&o| o) {
        return Err(CheckError::NoOpenFacility);
    }
    for (satellite, &facility) in assignment.iter().enumerate() {
        if facility >= m {
            return Err(CheckError::IndexOutOfRange {
                satellite,
                facility,
            });
        }
        if !open[facility] {
            return Err(CheckError::AssignedToClosed {
                satellite,
                facility,
            });
        }
    }
    Ok(())
}

/// `true` if [`check_solution`] passes.
pub fn is_valid(instance: &Instance, solution: &Solution) -> bool {
    check_solution(instance, solution.open(), solution.assignment()).is_ok()
}
