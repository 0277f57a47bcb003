//! Error types for instance loading and solution checking.

use thiserror::Error;

/// Failure to build an [`Instance`](crate::instance::Instance) from text or raw data.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("missing header line `M S`")]
    MissingHeader,
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error("expected {expected}, found end of input")]
    MissingLine { expected: &'static str },
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: expected {expected} values, found {found}")]
    MissingValues {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("instance must contain at least one facility")]
    NoFacilities,
    #[error("{what}: expected length {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{what} {index} has a non-finite value")]
    NonFinite { what: &'static str, index: usize },
    #[error("facility {facility} is too far from satellite {satellite} for a finite distance")]
    UnboundedDistance { facility: usize, satellite: usize },
    #[error("facility {index} has negative opening cost {cost}")]
    NegativeCost { index: usize, cost: f64 },
}

/// Structural defect in a candidate `(open-set, assignment)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("open-set length {actual} does not match facility count {expected}")]
    OpenSetLength { expected: usize, actual: usize },
    #[error("assignment length {actual} does not match satellite count {expected}")]
    AssignmentLength { expected: usize, actual: usize },
    #[error("no facility is open")]
    NoOpenFacility,
    #[error("satellite {satellite} assigned to facility {facility}, which does not exist")]
    IndexOutOfRange { satellite: usize, facility: usize },
    #[error("satellite {satellite} assigned to closed facility {facility}")]
    AssignedToClosed { satellite: usize, facility: usize },
}

pub type Result<T> = std::result::Result<T, InstanceError>;
