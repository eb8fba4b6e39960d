use crate::{error::ReportError, report::Outcome};

/// Process exit codes.
///
/// The legacy codes share `1` between usage errors, empty reports and
/// malformed records. `distinct` gives the last two codes of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExitStatus {
    Success,
    Usage,
    MissingInput,
    Empty,
    Malformed,
    Failure,
}

impl ExitStatus {
    pub fn from_outcome(outcome: &Outcome) -> ExitStatus {
        match outcome {
            Outcome::Written(_) => ExitStatus::Success,
            Outcome::Empty => ExitStatus::Empty,
        }
    }

    pub fn from_error(error: &ReportError) -> ExitStatus {
        match error {
            ReportError::MissingInput(_) => ExitStatus::MissingInput,
            ReportError::MalformedRecord { .. } => ExitStatus::Malformed,
            _ => ExitStatus::Failure,
        }
    }

    pub fn code(self, distinct: bool) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 1,
            ExitStatus::MissingInput => 2,
            ExitStatus::Empty if distinct => 3,
            ExitStatus::Malformed if distinct => 4,
            ExitStatus::Empty | ExitStatus::Malformed | ExitStatus::Failure => 1,
        }
    }
}
