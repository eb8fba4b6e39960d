use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that stop a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input path does not exist.
    #[error("input file `{}` not found", .0.display())]
    MissingInput(PathBuf),

    /// A data line could not be split into the fixed VCF columns.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
