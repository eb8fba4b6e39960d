//! Converts VCF data lines into a seven-column tab-delimited variant report
//! (chromosome, id, gene name, gene id, condition, impact and clinical
//! significance) decoded from the INFO block.

pub mod compression;
pub mod error;
pub mod info;
pub mod record;
pub mod report;
pub mod significance;
pub mod status;

pub use error::ReportError;
pub use record::{parse_variant_line, ReportRow, VariantRecord};
pub use report::{run, write_report, Outcome, ReportOptions};
