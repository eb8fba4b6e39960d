use crate::{
    compression::open_input,
    error::{self, ReportError},
    record::{parse_variant_line, ReportRow},
};
use std::{
    fs::File,
    io::{BufRead, BufWriter, Write},
    path::PathBuf,
};

pub const REPORT_HEADER: &str =
    "Chromosome\tVariant_ID\tGene_Name\tGene_ID\tCondition\tImpact\tClinical_significance";

/// Where a report is read from and written to.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Written(usize),
    Empty,
}

pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    /// Writes the column header line.
    pub fn new(mut writer: W) -> std::io::Result<ReportWriter<W>> {
        writeln!(writer, "{}", REPORT_HEADER)?;
        Ok(ReportWriter { writer })
    }

    pub fn write_row(&mut self, row: &ReportRow) -> std::io::Result<()> {
        writeln!(self.writer, "{}", row)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Streams every data line of `reader` into `writer` and returns the number of
/// rows written. Lines starting with `#` are skipped.
///
/// Rows already written stay in `writer` when a line fails to parse.
pub fn write_report<R: BufRead, W: Write>(mut reader: R, writer: W) -> error::Result<usize> {
    let mut report = ReportWriter::new(writer)?;
    let result = copy_rows(&mut reader, &mut report);
    report.flush()?;
    result
}

fn copy_rows<R: BufRead, W: Write>(
    reader: &mut R,
    report: &mut ReportWriter<W>,
) -> error::Result<usize> {
    let mut line = String::new();
    let mut line_number = 0;
    let mut variant_count = 0;
    loop {
        line.clear();
        let read_bytes = reader.read_line(&mut line)?;
        if read_bytes == 0 {
            break;
        }
        line_number += 1;

        if line.starts_with('#') {
            continue;
        }

        let row = parse_variant_line(&line, line_number)?;
        log::trace!("line {}: {}", line_number, row);
        report.write_row(&row)?;
        variant_count += 1;
    }
    Ok(variant_count)
}

/// Converts `options.input` into a report at `options.output`.
pub fn run(options: &ReportOptions) -> error::Result<Outcome> {
    if !options.input.exists() {
        return Err(ReportError::MissingInput(options.input.clone()));
    }

    log::debug!(
        "writing report for {} to {}",
        options.input.display(),
        options.output.display()
    );
    let reader = open_input(&options.input)?;
    let writer = BufWriter::new(File::create(&options.output)?);
    let variant_count = write_report(reader, writer)?;

    if variant_count > 0 {
        Ok(Outcome::Written(variant_count))
    } else {
        Ok(Outcome::Empty)
    }
}
