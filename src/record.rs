use crate::{
    error::{self, ReportError},
    info::InfoFields,
    significance::{self, UNKNOWN},
};
use std::fmt::{Display, Error, Formatter};

/// Columns every data line must carry before the sample columns.
pub const FIXED_COLUMNS: &[&str] = &[
    "CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO", "FORMAT",
];

pub const ANN_KEY: &str = "ANN";
pub const CONDITION_KEY: &str = "CLNDBN";
pub const SIGNIFICANCE_KEY: &str = "CLNSIG";

/// A data line of the VCF file, split into its columns.
///
/// Columns are kept as text; nothing beyond the INFO block is interpreted.
#[derive(Debug, PartialEq)]
pub struct VariantRecord {
    pub chromosome: String,
    pub position: String,
    pub id: String,
    pub reference: String,
    pub alternative: String,
    pub quality: String,
    pub filter: String,
    pub info: InfoFields,
    pub format: String,
    pub samples: Vec<String>,
}

impl VariantRecord {
    /// Splits one data line. `line_number` is only used to tag errors.
    pub fn new(line_str: &str, line_number: usize) -> error::Result<VariantRecord> {
        let parts: Vec<&str> = line_str.trim().split('\t').collect();
        if parts.len() < FIXED_COLUMNS.len() {
            return Err(ReportError::MalformedRecord {
                line: line_number,
                reason: format!(
                    "expected at least {} columns, found {}",
                    FIXED_COLUMNS.len(),
                    parts.len()
                ),
            });
        }

        Ok(VariantRecord {
            chromosome: parts[0].to_string(),
            position: parts[1].to_string(),
            id: parts[2].to_string(),
            reference: parts[3].to_string(),
            alternative: parts[4].to_string(),
            quality: parts[5].to_string(),
            filter: parts[6].to_string(),
            info: parts[7].parse()?,
            format: parts[8].to_string(),
            samples: parts[9..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// The first entry of the `ANN` field, if any.
    pub fn annotation(&self) -> Annotation {
        match self.info.get(ANN_KEY) {
            Some(ann) => Annotation::from_entries(ann),
            None => Annotation::default(),
        }
    }

    /// First condition listed in `CLNDBN`.
    pub fn condition(&self) -> String {
        let condition = self
            .info
            .get(CONDITION_KEY)
            .and_then(|c| c.split('|').next())
            .unwrap_or(UNKNOWN);
        or_unknown(condition)
    }

    /// Decoded `CLNSIG` label.
    pub fn clinical_significance(&self) -> &'static str {
        match self.info.get(SIGNIFICANCE_KEY) {
            Some(raw) => significance::decode(raw),
            None => UNKNOWN,
        }
    }
}

/// Functional annotation taken from the first `ANN` entry.
///
/// Pipe-delimited sub-fields: index 2 is the impact, 3 the gene name and 4 the
/// gene id.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub impact: String,
    pub gene_name: String,
    pub gene_id: String,
}

impl Default for Annotation {
    fn default() -> Self {
        Annotation {
            impact: UNKNOWN.to_string(),
            gene_name: UNKNOWN.to_string(),
            gene_id: UNKNOWN.to_string(),
        }
    }
}

impl Annotation {
    /// Decodes a comma-separated `ANN` value, ignoring all but the first entry.
    pub fn from_entries(ann_str: &str) -> Annotation {
        let first = ann_str.split(',').next().unwrap_or_default();
        let parts: Vec<&str> = first.split('|').collect();
        let field = |index: usize| {
            parts
                .get(index)
                .map_or(UNKNOWN.to_string(), |p| or_unknown(p))
        };

        Annotation {
            impact: field(2),
            gene_name: field(3),
            gene_id: field(4),
        }
    }
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub chromosome: String,
    pub variant_id: String,
    pub gene_name: String,
    pub gene_id: String,
    pub condition: String,
    pub impact: String,
    pub clinical_significance: String,
}

impl ReportRow {
    pub fn from_record(record: &VariantRecord) -> ReportRow {
        let annotation = record.annotation();
        ReportRow {
            chromosome: or_unknown(&record.chromosome),
            variant_id: or_unknown(&record.id),
            gene_name: annotation.gene_name,
            gene_id: annotation.gene_id,
            condition: record.condition(),
            impact: annotation.impact,
            clinical_significance: record.clinical_significance().to_string(),
        }
    }

    pub fn fields(&self) -> [&str; 7] {
        [
            self.chromosome.as_str(),
            self.variant_id.as_str(),
            self.gene_name.as_str(),
            self.gene_id.as_str(),
            self.condition.as_str(),
            self.impact.as_str(),
            self.clinical_significance.as_str(),
        ]
    }
}

impl Display for ReportRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.fields().join("\t"))
    }
}

/// Parses one data line straight into its report row.
pub fn parse_variant_line(line_str: &str, line_number: usize) -> error::Result<ReportRow> {
    let record = VariantRecord::new(line_str, line_number)?;
    Ok(ReportRow::from_record(&record))
}
