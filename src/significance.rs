/// ClinVar CLNSIG codes and their labels.
pub const CLINICAL_SIGNIFICANCE: &[(&str, &str)] = &[
    ("0", "Uncertain significance"),
    ("1", "Not provided"),
    ("2", "Benign"),
    ("3", "Likely benign"),
    ("4", "Likely pathogenic"),
    ("5", "Pathogenic"),
    ("6", "Drug response"),
    ("7", "Histocompatibility"),
    ("255", "Other"),
];

pub const UNKNOWN: &str = "Unknown";

/// Looks up the label of a single code.
pub fn describe(code: &str) -> Option<&'static str> {
    CLINICAL_SIGNIFICANCE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Decodes a raw CLNSIG value. Only the code before the first `|` counts.
pub fn decode(raw: &str) -> &'static str {
    let code = raw.split('|').next().unwrap_or_default();
    describe(code).unwrap_or(UNKNOWN)
}
