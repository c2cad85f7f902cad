//! High-level, ergonomic library API: convert single numerals, normalize raw
//! user input, and convert batches into serializable records. Prefer these
//! entrypoints over the low-level `core` modules when integrating romanus.
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::core;
use crate::error::{Error, ErrorCategory, Result};

/// Convert an upper-case Roman numeral to its integer value.
pub fn convert(input: &str) -> Result<u32> {
    core::parse(input)
}

/// Like [`convert`], with a missing input reported as [`Error::NullInput`].
pub fn convert_option(input: Option<&str>) -> Result<u32> {
    match input {
        Some(s) => convert(s),
        None => Err(Error::NullInput),
    }
}

/// Trim surrounding whitespace and fold to upper case.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Outcome of converting one input, suitable for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,
}

impl ConversionRecord {
    pub fn from_result(input: &str, result: &Result<u32>) -> Self {
        match result {
            Ok(value) => Self {
                input: input.to_string(),
                value: Some(*value),
                error: None,
                category: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                value: None,
                error: Some(e.to_string()),
                category: Some(e.category()),
            },
        }
    }
}

/// Summary of a batch conversion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub converted: usize,
    pub rejected: usize,
    /// Inputs that hit an internal invariant; also counted in `rejected`
    pub internal: usize,
    pub records: Vec<ConversionRecord>,
}

impl BatchReport {
    pub fn all_converted(&self) -> bool {
        self.rejected == 0
    }
}

/// Normalize and convert every input, collecting one record per item.
pub fn convert_batch<I, S>(inputs: I) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();

    for raw in inputs {
        let input = normalize(raw.as_ref());
        let result = convert(&input);
        match &result {
            Ok(value) => {
                info!("Converted {} -> {}", input, value);
                report.converted += 1;
            }
            Err(e) if e.is_internal() => {
                error!("Internal invariant violated for {:?}: {}", input, e);
                report.rejected += 1;
                report.internal += 1;
            }
            Err(e) => {
                warn!("Rejected {:?}: {}", input, e);
                report.rejected += 1;
            }
        }
        report.records.push(ConversionRecord::from_result(&input, &result));
    }

    info!(
        "Batch complete: converted={} rejected={} internal={}",
        report.converted, report.rejected, report.internal
    );
    report
}
