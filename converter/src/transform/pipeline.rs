//! High-level conversion API: CSV in, assessor XML out.
//!
//! # Example
//!
//! ```rust,ignore
//! use pyradiomics2xnat::{convert_csv, write_xml_file, AssessorInfo, ConversionOptions, GeneralInfo};
//! use std::path::Path;
//!
//! let options = ConversionOptions {
//!     assessor: AssessorInfo::new("https://xnat.example.org", "P1", "S1", "Session1"),
//!     general: GeneralInfo::new("3", "mask_uri"),
//! };
//! let result = convert_csv(Path::new("features.csv"), &options)?;
//! write_xml_file(Path::new("assessor.xml"), &result.xml)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::aggregator::{aggregate, count_unmapped};
use crate::error::{ConvertError, ConvertResult};
use crate::logs::{log_warning, log_warning_indent};
use crate::models::{AssessorInfo, GeneralInfo, MeasureSet};
use crate::parser::{parse_bytes_auto, parse_csv_file_auto, ParseResult, SkippedColumn};
use crate::xml::build_assessor_xml;

/// Inputs of one conversion besides the CSV itself
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub assessor: AssessorInfo,
    pub general: GeneralInfo,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            assessor: AssessorInfo::new("http://localhost", "", "", ""),
            general: GeneralInfo::new("", ""),
        }
    }
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// The assessor document
    pub xml: String,
    /// Measurements that went into the document
    pub measures: MeasureSet,
    /// Columns left out, including the silently skipped ones
    pub skipped: Vec<SkippedColumn>,
    /// Number of data rows in the CSV (only the last one is used)
    pub row_count: usize,
    pub encoding: String,
    pub delimiter: char,
    pub assessor_id: String,
    pub assessor_label: String,
}

impl ConversionResult {
    /// Number of columns dropped because the table has no entry for them.
    pub fn unmapped_count(&self) -> usize {
        count_unmapped(&self.skipped)
    }
}

/// Convert a pyradiomics CSV file.
pub fn convert_csv(path: &Path, options: &ConversionOptions) -> ConvertResult<ConversionResult> {
    let parsed = parse_csv_file_auto(path)?;
    convert_parsed(parsed, options)
}

/// Convert CSV bytes already in memory.
pub fn convert_bytes(bytes: &[u8], options: &ConversionOptions) -> ConvertResult<ConversionResult> {
    let parsed = parse_bytes_auto(bytes)?;
    convert_parsed(parsed, options)
}

fn convert_parsed(parsed: ParseResult, options: &ConversionOptions) -> ConvertResult<ConversionResult> {
    if parsed.row_count > 1 {
        log_warning(format!(
            "CSV has {} data rows, only the last one is converted",
            parsed.row_count
        ));
    }

    let aggregation = aggregate(&parsed, &options.general);
    for skipped in aggregation.reported() {
        log_warning_indent(format!("Skipping {}", skipped), 1);
    }

    let xml = build_assessor_xml(&options.assessor, &aggregation.measures)?;

    Ok(ConversionResult {
        xml,
        measures: aggregation.measures,
        skipped: aggregation.skipped,
        row_count: parsed.row_count,
        encoding: parsed.encoding,
        delimiter: parsed.delimiter,
        assessor_id: options.assessor.assessor_id(),
        assessor_label: options.assessor.assessor_label(),
    })
}

/// Write the document next to its destination, then move it into place.
///
/// The destination never holds a partially written document.
pub fn write_xml_file(path: &Path, xml: &str) -> ConvertResult<()> {
    let tmp = temp_path(path);
    let output_err = |source: std::io::Error| ConvertError::Output {
        path: path.display().to_string(),
        source,
    };

    fs::write(&tmp, xml).map_err(output_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(output_err(e));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "assessor.xml".into());
    name.push(".part");
    path.with_file_name(name)
}
