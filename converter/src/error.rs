//! Error types for the pyradiomics to XNAT conversion.
//!
//! - [`CsvError`] - reading and decoding the pyradiomics CSV
//! - [`XmlError`] - building the assessor document
//! - [`ConvertError`] - top-level errors returned by the pipeline
//!
//! Column-level problems (unmapped model, unknown stat, malformed header) are
//! not errors: they are reported as [`crate::parser::SkippedColumn`] entries and
//! the conversion carries on.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode the file contents.
    #[error("Failed to decode content: {0}")]
    Encoding(String),

    /// Invalid CSV format.
    #[error("Invalid CSV format: {0}")]
    Parse(#[from] csv::Error),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,

    /// Header present but no measurement row.
    #[error("CSV has a header but no data rows")]
    NoDataRows,
}

// =============================================================================
// XML Errors
// =============================================================================

/// Errors while writing the assessor XML.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The XML writer rejected an event.
    #[error("Failed to write XML: {0}")]
    Write(#[from] std::io::Error),

    /// quick-xml reported a malformed event.
    #[error("Invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The serialized document was not valid UTF-8.
    #[error("Generated XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert_csv`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// CSV input error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// XML output error.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// Failed to write the output document.
    #[error("Failed to write '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for XML operations.
pub type XmlResult<T> = Result<T, XmlError>;

/// Result type for pipeline operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
