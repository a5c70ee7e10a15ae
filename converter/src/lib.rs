//! # pyradiomics2xnat - radiomics features as XNAT assessors
//!
//! Converts one row of a pyradiomics feature CSV into the XML document of an
//! XNAT radiomics assessor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Aggregate  │────▶│ Assessor XML│
//! │ (last row)  │     │ (map names) │     │ (MeasureSet)│     │ (table order│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Column names follow `<filter>_<model>_<stat>`. Only the `original` filter
//! and the `general_info_<stat>` columns are converted; everything else is
//! skipped. Element order always follows the [`mapping`] table.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pyradiomics2xnat::{convert_csv, AssessorInfo, ConversionOptions, GeneralInfo};
//! use std::path::Path;
//!
//! let options = ConversionOptions {
//!     assessor: AssessorInfo::new("https://xnat.example.org", "P1", "S1", "Session1"),
//!     general: GeneralInfo::new("3", "mask_uri"),
//! };
//! let result = convert_csv(Path::new("features.csv"), &options).unwrap();
//! println!("{}", result.xml);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`mapping`] - Static pyradiomics to XNAT name table
//! - [`models`] - MeasureSet, GeneralInfo, AssessorInfo
//! - [`parser`] - CSV reading and column name resolution
//! - [`transform`] - Aggregation and the conversion pipeline
//! - [`xml`] - Assessor document emitter
//! - [`logs`] - Console logging

// Core modules
pub mod error;
pub mod logs;
pub mod mapping;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod xml;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, ConvertResult, CsvError, XmlError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{AssessorInfo, GeneralInfo, MeasureSet};

// =============================================================================
// Re-exports - Mapping
// =============================================================================

pub use mapping::{MappingEntry, StatMapping, MAPPING_TABLE};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    parse_bytes_auto, parse_column_name, parse_csv_file_auto, resolve_column, ColumnName,
    ParseResult, SkipReason, SkippedColumn,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    convert_bytes, convert_csv, write_xml_file, ConversionOptions, ConversionResult,
};

// =============================================================================
// Re-exports - XML
// =============================================================================

pub use xml::build_assessor_xml;
