//! Column name parsing and resolution against the mapping table.
//!
//! pyradiomics names its columns `<filter>_<model>_<stat>`, for example
//! `original_glcm_Contrast` or `wavelet-LLH_firstorder_Mean`. Diagnostic columns
//! are named `general_info_<stat>` and are collapsed onto the `general_info`
//! model.

use crate::mapping::{self, GENERAL_INFO_CSV_MODEL, ORIGINAL_FILTER};

/// Columns pyradiomics always writes that carry no measurement.
pub const RESERVED_COLUMNS: &[&str] = &["Image", "Mask"];

const GENERAL_INFO_PREFIX: &str = "general_info_";
const GENERAL_FILTER: &str = "general";

/// A column header split into its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnName {
    pub filter: String,
    pub model: String,
    pub stat: String,
}

/// A column that survived filtering and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub output_model: &'static str,
    pub output_stat: &'static str,
}

/// Why a column was left out of the measure set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `Image` or `Mask`.
    Reserved,
    /// Name does not split into exactly three tokens.
    Malformed { tokens: usize },
    /// Filter other than `original`.
    UnsupportedFilter(String),
    /// Model token absent from the mapping table.
    UnmappedModel(String),
    /// Stat token absent from the model's mapping.
    UnmappedStat { model: String, stat: String },
}

impl SkipReason {
    /// Silent skips are expected for every pyradiomics export and are not reported.
    pub fn is_silent(&self) -> bool {
        matches!(self, SkipReason::Reserved | SkipReason::UnsupportedFilter(_))
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Reserved => write!(f, "reserved column"),
            SkipReason::Malformed { tokens } => {
                write!(f, "expected <filter>_<model>_<stat>, found {} token(s)", tokens)
            }
            SkipReason::UnsupportedFilter(filter) => write!(f, "filter '{}' is not converted", filter),
            SkipReason::UnmappedModel(model) => write!(f, "no mapping for model '{}'", model),
            SkipReason::UnmappedStat { model, stat } => {
                write!(f, "no mapping for stat '{}' in model '{}'", stat, model)
            }
        }
    }
}

/// A dropped column and the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedColumn {
    pub column: String,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Column '{}': {}", self.column, self.reason)
    }
}

/// Split a header into filter, model and stat.
///
/// # Example
/// ```ignore
/// let col = parse_column_name("original_glcm_Contrast").unwrap();
/// assert_eq!(col.model, "glcm");
///
/// let info = parse_column_name("general_info_BoundingBox").unwrap();
/// assert_eq!(info.model, "general_info");
/// ```
pub fn parse_column_name(name: &str) -> Result<ColumnName, SkipReason> {
    if RESERVED_COLUMNS.contains(&name) {
        return Err(SkipReason::Reserved);
    }

    if let Some(stat) = name.strip_prefix(GENERAL_INFO_PREFIX) {
        if stat.is_empty() {
            return Err(SkipReason::Malformed { tokens: 2 });
        }
        return Ok(ColumnName {
            filter: GENERAL_FILTER.to_string(),
            model: GENERAL_INFO_CSV_MODEL.to_string(),
            stat: stat.to_string(),
        });
    }

    let tokens: Vec<&str> = name.split('_').collect();
    match tokens.as_slice() {
        [filter, model, stat] if !filter.is_empty() && !model.is_empty() && !stat.is_empty() => {
            Ok(ColumnName {
                filter: filter.to_string(),
                model: model.to_string(),
                stat: stat.to_string(),
            })
        }
        _ => Err(SkipReason::Malformed { tokens: tokens.len() }),
    }
}

/// Parse a header and look up its output element names.
pub fn resolve_column(name: &str) -> Result<ResolvedColumn, SkipReason> {
    let column = parse_column_name(name)?;

    if column.filter != ORIGINAL_FILTER && column.model != GENERAL_INFO_CSV_MODEL {
        return Err(SkipReason::UnsupportedFilter(column.filter));
    }

    let output_model = mapping::output_model(&column.model)
        .ok_or_else(|| SkipReason::UnmappedModel(column.model.clone()))?;
    let output_stat = mapping::output_stat(&column.model, &column.stat).ok_or_else(|| {
        SkipReason::UnmappedStat {
            model: column.model.clone(),
            stat: column.stat.clone(),
        }
    })?;

    Ok(ResolvedColumn {
        output_model,
        output_stat,
    })
}
