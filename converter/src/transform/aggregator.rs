//! Build the [`MeasureSet`] of a run from the parsed CSV row.
//!
//! ```text
//! general_info seed ──┐
//!                     ├──▶ resolve_column ──▶ MeasureSet[model][stat] = value
//! CSV (header, value) ┘          │
//!                                └──▶ SkippedColumn (reported, never inserted)
//! ```

use crate::mapping::{self, GENERAL_INFO_CSV_MODEL};
use crate::models::{GeneralInfo, MeasureSet};
use crate::parser::{resolve_column, ParseResult, SkipReason, SkippedColumn};

/// Measurements plus the columns that were dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub measures: MeasureSet,
    pub skipped: Vec<SkippedColumn>,
}

impl Aggregation {
    /// Skipped columns worth telling the user about.
    pub fn reported(&self) -> impl Iterator<Item = &SkippedColumn> {
        self.skipped.iter().filter(|s| !s.reason.is_silent())
    }
}

/// Seed `generalInfo` with the scan, mask and filter identifiers.
pub fn seed_general_info(measures: &mut MeasureSet, info: &GeneralInfo) {
    let model = mapping::output_model(GENERAL_INFO_CSV_MODEL);
    for (csv_stat, value) in info.fields() {
        if let (Some(model), Some(stat)) = (model, mapping::output_stat(GENERAL_INFO_CSV_MODEL, csv_stat)) {
            measures.insert(model, stat, value);
        }
    }
}

/// Resolve every `(header, value)` pair and record the mapped ones.
///
/// A later column with the same destination replaces an earlier one.
pub fn aggregate_columns<'a, I>(measures: &mut MeasureSet, columns: I) -> Vec<SkippedColumn>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut skipped = Vec::new();

    for (name, value) in columns {
        match resolve_column(name) {
            Ok(resolved) => measures.insert(resolved.output_model, resolved.output_stat, value),
            Err(reason) => skipped.push(SkippedColumn {
                column: name.to_string(),
                reason,
            }),
        }
    }

    skipped
}

/// Full aggregation of one parsed CSV.
pub fn aggregate(parsed: &ParseResult, info: &GeneralInfo) -> Aggregation {
    let mut measures = MeasureSet::new();
    seed_general_info(&mut measures, info);
    let skipped = aggregate_columns(&mut measures, parsed.columns());

    Aggregation { measures, skipped }
}

/// Number of columns dropped for lack of a mapping.
pub fn count_unmapped(skipped: &[SkippedColumn]) -> usize {
    skipped
        .iter()
        .filter(|s| {
            matches!(
                s.reason,
                SkipReason::UnmappedModel(_) | SkipReason::UnmappedStat { .. }
            )
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(headers: &[&str], row: &[&str]) -> ParseResult {
        ParseResult {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            row: row.iter().map(|s| s.to_string()).collect(),
            row_count: 1,
            encoding: "utf-8".to_string(),
            delimiter: ',',
        }
    }

    #[test]
    fn test_general_info_seeded() {
        let result = aggregate(&parsed(&[], &[]), &GeneralInfo::new("3", "mask_uri"));

        assert_eq!(result.measures.get("generalInfo", "scanId"), Some("3"));
        assert_eq!(result.measures.get("generalInfo", "maskFile"), Some("mask_uri"));
        assert_eq!(result.measures.get("generalInfo", "filter"), Some("original"));
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_columns_are_mapped() {
        let p = parsed(
            &["Image", "Mask", "original_firstorder_Mean", "general_info_BoundingBox"],
            &["img.nii", "mask.nii", "12.5", "[0,0,0,10,10,10]"],
        );
        let result = aggregate(&p, &GeneralInfo::new("3", "mask_uri"));

        assert_eq!(result.measures.get("firstorder", "mean"), Some("12.5"));
        assert_eq!(result.measures.get("generalInfo", "boundingBox"), Some("[0,0,0,10,10,10]"));
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.reported().count(), 0);
    }

    #[test]
    fn test_other_filters_dropped() {
        let p = parsed(
            &["wavelet-HHH_firstorder_Mean", "log-sigma-3-0-mm-3D_glcm_Id"],
            &["1", "2"],
        );
        let result = aggregate(&p, &GeneralInfo::new("1", "m"));

        assert!(!result.measures.has_values("firstorder"));
        assert!(!result.measures.has_values("glcm"));
        assert_eq!(result.reported().count(), 0);
    }

    #[test]
    fn test_unmapped_and_malformed_reported() {
        let p = parsed(
            &["original_firstorder_Bogus", "original_texture_Mean", "oops", "original_shape_Sphericity"],
            &["1", "2", "3", "0.8"],
        );
        let result = aggregate(&p, &GeneralInfo::new("1", "m"));

        let reported: Vec<_> = result.reported().map(|s| s.column.as_str()).collect();
        assert_eq!(reported, vec!["original_firstorder_Bogus", "original_texture_Mean", "oops"]);
        assert_eq!(count_unmapped(&result.skipped), 2);
        assert_eq!(result.measures.get("shape", "sphericity"), Some("0.8"));
        // generalInfo seed + sphericity
        assert_eq!(result.measures.len(), 4);
    }

    #[test]
    fn test_later_column_overwrites() {
        let mut measures = MeasureSet::new();
        let skipped = aggregate_columns(
            &mut measures,
            [("original_glcm_Id", "1"), ("original_glcm_Id", "2")],
        );
        assert!(skipped.is_empty());
        assert_eq!(measures.get("glcm", "id"), Some("2"));
    }

    #[test]
    fn test_csv_general_info_overrides_seed() {
        let p = parsed(&["general_info_scanId"], &["99"]);
        let result = aggregate(&p, &GeneralInfo::new("3", "m"));
        assert_eq!(result.measures.get("generalInfo", "scanId"), Some("99"));
    }
}
