//! Static mapping between pyradiomics column tokens and assessor element names.
//!
//! The table in [`table`] is the single source of truth. Two read-only views
//! are derived from it on first use:
//!
//! - csv model -> output model (e.g. `general_info` -> `generalInfo`)
//! - csv model -> (csv stat -> output stat) (e.g. `firstorder`/`10Percentile` -> `percentile10`)
//!
//! Lookups return `None` for unknown names; callers decide how to report them.

pub mod table;

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub use table::MAPPING_TABLE;

/// Filter token kept by the converter. Every other pyradiomics image type is dropped.
pub const ORIGINAL_FILTER: &str = "original";

/// Model token of the synthetic `general_info_<stat>` columns.
pub const GENERAL_INFO_CSV_MODEL: &str = "general_info";

/// Output model holding the general information block.
pub const GENERAL_INFO_MODEL: &str = "generalInfo";

/// Output stats whose values are emitted as raw CDATA blocks instead of escaped text.
pub const RAW_TEXT_STATS: &[&str] = &["enabledImageTypes", "generalSettings"];

/// One csv stat name and the element it becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatMapping {
    pub csv_stat: &'static str,
    pub output_stat: &'static str,
}

/// One model of the table with its ordered stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    pub csv_model: &'static str,
    pub output_model: &'static str,
    pub stats: &'static [StatMapping],
}

impl MappingEntry {
    /// Output stat names in declared order.
    pub fn output_stats(&self) -> impl Iterator<Item = &'static str> {
        self.stats.iter().map(|s| s.output_stat)
    }
}

static MODEL_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    MAPPING_TABLE
        .iter()
        .map(|entry| (entry.csv_model, entry.output_model))
        .collect()
});

static STAT_NAMES: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        MAPPING_TABLE
            .iter()
            .map(|entry| {
                let stats = entry
                    .stats
                    .iter()
                    .map(|s| (s.csv_stat, s.output_stat))
                    .collect();
                (entry.csv_model, stats)
            })
            .collect()
    });

/// Ordered view of the table.
pub fn entries() -> &'static [MappingEntry] {
    MAPPING_TABLE
}

/// Output model name for a csv model token.
pub fn output_model(csv_model: &str) -> Option<&'static str> {
    MODEL_NAMES.get(csv_model).copied()
}

/// Output stat name for a (csv model, csv stat) pair.
pub fn output_stat(csv_model: &str, csv_stat: &str) -> Option<&'static str> {
    STAT_NAMES
        .get(csv_model)
        .and_then(|stats| stats.get(csv_stat))
        .copied()
}

/// Whether the stat is written as a CDATA block.
pub fn is_raw_text_stat(output_stat: &str) -> bool {
    RAW_TEXT_STATS.contains(&output_stat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_model_lookup() {
        assert_eq!(output_model("general_info"), Some("generalInfo"));
        assert_eq!(output_model("glcm"), Some("glcm"));
        assert_eq!(output_model("wavelet"), None);
    }

    #[test]
    fn test_stat_lookup() {
        assert_eq!(output_stat("firstorder", "Mean"), Some("mean"));
        assert_eq!(output_stat("firstorder", "10Percentile"), Some("percentile10"));
        assert_eq!(output_stat("general_info", "BoundingBox"), Some("boundingBox"));
        assert_eq!(output_stat("glcm", "MCC"), Some("mcc"));
        assert_eq!(output_stat("firstorder", "Contrast"), None);
        assert_eq!(output_stat("unknown", "Mean"), None);
    }

    #[test]
    fn test_same_stat_in_different_models() {
        assert_eq!(output_stat("glcm", "Contrast"), Some("contrast"));
        assert_eq!(output_stat("ngtdm", "Contrast"), Some("contrast"));
        assert_eq!(output_stat("shape", "Contrast"), None);
    }

    #[test]
    fn test_table_has_unique_names() {
        let models: HashSet<_> = entries().iter().map(|e| e.output_model).collect();
        assert_eq!(models.len(), entries().len());

        for entry in entries() {
            let csv: HashSet<_> = entry.stats.iter().map(|s| s.csv_stat).collect();
            let out: HashSet<_> = entry.output_stats().collect();
            assert_eq!(csv.len(), entry.stats.len(), "duplicate csv stat in {}", entry.csv_model);
            assert_eq!(out.len(), entry.stats.len(), "duplicate output stat in {}", entry.csv_model);
        }
    }

    #[test]
    fn test_output_names_are_valid_xml_names() {
        for entry in entries() {
            for name in std::iter::once(entry.output_model).chain(entry.output_stats()) {
                let first = name.chars().next().unwrap();
                assert!(first.is_ascii_alphabetic(), "{} must start with a letter", name);
                assert!(name.chars().all(|c| c.is_ascii_alphanumeric()), "{}", name);
            }
        }
    }

    #[test]
    fn test_general_info_comes_first() {
        assert_eq!(entries()[0].output_model, GENERAL_INFO_MODEL);
        let stats: Vec<_> = entries()[0].output_stats().take(3).collect();
        assert_eq!(stats, vec!["scanId", "maskFile", "filter"]);
    }

    #[test]
    fn test_raw_text_stats_exist_in_table() {
        for raw in RAW_TEXT_STATS {
            assert!(entries()[0].output_stats().any(|s| s == *raw));
            assert!(is_raw_text_stat(raw));
        }
        assert!(!is_raw_text_stat("boundingBox"));
    }
}
