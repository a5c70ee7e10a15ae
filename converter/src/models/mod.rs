//! Domain models for the conversion.
//!
//! - [`MeasureSet`] - measurements keyed by output model then output stat
//! - [`GeneralInfo`] - scan and mask identifiers seeded into `generalInfo`
//! - [`AssessorInfo`] - XNAT identifiers for the assessor document

use chrono::{DateTime, Local};
use std::collections::HashMap;

use crate::mapping::ORIGINAL_FILTER;

// =============================================================================
// General Info
// =============================================================================

/// Identifiers merged into the `generalInfo` block before the CSV is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralInfo {
    /// XNAT scan the features were computed on.
    pub scan_id: String,
    /// URI of the segmentation mask.
    pub mask_file: String,
    /// Image filter of the retained features. Always `original`.
    pub filter: String,
}

impl GeneralInfo {
    pub fn new(scan_id: impl Into<String>, mask_file: impl Into<String>) -> Self {
        Self {
            scan_id: scan_id.into(),
            mask_file: mask_file.into(),
            filter: ORIGINAL_FILTER.to_string(),
        }
    }

    /// `(csv stat, value)` pairs as they appear in the mapping table.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("scanId", self.scan_id.as_str()),
            ("maskFile", self.mask_file.as_str()),
            ("filter", self.filter.as_str()),
        ]
    }
}

// =============================================================================
// Assessor Info
// =============================================================================

/// XNAT side of the document: where it goes and what it is called.
#[derive(Debug, Clone)]
pub struct AssessorInfo {
    /// XNAT server base URL, used to locate the schemas.
    pub xnat_host: String,
    pub project: String,
    /// Parent image session ID.
    pub session_id: String,
    pub session_label: String,
    /// Run time embedded in the generated ID and label.
    pub timestamp: DateTime<Local>,
}

impl AssessorInfo {
    pub fn new(
        xnat_host: impl Into<String>,
        project: impl Into<String>,
        session_id: impl Into<String>,
        session_label: impl Into<String>,
    ) -> Self {
        Self {
            xnat_host: xnat_host.into(),
            project: project.into(),
            session_id: session_id.into(),
            session_label: session_label.into(),
            timestamp: Local::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Run time with microsecond precision, e.g. `20240131235959123456`.
    pub fn timestamp_token(&self) -> String {
        self.timestamp.format("%Y%m%d%H%M%S%6f").to_string()
    }

    /// `{sessionId}_pyradiomics_{timestamp}`
    pub fn assessor_id(&self) -> String {
        format!("{}_pyradiomics_{}", self.session_id, self.timestamp_token())
    }

    /// `{sessionLabel}_pyradiomics_{timestamp}`
    pub fn assessor_label(&self) -> String {
        format!("{}_pyradiomics_{}", self.session_label, self.timestamp_token())
    }

    /// Host without trailing slashes.
    pub fn host(&self) -> &str {
        self.xnat_host.trim_end_matches('/')
    }
}

// =============================================================================
// Measure Set
// =============================================================================

/// Measurements of one run, keyed by output model then output stat.
///
/// Iteration order of this map is never used for output; the emitter walks
/// the mapping table instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasureSet {
    models: HashMap<&'static str, HashMap<&'static str, String>>,
}

impl MeasureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous value at the same place.
    ///
    /// Names are `'static` because they only ever come from the mapping table.
    pub(crate) fn insert(&mut self, model: &'static str, stat: &'static str, value: impl Into<String>) {
        self.models.entry(model).or_default().insert(stat, value.into());
    }

    /// Value of a stat, if present and non-empty.
    pub fn get(&self, model: &str, stat: &str) -> Option<&str> {
        self.models
            .get(model)
            .and_then(|stats| stats.get(stat))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Whether the model has at least one non-empty value.
    pub fn has_values(&self, model: &str) -> bool {
        self.models
            .get(model)
            .is_some_and(|stats| stats.values().any(|v| !v.is_empty()))
    }

    /// Number of non-empty values across all models.
    pub fn len(&self) -> usize {
        self.models
            .values()
            .flat_map(|stats| stats.values())
            .filter(|v| !v.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 5, 14, 7, 9)
            .unwrap()
            + chrono::Duration::microseconds(42)
    }

    #[test]
    fn test_general_info_defaults_to_original() {
        let info = GeneralInfo::new("3", "mask_uri");
        assert_eq!(info.filter, "original");
        assert_eq!(info.fields()[0], ("scanId", "3"));
    }

    #[test]
    fn test_assessor_id_and_label() {
        let info = AssessorInfo::new("https://xnat.example.org/", "P1", "S1", "Session1")
            .with_timestamp(fixed_time());

        assert_eq!(info.timestamp_token(), "20240305140709000042");
        assert_eq!(info.assessor_id(), "S1_pyradiomics_20240305140709000042");
        assert_eq!(info.assessor_label(), "Session1_pyradiomics_20240305140709000042");
        assert_eq!(info.host(), "https://xnat.example.org");
    }

    #[test]
    fn test_measure_set_overwrite() {
        let mut set = MeasureSet::new();
        set.insert("firstorder", "mean", "1");
        set.insert("firstorder", "mean", "2");
        assert_eq!(set.get("firstorder", "mean"), Some("2"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let mut set = MeasureSet::new();
        set.insert("glcm", "contrast", "");
        assert_eq!(set.get("glcm", "contrast"), None);
        assert!(!set.has_values("glcm"));
        assert!(set.is_empty());
    }
}
