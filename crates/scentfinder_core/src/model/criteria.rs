//! Canonical recommendation query.
//!
//! # Responsibility
//! - Define the `Criteria` payload sent to `recommendByCriteria`.
//! - Normalize raw UI input (sentinels, blanks, limits) into that shape.
//!
//! # Invariants
//! - `notes` is deduplicated, keeping first occurrence order.
//! - `gender`/`family` are either concrete values or absent, never `All`.
//! - `limit` is always positive.
//! - Construction normalizes; it never rejects input.

use crate::model::fragrance::{Gender, ALL_FILTER};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result-set size used when the caller gives no usable limit.
pub const DEFAULT_CRITERIA_LIMIT: u32 = 50;

/// Recommendation query built from one user interaction.
///
/// Decoding goes through [`build_criteria`], so a stored or received payload
/// is normalized exactly like fresh UI input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CriteriaPayload")]
pub struct Criteria {
    pub notes: Vec<String>,
    /// Absent means "any gender"; omitted from the wire payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Absent means "any family"; omitted from the wire payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub limit: u32,
}

#[derive(Deserialize)]
struct CriteriaPayload {
    #[serde(default)]
    notes: Vec<String>,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    family: Option<String>,
    #[serde(default)]
    limit: Option<i64>,
}

impl From<CriteriaPayload> for Criteria {
    fn from(value: CriteriaPayload) -> Self {
        build_criteria(
            value.notes,
            value.gender,
            value.family.as_deref(),
            value.limit,
        )
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            gender: None,
            family: None,
            limit: DEFAULT_CRITERIA_LIMIT,
        }
    }
}

impl Criteria {
    /// An empty note set means "do not call the recommendation service",
    /// not "match everything".
    pub fn is_empty_query(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns whether any preference signal survived normalization.
    pub fn has_preferences(&self) -> bool {
        !self.notes.is_empty() || self.gender.is_some() || self.family.is_some()
    }
}

/// Builds a normalized `Criteria` from raw selection and filter input.
///
/// - Note names are deduplicated (first occurrence wins); blank names are dropped.
/// - `Gender::All` and family `"All"` (or blank) become "omit filter".
/// - `limit` falls back to [`DEFAULT_CRITERIA_LIMIT`] when absent or non-positive.
pub fn build_criteria<I, S>(
    selected_notes: I,
    gender: Option<Gender>,
    family: Option<&str>,
    limit: Option<i64>,
) -> Criteria
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Criteria {
        notes: dedup_note_names(selected_notes),
        gender: gender.and_then(Gender::as_filter),
        family: normalize_filter_value(family),
        limit: normalize_criteria_limit(limit),
    }
}

/// Deduplicates note names, keeping first-seen order.
pub fn dedup_note_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for name in names {
        let name = name.as_ref();
        if name.trim().is_empty() {
            continue;
        }
        if seen.insert(name.to_string()) {
            unique.push(name.to_string());
        }
    }
    unique
}

/// Maps blank values and the `All` sentinel to `None`.
pub fn normalize_filter_value(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed == ALL_FILTER {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes a raw limit to a positive value.
pub fn normalize_criteria_limit(limit: Option<i64>) -> u32 {
    match limit {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => DEFAULT_CRITERIA_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::{dedup_note_names, normalize_criteria_limit, normalize_filter_value};

    #[test]
    fn dedup_keeps_first_occurrence_and_is_case_sensitive() {
        let names = dedup_note_names(["Rose", "Oud", "Rose", "rose", " "]);
        assert_eq!(names, vec!["Rose", "Oud", "rose"]);
    }

    #[test]
    fn filter_value_drops_sentinel_and_blank() {
        assert_eq!(normalize_filter_value(Some("All")), None);
        assert_eq!(normalize_filter_value(Some("   ")), None);
        assert_eq!(normalize_filter_value(None), None);
        assert_eq!(
            normalize_filter_value(Some(" Woody ")),
            Some("Woody".to_string())
        );
    }

    #[test]
    fn limit_falls_back_for_non_positive_values() {
        assert_eq!(normalize_criteria_limit(None), 50);
        assert_eq!(normalize_criteria_limit(Some(0)), 50);
        assert_eq!(normalize_criteria_limit(Some(-3)), 50);
        assert_eq!(normalize_criteria_limit(Some(12)), 12);
        assert_eq!(normalize_criteria_limit(Some(i64::MAX)), u32::MAX);
    }
}
