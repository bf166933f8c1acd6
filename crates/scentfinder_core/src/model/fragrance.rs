//! Fragrance catalog records.
//!
//! # Responsibility
//! - Define the fragrance record fetched from the recommendation surface.
//! - Define scored result envelopes and list filters for that surface.
//!
//! # Invariants
//! - `Fragrance::id` is the stable catalog identity.
//! - Filters never carry the `All` sentinel or blank values.

use crate::model::criteria::normalize_filter_value;
use crate::model::note::NoteRef;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Stable catalog identifier for a fragrance.
pub type FragranceId = i64;

/// Sentinel filter value meaning "omit this filter".
pub const ALL_FILTER: &str = "All";

/// Target audience of a fragrance.
///
/// `All` only appears as a filter sentinel; it is normalized away before a
/// query leaves core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Unisex,
    All,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Unisex => "Unisex",
            Self::All => ALL_FILTER,
        }
    }

    /// Returns `None` for the `All` sentinel.
    pub fn as_filter(self) -> Option<Self> {
        match self {
            Self::All => None,
            concrete => Some(concrete),
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fragrance record as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragrance {
    pub id: FragranceId,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub gender: Gender,
    /// Olfactory family label, e.g. `Woody`.
    pub family: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Notes in catalog order (type first, then weight).
    #[serde(default)]
    pub notes: Vec<NoteRef>,
}

impl Fragrance {
    /// Creates a record with no notes and no optional metadata.
    pub fn new(
        id: FragranceId,
        name: impl Into<String>,
        brand: impl Into<String>,
        gender: Gender,
        family: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            year: None,
            gender,
            family: family.into(),
            description: None,
            image_url: None,
            notes: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl IntoIterator<Item = NoteRef>) -> Self {
        self.notes = notes.into_iter().collect();
        self
    }

    /// Returns distinct note names, ignoring type, in first-listed order.
    pub fn note_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.notes
            .iter()
            .map(|note| note.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

/// Fragrance annotated with a score from the recommendation surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFragrance {
    #[serde(flatten)]
    pub fragrance: Fragrance,
    /// Similarity or match score reported by the surface.
    pub score: f64,
    /// Note names that produced the match, when reported.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_notes: Vec<String>,
}

impl ScoredFragrance {
    pub fn new(fragrance: Fragrance, score: f64) -> Self {
        Self {
            fragrance,
            score,
            matched_notes: Vec::new(),
        }
    }

    /// Score clamped to `[0, 1]`; non-finite scores map to `0`.
    pub fn normalized_score(&self) -> f64 {
        if self.score.is_finite() {
            self.score.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Values available for the gender/family filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub genders: Vec<String>,
    pub families: Vec<String>,
}

/// Filter for `listFragrances`. An all-`None` filter requests the full catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragranceFilter {
    /// Substring/fuzzy match on name or brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl FragranceFilter {
    /// Filter with only a search term; blank terms are dropped.
    pub fn search(text: &str) -> Self {
        Self::default().with_search(text)
    }

    pub fn with_search(mut self, text: &str) -> Self {
        let trimmed = text.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender.as_filter();
        self
    }

    pub fn with_family(mut self, family: &str) -> Self {
        self.family = normalize_filter_value(Some(family));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{FragranceFilter, Gender};
    use serde_json::json;

    #[test]
    fn filter_drops_blank_and_all_values() {
        let filter = FragranceFilter::search("  ")
            .with_gender(Gender::All)
            .with_family("All");
        assert_eq!(filter, FragranceFilter::default());
        assert_eq!(serde_json::to_value(&filter).unwrap(), json!({}));

        let filter = FragranceFilter::search(" oud ")
            .with_gender(Gender::Men)
            .with_family(" Woody ");
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({ "search": "oud", "gender": "Men", "family": "Woody" })
        );
    }
}
