//! Quiz answer aggregation.

use crate::model::criteria::{build_criteria, Criteria};
use crate::model::fragrance::Gender;
use log::debug;
use serde::{Deserialize, Serialize};

/// One selected quiz option and the preferences it contributes.
///
/// Absent fields never overwrite values established by earlier answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    /// Display label of the option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl QuizAnswer {
    /// Answer contributing only notes.
    pub fn notes<I, S>(notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_notes(notes)
    }

    /// Answer contributing only a gender.
    pub fn gender(gender: Gender) -> Self {
        Self::default().with_gender(gender)
    }

    /// Answer contributing only a family.
    pub fn family(family: impl Into<String>) -> Self {
        Self::default().with_family(family)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes = notes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Family value when the answer actually defines one (non-blank).
    fn defined_family(&self) -> Option<&str> {
        self.family
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}

/// Folds ordered quiz answers into one `Criteria`.
///
/// Rules:
/// - `notes`: concatenated in answer order, deduplicated by first occurrence.
/// - `gender`/`family`: taken from the first answer that defines the field,
///   even when that value is the `All` sentinel, which then means "omit".
/// - `limit`: caller-supplied result-set size (non-positive falls back to
///   the default criteria limit).
///
/// Never fails; an empty or preference-free run yields an empty `Criteria`.
pub fn aggregate(answers: &[QuizAnswer], limit: u32) -> Criteria {
    let notes = answers
        .iter()
        .flat_map(|answer| answer.notes.iter().map(String::as_str));
    let gender = answers.iter().find_map(|answer| answer.gender);
    let family = answers.iter().find_map(QuizAnswer::defined_family);

    let criteria = build_criteria(notes, gender, family, Some(i64::from(limit)));
    debug!(
        "event=quiz_aggregate module=quiz status=ok answers={} notes={} gender_set={} family_set={}",
        answers.len(),
        criteria.notes.len(),
        criteria.gender.is_some(),
        criteria.family.is_some()
    );
    criteria
}
