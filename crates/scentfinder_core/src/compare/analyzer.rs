//! Shared/unique note analysis.

use crate::model::fragrance::{Fragrance, FragranceId};
use crate::model::note::NoteRef;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashSet;

/// Minimum number of fragrances for a comparison.
pub const MIN_COMPARED: usize = 2;

/// A fragrance note tagged with whether every compared fragrance has it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedNote {
    #[serde(flatten)]
    pub note: NoteRef,
    pub is_shared: bool,
}

/// Per-fragrance view of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragranceComparison {
    pub fragrance_id: FragranceId,
    /// Full original note list, in catalog order.
    pub notes: Vec<TaggedNote>,
}

impl FragranceComparison {
    /// Notes this fragrance does not share with every other one.
    pub fn unique_notes(&self) -> impl Iterator<Item = &NoteRef> {
        self.notes
            .iter()
            .filter(|tagged| !tagged.is_shared)
            .map(|tagged| &tagged.note)
    }
}

/// Derived comparison of two or more fragrances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Names present in every fragrance, in the first fragrance's order.
    pub shared: Vec<String>,
    /// One entry per input fragrance, in input order.
    pub per_fragrance: Vec<FragranceComparison>,
}

/// Compares fragrances by note composition.
///
/// Returns `None` when given fewer than [`MIN_COMPARED`] fragrances. Note
/// types are ignored; a fragrance with no notes makes `shared` empty.
pub fn compare<F: Borrow<Fragrance>>(fragrances: &[F]) -> Option<ComparisonResult> {
    if fragrances.len() < MIN_COMPARED {
        return None;
    }

    let records = fragrances
        .iter()
        .map(Borrow::borrow)
        .collect::<Vec<&Fragrance>>();

    let name_sets = records
        .iter()
        .map(|fragrance| {
            fragrance
                .notes
                .iter()
                .map(|note| note.name.as_str())
                .collect::<HashSet<_>>()
        })
        .collect::<Vec<_>>();

    let shared = records[0]
        .note_names()
        .into_iter()
        .filter(|name| name_sets.iter().all(|names| names.contains(name)))
        .map(str::to_string)
        .collect::<Vec<_>>();
    let shared_lookup = shared.iter().map(String::as_str).collect::<HashSet<_>>();

    let per_fragrance = records
        .iter()
        .map(|fragrance| FragranceComparison {
            fragrance_id: fragrance.id,
            notes: fragrance
                .notes
                .iter()
                .map(|note| TaggedNote {
                    note: note.clone(),
                    is_shared: shared_lookup.contains(note.name.as_str()),
                })
                .collect(),
        })
        .collect();

    Some(ComparisonResult {
        shared,
        per_fragrance,
    })
}
