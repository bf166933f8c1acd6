//! Local filtering over already-fetched catalog data.

use crate::model::fragrance::Fragrance;
use crate::model::note::{Note, NoteType};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Trims and collapses internal whitespace runs to single spaces.
pub fn normalize_search_text(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Case-insensitive substring filter on name or brand, keeping input order.
///
/// A blank query keeps every item.
pub fn filter_by_name_or_brand<'a>(items: &'a [Fragrance], query: &str) -> Vec<&'a Fragrance> {
    let needle = normalize_search_text(query).to_lowercase();
    items
        .iter()
        .filter(|fragrance| {
            needle.is_empty()
                || fragrance.name.to_lowercase().contains(&needle)
                || fragrance.brand.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Catalog notes grouped by pyramid position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotesByType {
    pub top: Vec<Note>,
    pub middle: Vec<Note>,
    pub base: Vec<Note>,
}

impl NotesByType {
    pub fn get(&self, kind: NoteType) -> &[Note] {
        match kind {
            NoteType::Top => &self.top,
            NoteType::Middle => &self.middle,
            NoteType::Base => &self.base,
        }
    }

    pub fn len(&self) -> usize {
        self.top.len() + self.middle.len() + self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups `notes` by type, keeping those whose name contains `query`
/// (case-insensitive). Catalog order is kept inside each group.
pub fn group_notes_by_type(notes: &[Note], query: &str) -> NotesByType {
    let needle = normalize_search_text(query).to_lowercase();
    let mut grouped = NotesByType::default();
    for note in notes
        .iter()
        .filter(|note| needle.is_empty() || note.name.to_lowercase().contains(&needle))
    {
        let bucket = match note.kind {
            NoteType::Top => &mut grouped.top,
            NoteType::Middle => &mut grouped.middle,
            NoteType::Base => &mut grouped.base,
        };
        bucket.push(note.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::normalize_search_text;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_search_text("  tom \t  ford\n"), "tom ford");
        assert_eq!(normalize_search_text("   "), "");
    }
}
