//! Ordered, duplicate-free note selection.
//!
//! # Invariants
//! - No name appears twice.
//! - Insertion order is kept for display only; equality is set equality.

use serde::{Deserialize, Serialize};

/// Set of note names currently toggled on.
///
/// Serialized as a plain array of names; decoding drops repeated names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectionSet {
    notes: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `note_name` when present, adds it otherwise.
    ///
    /// Returns whether the note is selected after the call.
    pub fn toggle(&mut self, note_name: impl AsRef<str>) -> bool {
        let note_name = note_name.as_ref();
        if let Some(index) = self.position(note_name) {
            self.notes.remove(index);
            false
        } else {
            self.notes.push(note_name.to_string());
            true
        }
    }

    /// Value-returning form of [`SelectionSet::toggle`].
    pub fn toggled(mut self, note_name: impl AsRef<str>) -> Self {
        self.toggle(note_name);
        self
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    pub fn contains(&self, note_name: &str) -> bool {
        self.position(note_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Selected names in the order they were toggled on.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.notes.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.notes
    }

    fn position(&self, note_name: &str) -> Option<usize> {
        self.notes.iter().position(|current| current == note_name)
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|name| other.contains(name))
    }
}

impl Eq for SelectionSet {}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        for name in iter {
            let name = name.into();
            if !set.contains(&name) {
                set.notes.push(name);
            }
        }
        set
    }
}

impl From<Vec<String>> for SelectionSet {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<String> {
    fn from(value: SelectionSet) -> Self {
        value.notes
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionSet;

    #[test]
    fn equality_ignores_display_order() {
        let left: SelectionSet = ["Rose", "Oud"].into_iter().collect();
        let right: SelectionSet = ["Oud", "Rose"].into_iter().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn from_iter_drops_duplicates() {
        let set: SelectionSet = ["Rose", "Rose", "Musk"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), ["Rose".to_string(), "Musk".to_string()]);
    }

    #[test]
    fn decoding_drops_repeated_names() {
        let restored: SelectionSet = serde_json::from_str(r#"["Rose","Oud","Rose"]"#).unwrap();
        assert_eq!(restored.as_slice(), ["Rose".to_string(), "Oud".to_string()]);
        assert_eq!(
            restored.clone().toggled("Rose").toggled("Rose"),
            restored
        );
        assert_eq!(
            serde_json::to_string(&restored).unwrap(),
            r#"["Rose","Oud"]"#
        );
    }
}
