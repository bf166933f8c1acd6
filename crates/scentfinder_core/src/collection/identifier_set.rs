//! Identifier set used for favorites.

use crate::model::fragrance::FragranceId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of fragrance identifiers, persisted as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierSet(BTreeSet<FragranceId>);

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: FragranceId) -> bool {
        self.0.contains(&id)
    }

    /// Returns `false` when `id` was already present.
    pub fn insert(&mut self, id: FragranceId) -> bool {
        self.0.insert(id)
    }

    /// Returns `false` when `id` was absent.
    pub fn remove(&mut self, id: FragranceId) -> bool {
        self.0.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FragranceId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<FragranceId> for IdentifierSet {
    fn from_iter<T: IntoIterator<Item = FragranceId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Returns a new set with `id` added if absent, removed if present.
pub fn toggle_membership(set: &IdentifierSet, id: FragranceId) -> IdentifierSet {
    let mut next = set.clone();
    if !next.remove(id) {
        next.insert(id);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::{toggle_membership, IdentifierSet};

    #[test]
    fn serializes_as_sorted_array() {
        let set: IdentifierSet = [9, 2, 5, 2].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[2,5,9]");
    }

    #[test]
    fn toggle_does_not_mutate_input() {
        let original: IdentifierSet = [1, 2].into_iter().collect();
        let toggled = toggle_membership(&original, 2);
        assert!(original.contains(2));
        assert!(!toggled.contains(2));
    }
}
