//! Favorites use-case service.
//!
//! # Invariants
//! - Every call is one read-modify-write through the store.
//! - Toggling the same id twice restores the stored set.

use crate::collection::identifier_set::{toggle_membership, IdentifierSet};
use crate::model::fragrance::{Fragrance, FragranceId};
use crate::repo::preference_repo::{PreferenceStore, RepoResult, FAVORITES_KEY};
use log::info;

/// Favorites facade over a preference store.
pub struct FavoritesService<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> FavoritesService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    pub fn toggle_favorite(&self, id: FragranceId) -> RepoResult<bool> {
        let current = self.store.read_set(FAVORITES_KEY)?;
        let next = toggle_membership(&current, id);
        self.store.write_set(FAVORITES_KEY, &next)?;

        let is_favorite = next.contains(id);
        info!(
            "event=favorite_toggle module=favorites status=ok id={id} favorite={is_favorite} total={}",
            next.len()
        );
        Ok(is_favorite)
    }

    /// Removes `id`; a no-op when it is not a favorite.
    pub fn remove_favorite(&self, id: FragranceId) -> RepoResult<bool> {
        let mut current = self.store.read_set(FAVORITES_KEY)?;
        if !current.remove(id) {
            return Ok(false);
        }
        self.store.write_set(FAVORITES_KEY, &current)?;
        Ok(true)
    }

    pub fn is_favorite(&self, id: FragranceId) -> RepoResult<bool> {
        Ok(self.store.read_set(FAVORITES_KEY)?.contains(id))
    }

    pub fn list_favorites(&self) -> RepoResult<IdentifierSet> {
        self.store.read_set(FAVORITES_KEY)
    }
}

/// Keeps catalog items whose id is in `favorites`, in catalog order.
pub fn filter_favorites(items: &[Fragrance], favorites: &IdentifierSet) -> Vec<Fragrance> {
    items
        .iter()
        .filter(|fragrance| favorites.contains(fragrance.id))
        .cloned()
        .collect()
}
