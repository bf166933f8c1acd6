//! Collection use-case service.
//!
//! # Responsibility
//! - Create, delete and edit named collections through the store.
//!
//! # Invariants
//! - Member edits are idempotent; only unknown collections are errors.
//! - Collections keep creation order.

use crate::collection::editor::{create_collection, Collection, CollectionId, InvalidNameError};
use crate::model::fragrance::FragranceId;
use crate::repo::preference_repo::{PreferenceStore, RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for collection use-cases.
#[derive(Debug)]
pub enum CollectionServiceError {
    InvalidName(InvalidNameError),
    NotFound(CollectionId),
    Repo(RepoError),
}

impl Display for CollectionServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "collection not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CollectionServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidName(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<InvalidNameError> for CollectionServiceError {
    fn from(value: InvalidNameError) -> Self {
        Self::InvalidName(value)
    }
}

impl From<RepoError> for CollectionServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Collection facade over a preference store.
pub struct CollectionService<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> CollectionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates and persists an empty collection.
    pub fn create(&self, name: &str) -> Result<Collection, CollectionServiceError> {
        let mut collections = self.store.read_collections()?;
        let created = create_collection(name, &collections)?;
        collections.push(created.clone());
        self.store.write_collections(&collections)?;

        info!(
            "event=collection_create module=collections status=ok id={} total={}",
            created.id,
            collections.len()
        );
        Ok(created)
    }

    pub fn delete(&self, id: CollectionId) -> Result<(), CollectionServiceError> {
        let mut collections = self.store.read_collections()?;
        let before = collections.len();
        collections.retain(|collection| collection.id != id);
        if collections.len() == before {
            return Err(CollectionServiceError::NotFound(id));
        }
        self.store.write_collections(&collections)?;

        info!("event=collection_delete module=collections status=ok id={id}");
        Ok(())
    }

    /// Adds a fragrance; a no-op when already a member.
    pub fn add_member(
        &self,
        id: CollectionId,
        fragrance_id: FragranceId,
    ) -> Result<Collection, CollectionServiceError> {
        self.edit(id, |collection| collection.add_member(fragrance_id))
    }

    /// Removes a fragrance; a no-op when not a member.
    pub fn remove_member(
        &self,
        id: CollectionId,
        fragrance_id: FragranceId,
    ) -> Result<Collection, CollectionServiceError> {
        self.edit(id, |collection| collection.remove_member(fragrance_id))
    }

    pub fn list(&self) -> RepoResult<Vec<Collection>> {
        self.store.read_collections()
    }

    pub fn get(&self, id: CollectionId) -> RepoResult<Option<Collection>> {
        Ok(self
            .store
            .read_collections()?
            .into_iter()
            .find(|collection| collection.id == id))
    }

    fn edit(
        &self,
        id: CollectionId,
        change: impl FnOnce(&mut Collection) -> bool,
    ) -> Result<Collection, CollectionServiceError> {
        let mut collections = self.store.read_collections()?;
        let target = collections
            .iter_mut()
            .find(|collection| collection.id == id)
            .ok_or(CollectionServiceError::NotFound(id))?;

        let changed = change(target);
        let updated = target.clone();
        if changed {
            self.store.write_collections(&collections)?;
        }
        info!(
            "event=collection_edit module=collections status=ok id={id} changed={changed} members={}",
            updated.members.len()
        );
        Ok(updated)
    }
}
