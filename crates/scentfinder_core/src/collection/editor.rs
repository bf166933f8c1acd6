//! Named collection records.

use crate::model::fragrance::FragranceId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of a user collection.
pub type CollectionId = Uuid;

/// Collection name is empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNameError {
    pub name: String,
}

impl Display for InvalidNameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid collection name: `{}`", self.name)
    }
}

impl Error for InvalidNameError {}

/// User-named group of fragrances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    /// Member ids in the order they were added, without duplicates.
    pub members: Vec<FragranceId>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Collection {
    pub fn contains(&self, fragrance_id: FragranceId) -> bool {
        self.members.contains(&fragrance_id)
    }

    /// Adds a member. Returns `false` (no-op) when already present.
    pub fn add_member(&mut self, fragrance_id: FragranceId) -> bool {
        if self.contains(fragrance_id) {
            return false;
        }
        self.members.push(fragrance_id);
        true
    }

    /// Removes a member. Returns `false` (no-op) when absent.
    pub fn remove_member(&mut self, fragrance_id: FragranceId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| *member != fragrance_id);
        self.members.len() != before
    }
}

/// Creates an empty collection with a fresh id not used by `existing`.
///
/// The stored name is trimmed.
///
/// # Errors
/// - Returns [`InvalidNameError`] when `name` is blank after trimming.
pub fn create_collection(
    name: &str,
    existing: &[Collection],
) -> Result<Collection, InvalidNameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InvalidNameError {
            name: name.to_string(),
        });
    }

    let mut id = Uuid::new_v4();
    while existing.iter().any(|collection| collection.id == id) {
        id = Uuid::new_v4();
    }

    Ok(Collection {
        id,
        name: trimmed.to_string(),
        members: Vec::new(),
        created_at: now_epoch_ms(),
    })
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
