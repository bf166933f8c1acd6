//! Scent note model.
//!
//! # Responsibility
//! - Define catalog notes and the per-fragrance note references.
//!
//! # Invariants
//! - Note identity is the case-sensitive `name`.
//! - A fragrance lists one name at most once per `NoteType`.

use serde::{Deserialize, Serialize};

/// Pyramid position of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    /// First impression, evaporates quickly.
    Top,
    /// Heart of the composition.
    Middle,
    /// Long-lasting dry-down.
    Base,
}

/// Catalog note as returned by `listNotes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    /// Serialized as `type` to match the catalog schema.
    #[serde(rename = "type")]
    pub kind: NoteType,
}

impl Note {
    pub fn new(name: impl Into<String>, kind: NoteType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Note reference attached to a fragrance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRef {
    /// Catalog row id, when the surface exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NoteType,
    /// Relative prominence inside the fragrance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl NoteRef {
    pub fn new(name: impl Into<String>, kind: NoteType) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind,
            weight: None,
        }
    }
}
