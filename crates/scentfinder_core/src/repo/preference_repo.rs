//! Preference store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the `readSet`/`writeSet` persistence surface for favorites.
//! - Persist named collections under a single key.
//!
//! # Invariants
//! - Each call reads or writes one key atomically; last write wins.
//! - Absent keys read as empty values, never as errors.
//! - Corrupt persisted JSON is reported, not silently replaced.

use crate::collection::editor::Collection;
use crate::collection::identifier_set::IdentifierSet;
use crate::db::migrations::has_preferences_table;
use crate::db::DbError;
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the favorites identifier set.
pub const FAVORITES_KEY: &str = "favorites";
/// Storage key for named collection records.
pub const COLLECTIONS_KEY: &str = "collections";

pub type RepoResult<T> = Result<T, RepoError>;

/// Preference persistence error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored value exists but cannot be decoded.
    InvalidData { key: String, message: String },
    /// Value could not be encoded for storage.
    Serialization(serde_json::Error),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData { key, message } => {
                write!(f, "invalid persisted preference `{key}`: {message}")
            }
            Self::Serialization(err) => write!(f, "preference encoding failed: {err}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidData { .. } | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Query(value))
    }
}

/// Key-value persistence surface for user preferences.
pub trait PreferenceStore {
    /// Reads an identifier set; an absent key yields an empty set.
    fn read_set(&self, key: &str) -> RepoResult<IdentifierSet>;
    /// Replaces the identifier set stored under `key`.
    fn write_set(&self, key: &str, set: &IdentifierSet) -> RepoResult<()>;
    /// Reads all collections; absent storage yields an empty list.
    fn read_collections(&self) -> RepoResult<Vec<Collection>>;
    /// Replaces all stored collections.
    fn write_collections(&self, collections: &[Collection]) -> RepoResult<()>;
}

/// SQLite-backed preference store over the `preferences` table.
pub struct SqlitePreferenceStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceStore<'conn> {
    /// Constructs a store from a migrated connection.
    ///
    /// # Errors
    /// - [`RepoError::MissingRequiredTable`] when migrations were not applied.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !has_preferences_table(conn)? {
            return Err(RepoError::MissingRequiredTable("preferences"));
        }
        Ok(Self { conn })
    }

    fn read_json<T: DeserializeOwned + Default>(&self, key: &str) -> RepoResult<T> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            debug!("event=pref_read module=repo status=ok key={key} present=false");
            return Ok(T::default());
        };

        serde_json::from_str(&raw).map_err(|err| {
            error!("event=pref_read module=repo status=error key={key} error_code=invalid_json");
            RepoError::InvalidData {
                key: key.to_string(),
                message: err.to_string(),
            }
        })
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> RepoResult<()> {
        let encoded = serde_json::to_string(value).map_err(RepoError::Serialization)?;
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, encoded],
        )?;
        debug!(
            "event=pref_write module=repo status=ok key={key} bytes={}",
            encoded.len()
        );
        Ok(())
    }
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn read_set(&self, key: &str) -> RepoResult<IdentifierSet> {
        self.read_json(key)
    }

    fn write_set(&self, key: &str, set: &IdentifierSet) -> RepoResult<()> {
        self.write_json(key, set)
    }

    fn read_collections(&self) -> RepoResult<Vec<Collection>> {
        self.read_json(COLLECTIONS_KEY)
    }

    fn write_collections(&self, collections: &[Collection]) -> RepoResult<()> {
        self.write_json(COLLECTIONS_KEY, collections)
    }
}
