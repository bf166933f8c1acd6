//! Preference database bootstrap.
//!
//! # Responsibility
//! - Open the SQLite file that backs favorites and collections.
//! - Bring the preference schema up to date before any store touches it.
//!
//! # Invariants
//! - A returned connection always has a `preferences` table.
//! - Files written by a newer build are refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or upgrading the preference database.
#[derive(Debug)]
pub enum DbError {
    /// SQLite refused to open or configure the connection.
    Connect {
        mode: &'static str,
        source: rusqlite::Error,
    },
    /// Preference schema step `version` did not apply; nothing was committed.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// File carries a preference schema this build does not know.
    SchemaTooNew { found: u32, supported: u32 },
    /// Schema version claims `version` but the `preferences` table is gone.
    MissingPreferencesTable { version: u32 },
    /// Statement failed on an already-open connection.
    Query(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect { mode, source } => {
                write!(f, "cannot open preference database ({mode}): {source}")
            }
            Self::Migration { version, source } => {
                write!(f, "preference schema step {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "preference schema {found} was written by a newer build (supported: {supported})"
            ),
            Self::MissingPreferencesTable { version } => write!(
                f,
                "preference schema {version} is missing the `preferences` table"
            ),
            Self::Query(err) => write!(f, "preference query failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect { source, .. } | Self::Migration { source, .. } => Some(source),
            Self::Query(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::MissingPreferencesTable { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}
