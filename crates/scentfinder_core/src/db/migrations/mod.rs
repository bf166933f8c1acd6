//! Preference schema steps.
//!
//! # Invariants
//! - Steps are listed in strictly increasing version order.
//! - Pending steps commit together or not at all.
//! - `PRAGMA user_version` always names the last committed step.

use crate::db::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;

const PREFERENCE_SCHEMA: &[(u32, &str)] = &[(1, include_str!("0001_preferences.sql"))];

/// Newest preference schema this build can read.
pub fn latest_version() -> u32 {
    PREFERENCE_SCHEMA.last().map_or(0, |(version, _)| *version)
}

/// Schema version recorded in the file.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Returns whether the key/value table used by the preference store exists.
pub fn has_preferences_table(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'preferences'
        );",
        [],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Applies pending preference schema steps, then checks the result is usable.
///
/// Returns the number of steps applied.
///
/// # Errors
/// - [`DbError::SchemaTooNew`] when the file is ahead of this build.
/// - [`DbError::Migration`] naming the step that failed.
/// - [`DbError::MissingPreferencesTable`] when the version is current but the
///   table was dropped behind our back.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<usize> {
    let found = schema_version(conn)?;
    let supported = latest_version();
    if found > supported {
        error!(
            "event=db_migrate module=db status=error found={found} supported={supported} error_code=schema_too_new"
        );
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let pending = PREFERENCE_SCHEMA
        .iter()
        .filter(|(version, _)| *version > found)
        .collect::<Vec<_>>();

    if !pending.is_empty() {
        let tx = conn.transaction()?;
        for &&(version, sql) in &pending {
            tx.execute_batch(sql)
                .and_then(|()| tx.pragma_update(None, "user_version", version))
                .map_err(|source| DbError::Migration { version, source })?;
        }
        tx.commit()?;
        info!(
            "event=db_migrate module=db status=ok from_version={found} to_version={supported} steps={}",
            pending.len()
        );
    }

    if !has_preferences_table(conn)? {
        return Err(DbError::MissingPreferencesTable {
            version: found.max(supported),
        });
    }
    Ok(pending.len())
}
