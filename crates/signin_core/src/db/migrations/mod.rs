//! Schema migrations for the key/value table.
//!
//! # Invariants
//! - Versions start at 1 and increase by one per script.
//! - `PRAGMA user_version` equals the last applied script version.
//! - Pending scripts run in a single transaction.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(version, script)` pairs in apply order.
const SCRIPTS: &[(u32, &str)] = &[(1, include_str!("0001_kv_entries.sql"))];

/// Schema version this binary writes.
pub fn latest_version() -> u32 {
    SCRIPTS.last().map_or(0, |(version, _)| *version)
}

/// Brings `conn` up to [`latest_version`].
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer build.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let to = latest_version();
    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }

    let pending: Vec<&(u32, &str)> = SCRIPTS
        .iter()
        .filter(|(version, _)| *version > from)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, script) in pending {
        tx.execute_batch(script)?;
        tx.pragma_update(None, "user_version", *version)?;
    }
    tx.commit()?;
    info!("event=db_migrate module=db status=ok from={from} to={to}");
    Ok(())
}
