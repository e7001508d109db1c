//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees
//! that migrations are run before any other operation.  One handle serves
//! one process; the hosting environment serializes mutating calls, so no
//! additional locking happens here.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::Connection;

use vitalis_shared::{AiPrediction, HealthRecord, User};

use crate::error::{Result, StoreError};
use crate::map::StableMap;
use crate::migrations;
use crate::slots;

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data
    /// directory:
    /// - Linux:   `~/.local/share/vitalis/vitalis.db`
    /// - macOS:   `~/Library/Application Support/com.vitalis.vitalis/vitalis.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\vitalis\vitalis\data\vitalis.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "vitalis", "vitalis").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("vitalis.db");

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        // Run schema migrations.
        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Open a fresh in-memory database.
    ///
    /// Substitutes for the persistent store in tests; contents are lost
    /// when the handle is dropped.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    ///
    /// Callers should prefer the typed mapping views, but direct access is
    /// occasionally needed for ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }

    // ------------------------------------------------------------------
    // Typed mapping views
    // ------------------------------------------------------------------

    /// Health records, keyed by server-generated record id.
    pub fn health_records(&self) -> StableMap<'_, HealthRecord> {
        StableMap::new(self, slots::HEALTH_RECORDS)
    }

    /// Registered users, keyed by principal.
    pub fn users(&self) -> StableMap<'_, User> {
        StableMap::new(self, slots::USERS)
    }

    /// AI predictions, keyed by client-supplied prediction id.
    pub fn predictions(&self) -> StableMap<'_, AiPrediction> {
        StableMap::new(self, slots::AI_PREDICTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: format!("user-{id}"),
            email: format!("{id}@example.com"),
        }
    }

    #[test]
    fn open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        let db = Database::open_at(&path).expect("should open");
        assert!(db.path().is_some());
    }

    #[test]
    fn reopen_observes_prior_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let db = Database::open_at(&path).unwrap();
            db.users().insert("p1", &user("p1")).unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        let stored = db.users().get("p1").unwrap().expect("user persisted");
        assert_eq!(stored.username, "user-p1");
        assert_eq!(db.users().len().unwrap(), 1);
    }
}
