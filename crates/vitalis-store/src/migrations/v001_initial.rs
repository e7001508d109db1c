//! v001 -- Initial schema creation.
//!
//! Creates the three slot tables: health records (slot 0), users (slot 2)
//! and AI predictions (slot 4).

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Slot 0: health records
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS slot_0 (
    key   TEXT PRIMARY KEY NOT NULL,   -- server-generated UUID v4
    value TEXT NOT NULL                -- JSON-encoded health record
);

-- ----------------------------------------------------------------
-- Slot 2: users
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS slot_2 (
    key   TEXT PRIMARY KEY NOT NULL,   -- caller principal
    value TEXT NOT NULL                -- JSON-encoded user
);

-- ----------------------------------------------------------------
-- Slot 4: AI predictions
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS slot_4 (
    key   TEXT PRIMARY KEY NOT NULL,   -- client-supplied prediction id
    value TEXT NOT NULL                -- JSON-encoded prediction
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
