//! Generic slot-addressed key→value mapping.

use std::marker::PhantomData;

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::Database;
use crate::error::Result;
use crate::slots::Slot;

/// A typed view over one persistent mapping.
///
/// Keys are strings; values are stored as JSON text in the slot's table.
/// The mapping is ordered: [`values`](StableMap::values) scans in key
/// order.  Absence of a key is a normal signal, never an error.
pub struct StableMap<'a, V> {
    db: &'a Database,
    table: String,
    _value: PhantomData<V>,
}

impl<'a, V> StableMap<'a, V>
where
    V: Serialize + DeserializeOwned,
{
    /// Bind a typed view over `slot`.  The slot's table must exist, i.e.
    /// have been created by a migration.
    pub fn new(db: &'a Database, slot: Slot) -> Self {
        Self {
            db,
            table: slot.table(),
            _value: PhantomData,
        }
    }

    /// Upsert `value` under `key`, returning the previous value if any.
    pub fn insert(&self, key: &str, value: &V) -> Result<Option<V>> {
        let previous = self.get(key)?;
        let json = serde_json::to_string(value)?;

        self.db.conn().execute(
            &format!(
                "INSERT INTO {} (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                self.table
            ),
            params![key, json],
        )?;

        Ok(previous)
    }

    /// Point lookup.
    pub fn get(&self, key: &str) -> Result<Option<V>> {
        let json: Option<String> = self
            .db
            .conn()
            .query_row(
                &format!("SELECT value FROM {} WHERE key = ?1", self.table),
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Delete `key` if present.  Returns `true` if a row was deleted.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self.db.conn().execute(
            &format!("DELETE FROM {} WHERE key = ?1", self.table),
            params![key],
        )?;
        Ok(affected > 0)
    }

    /// Full scan: every stored value, in key order.
    pub fn values(&self) -> Result<Vec<V>> {
        let mut stmt = self
            .db
            .conn()
            .prepare(&format!("SELECT value FROM {} ORDER BY key ASC", self.table))?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut values = Vec::new();
        for row in rows {
            values.push(serde_json::from_str(&row?)?);
        }
        Ok(values)
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<u64> {
        let count = self.db.conn().query_row(
            &format!("SELECT COUNT(*) FROM {}", self.table),
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use vitalis_shared::{AiPrediction, User};

    use crate::database::Database;

    fn user(id: &str, username: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    fn prediction(id: &str) -> AiPrediction {
        AiPrediction {
            id: id.to_string(),
            health_data_id: "hr-1".to_string(),
            prediction: "stable".to_string(),
            confidence: "0.9".to_string(),
            model_id: "m1".to_string(),
            timestamp: "1700000000000".to_string(),
        }
    }

    #[test]
    fn get_absent_key_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.users().get("missing").unwrap().is_none());
    }

    #[test]
    fn insert_returns_previous_value() {
        let db = Database::open_in_memory().unwrap();
        let users = db.users();

        let first = users.insert("p1", &user("p1", "amina")).unwrap();
        assert!(first.is_none());

        let second = users.insert("p1", &user("p1", "amina-renamed")).unwrap();
        assert_eq!(second.unwrap().username, "amina");

        assert_eq!(users.get("p1").unwrap().unwrap().username, "amina-renamed");
        assert_eq!(users.len().unwrap(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let db = Database::open_in_memory().unwrap();
        let users = db.users();

        users.insert("p1", &user("p1", "amina")).unwrap();
        assert!(users.remove("p1").unwrap());
        assert!(!users.remove("p1").unwrap());
        assert!(users.is_empty().unwrap());
    }

    #[test]
    fn values_scan_in_key_order() {
        let db = Database::open_in_memory().unwrap();
        let users = db.users();

        users.insert("b", &user("b", "second")).unwrap();
        users.insert("a", &user("a", "first")).unwrap();
        users.insert("c", &user("c", "third")).unwrap();

        let names: Vec<String> = users
            .values()
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn slots_do_not_share_keys() {
        let db = Database::open_in_memory().unwrap();

        db.users().insert("same-key", &user("same-key", "amina")).unwrap();
        db.predictions().insert("same-key", &prediction("same-key")).unwrap();

        assert!(db.users().remove("same-key").unwrap());
        // The prediction under the identical key is untouched.
        assert!(db.predictions().get("same-key").unwrap().is_some());
        assert_eq!(db.predictions().len().unwrap(), 1);
        assert_eq!(db.users().len().unwrap(), 0);
    }
}
