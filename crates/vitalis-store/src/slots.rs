//! Fixed numeric addresses for the persistent mappings.
//!
//! Slot numbers are part of the on-disk layout: each collection is stored
//! in the table named after its slot, so the layout stays stable across
//! process restarts.  Never renumber an existing slot; a new collection
//! must take an unused number and its own migration.

/// Stable numeric address of one persistent mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(pub u8);

impl Slot {
    /// Name of the SQLite table backing this slot.
    pub fn table(&self) -> String {
        format!("slot_{}", self.0)
    }
}

/// Health records.
pub const HEALTH_RECORDS: Slot = Slot(0);

/// Registered users, keyed by principal.
pub const USERS: Slot = Slot(2);

/// AI predictions, keyed by client-supplied id.
pub const AI_PREDICTIONS: Slot = Slot(4);
