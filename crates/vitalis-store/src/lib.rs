//! # vitalis-store
//!
//! Persistent storage for the vitalis health-record service, backed by
//! SQLite.
//!
//! The store is the system of record: every write goes straight to disk and
//! survives a process restart.  Each collection occupies its own fixed
//! numeric [`Slot`] (its own table), so keys can never collide across
//! entity types.  The crate exposes a synchronous [`Database`] handle that
//! wraps a `rusqlite::Connection` and hands out a generic [`StableMap`]
//! view per collection.

pub mod database;
pub mod map;
pub mod migrations;
pub mod slots;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use map::StableMap;
pub use slots::Slot;
