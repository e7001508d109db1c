//! Aggregate counts across the three mappings.

use vitalis_shared::{ServiceError, Statistics};
use vitalis_store::Database;

/// Cardinality of each mapping.  No access restriction.
pub fn system_stats(db: &Database) -> Result<Statistics, ServiceError> {
    let total_records = db
        .health_records()
        .len()
        .map_err(|e| ServiceError::internal(format!("Failed to retrieve system stats: {e}")))?;
    let total_predictions = db
        .predictions()
        .len()
        .map_err(|e| ServiceError::internal(format!("Failed to retrieve system stats: {e}")))?;
    let total_users = db
        .users()
        .len()
        .map_err(|e| ServiceError::internal(format!("Failed to retrieve system stats: {e}")))?;

    Ok(Statistics {
        total_records,
        total_predictions,
        total_users,
    })
}
