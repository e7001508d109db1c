//! Health-record creation and owner-scoped queries.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use vitalis_shared::{HealthRecord, ServiceError};
use vitalis_store::Database;

use crate::identity::{validate_user, RequestContext};

/// Operations over the health-records mapping.
///
/// Records are append-only: creation is the only mutation, and every read
/// is scoped to the record's owner.
pub struct HealthRecordService<'a> {
    db: &'a Database,
}

impl<'a> HealthRecordService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Store a new health record on behalf of the caller.
    ///
    /// Only registered principals may write.  The record id, owner and
    /// timestamp are always server-generated; whatever the client put in
    /// those fields is discarded, so a caller can never file a record
    /// under someone else's identity.
    pub fn save(
        &self,
        ctx: &RequestContext,
        data: HealthRecord,
    ) -> Result<HealthRecord, ServiceError> {
        let registered = validate_user(self.db, ctx.caller())
            .map_err(|e| ServiceError::internal(format!("Failed to process health data: {e}")))?;
        if !registered {
            return Err(ServiceError::auth("User not authenticated"));
        }

        let record = HealthRecord {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.caller().to_string(),
            timestamp: Utc::now().timestamp_millis().to_string(),
            ..data
        };

        self.db
            .health_records()
            .insert(&record.id, &record)
            .map_err(|e| ServiceError::internal(format!("Failed to process health data: {e}")))?;

        debug!(record_id = %record.id, user_id = %record.user_id, "saved health record");
        Ok(record)
    }

    /// Fetch a single record by id, enforcing ownership.
    ///
    /// A record that exists but belongs to another principal yields
    /// `AUTH_ERROR`; its content is never returned.
    pub fn get_by_id(&self, ctx: &RequestContext, id: &str) -> Result<HealthRecord, ServiceError> {
        let record = self
            .db
            .health_records()
            .get(id)
            .map_err(|e| {
                ServiceError::internal(format!("Failed to retrieve health record: {e}"))
            })?
            .ok_or_else(|| ServiceError::not_found("Health record not found"))?;

        if record.user_id != ctx.caller().as_str() {
            return Err(ServiceError::auth("Unauthorized to access this record"));
        }

        Ok(record)
    }

    /// Every record owned by the caller.
    ///
    /// A linear filter over the full table; there is no secondary index
    /// by owner.
    pub fn list_for_caller(&self, ctx: &RequestContext) -> Result<Vec<HealthRecord>, ServiceError> {
        let records = self
            .db
            .health_records()
            .values()
            .map_err(|e| {
                ServiceError::internal(format!("Failed to retrieve health records: {e}"))
            })?;

        Ok(records
            .into_iter()
            .filter(|record| record.user_id == ctx.caller().as_str())
            .collect())
    }
}
