//! Storage for externally-computed AI predictions.

use tracing::debug;

use vitalis_shared::{AiPrediction, ServiceError};
use vitalis_store::Database;

use crate::identity::{validate_user, RequestContext};

/// Operations over the predictions mapping.
///
/// Prediction content is opaque input produced elsewhere; this service is
/// an authorization gate plus storage.  Predictions are keyed by the
/// client-supplied id, and the referenced health record is not checked
/// for existence or ownership.
pub struct PredictionService<'a> {
    db: &'a Database,
}

impl<'a> PredictionService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Store a prediction produced by an external model run.
    ///
    /// A second save with the same id silently replaces the first.
    pub fn save(
        &self,
        ctx: &RequestContext,
        prediction: AiPrediction,
    ) -> Result<AiPrediction, ServiceError> {
        let registered = validate_user(self.db, ctx.caller())
            .map_err(|e| ServiceError::internal(format!("Failed to store AI prediction: {e}")))?;
        if !registered {
            return Err(ServiceError::auth("User not authenticated"));
        }

        let previous = self
            .db
            .predictions()
            .insert(&prediction.id, &prediction)
            .map_err(|e| ServiceError::internal(format!("Failed to store AI prediction: {e}")))?;

        if previous.is_some() {
            debug!(prediction_id = %prediction.id, "replaced existing prediction");
        }
        Ok(prediction)
    }

    /// Every stored prediction, across all users.
    pub fn list(&self) -> Result<Vec<AiPrediction>, ServiceError> {
        self.db
            .predictions()
            .values()
            .map_err(|e| ServiceError::internal(format!("Failed to retrieve predictions: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use vitalis_shared::{ErrorCode, Principal, User};

    use crate::users::UserService;

    use super::*;

    fn register(db: &Database, id: &str) {
        UserService::new(db)
            .register(User {
                id: id.to_string(),
                username: format!("user-{id}"),
                email: format!("{id}@example.com"),
            })
            .unwrap();
    }

    fn ctx(id: &str) -> RequestContext {
        RequestContext::new(Principal::from(id))
    }

    fn prediction(id: &str, text: &str) -> AiPrediction {
        AiPrediction {
            id: id.to_string(),
            health_data_id: "hr-1".to_string(),
            prediction: text.to_string(),
            confidence: "0.87".to_string(),
            model_id: "model-v1".to_string(),
            timestamp: "1700000000000".to_string(),
        }
    }

    #[test]
    fn save_rejects_unregistered_caller() {
        let db = Database::open_in_memory().unwrap();
        let svc = PredictionService::new(&db);

        let err = svc.save(&ctx("stranger"), prediction("x", "a")).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthError);
        assert_eq!(db.predictions().len().unwrap(), 0);
    }

    #[test]
    fn save_with_same_id_replaces_previous() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "p1");
        let svc = PredictionService::new(&db);

        svc.save(&ctx("p1"), prediction("x", "first")).unwrap();
        svc.save(&ctx("p1"), prediction("x", "second")).unwrap();

        let all = svc.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].prediction, "second");
    }

    #[test]
    fn save_does_not_check_linked_record() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "p1");
        let svc = PredictionService::new(&db);

        // health_data_id points at nothing; the save still succeeds.
        let mut dangling = prediction("x", "a");
        dangling.health_data_id = "no-such-record".to_string();
        svc.save(&ctx("p1"), dangling).unwrap();

        assert_eq!(db.predictions().len().unwrap(), 1);
    }

    #[test]
    fn list_spans_all_users() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "p1");
        register(&db, "p2");
        let svc = PredictionService::new(&db);

        svc.save(&ctx("p1"), prediction("a", "one")).unwrap();
        svc.save(&ctx("p2"), prediction("b", "two")).unwrap();

        assert_eq!(svc.list().unwrap().len(), 2);
    }
}
