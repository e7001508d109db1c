//! Caller identity and the registration gate.

use vitalis_shared::Principal;
use vitalis_store::Database;

/// Per-request capsule carrying the resolved caller identity.
///
/// The hosting environment authenticates the caller and constructs one
/// context per request; nothing is cached across requests.  Operations
/// that stamp ownership or enforce authorization take the context as an
/// explicit parameter.
#[derive(Debug, Clone)]
pub struct RequestContext {
    caller: Principal,
}

impl RequestContext {
    /// Capture the caller identity for the duration of one request.
    pub fn new(caller: Principal) -> Self {
        Self { caller }
    }

    /// The resolved caller principal.
    pub fn caller(&self) -> &Principal {
        &self.caller
    }
}

/// True iff `principal` belongs to a registered user.
///
/// Registration must precede any health-data or prediction write: an
/// authenticated but unregistered caller is rejected upstream with an
/// authorization error, never created on first use.
pub fn validate_user(db: &Database, principal: &Principal) -> vitalis_store::Result<bool> {
    Ok(db.users().get(principal.as_str())?.is_some())
}

#[cfg(test)]
mod tests {
    use vitalis_shared::User;

    use super::*;

    #[test]
    fn validate_user_tracks_registration() {
        let db = Database::open_in_memory().unwrap();
        let principal = Principal::from("p1");

        assert!(!validate_user(&db, &principal).unwrap());

        db.users()
            .insert(
                "p1",
                &User {
                    id: "p1".to_string(),
                    username: "amina".to_string(),
                    email: "amina@example.com".to_string(),
                },
            )
            .unwrap();

        assert!(validate_user(&db, &principal).unwrap());
    }

    #[test]
    fn context_exposes_caller() {
        let ctx = RequestContext::new(Principal::from("p1"));
        assert_eq!(ctx.caller().as_str(), "p1");
    }
}
