//! User registration and profile CRUD.

use tracing::debug;

use vitalis_shared::{ServiceError, User};
use vitalis_store::Database;

/// Operations over the users mapping.
///
/// Owns the uniqueness invariant: a user id is registered at most once,
/// and updates/deletes require the id to already exist.
pub struct UserService<'a> {
    db: &'a Database,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a new user keyed by its principal id.
    pub fn register(&self, user: User) -> Result<User, ServiceError> {
        let users = self.db.users();

        let existing = users
            .get(&user.id)
            .map_err(|e| ServiceError::internal(format!("Failed to register user: {e}")))?;
        if existing.is_some() {
            return Err(ServiceError::duplicate("User already exists"));
        }

        users
            .insert(&user.id, &user)
            .map_err(|e| ServiceError::internal(format!("Failed to register user: {e}")))?;

        debug!(user_id = %user.id, "registered user");
        Ok(user)
    }

    /// Look up a user as part of a login flow.
    ///
    /// Login is a plain read: credential verification is the host's
    /// concern, and the supplied id is trusted to be the caller's own.
    pub fn login(&self, id: &str) -> Result<User, ServiceError> {
        self.db
            .users()
            .get(id)
            .map_err(|e| ServiceError::internal(format!("Failed to login user: {e}")))?
            .ok_or_else(|| ServiceError::not_found("User not found"))
    }

    /// Fetch a user profile by id.
    pub fn get_by_id(&self, id: &str) -> Result<User, ServiceError> {
        self.db
            .users()
            .get(id)
            .map_err(|e| ServiceError::internal(format!("Failed to retrieve user: {e}")))?
            .ok_or_else(|| ServiceError::not_found("User not found"))
    }

    /// Replace an existing user wholesale.
    ///
    /// There is no partial update: every field must be supplied.
    pub fn update(&self, user: User) -> Result<User, ServiceError> {
        let users = self.db.users();

        let existing = users
            .get(&user.id)
            .map_err(|e| ServiceError::internal(format!("Failed to update user: {e}")))?;
        if existing.is_none() {
            return Err(ServiceError::not_found("User not found"));
        }

        users
            .insert(&user.id, &user)
            .map_err(|e| ServiceError::internal(format!("Failed to update user: {e}")))?;

        Ok(user)
    }

    /// Delete a user.
    ///
    /// Health records and predictions created by the user are left in
    /// place; there is no cascade.
    pub fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let users = self.db.users();

        let existing = users
            .get(id)
            .map_err(|e| ServiceError::internal(format!("Failed to delete user: {e}")))?;
        if existing.is_none() {
            return Err(ServiceError::not_found("User not found"));
        }

        users
            .remove(id)
            .map_err(|e| ServiceError::internal(format!("Failed to delete user: {e}")))?;

        debug!(user_id = %id, "deleted user");
        Ok(true)
    }

    /// Every registered user, unfiltered.
    pub fn list(&self) -> Result<Vec<User>, ServiceError> {
        self.db
            .users()
            .values()
            .map_err(|e| ServiceError::internal(format!("Failed to retrieve users: {e}")))
    }
}
