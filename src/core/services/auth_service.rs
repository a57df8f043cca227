use tracing::{info, warn};

use crate::core::store::Store;
use crate::ledger::{Permission, User, UserRole};

use super::{ServiceError, ServiceResult};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 4;

/// Login and registration on top of [`Store`].
///
/// Credentials are compared as stored plain text.
pub struct AuthService;

impl AuthService {
    /// Returns the matching account, or `None` for blank or wrong credentials.
    pub fn login(store: &mut Store, username: &str, password: &str) -> Option<User> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return None;
        }
        store.ensure_loaded();
        let user = store.authenticate(username.trim(), password).cloned();
        match &user {
            Some(found) => info!(user = %found.username, "login succeeded"),
            None => warn!(user = username.trim(), "login rejected"),
        }
        user
    }

    /// Creates a plain `User` account.
    pub fn register(store: &mut Store, username: &str, password: &str) -> ServiceResult<User> {
        let username = username.trim();
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(ServiceError::Invalid(format!(
                "Username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }
        if password.trim().is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ServiceError::Invalid(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        store.ensure_loaded();
        if !store.add_user(User::new(username, password, UserRole::User))? {
            return Err(ServiceError::Invalid(format!(
                "User `{username}` already exists"
            )));
        }
        let created = store
            .users()
            .last()
            .cloned()
            .ok_or_else(|| ServiceError::Invalid("registration did not store the user".into()))?;
        info!(user = %created.username, id = created.id, "user registered");
        Ok(created)
    }

    pub fn authorize(user: &User, permission: Permission) -> ServiceResult<()> {
        if user.can(permission) {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(format!(
                "{:?} requires an administrator",
                permission
            )))
        }
    }
}
