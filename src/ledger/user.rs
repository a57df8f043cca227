use serde::{Deserialize, Serialize};

/// Access level of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

/// Operations gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    EditTransactions,
    ManageCategories,
    ManageLimits,
    Export,
}

impl UserRole {
    /// Admins hold every permission; plain users are read-only.
    pub fn allows(self, _permission: Permission) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// A login account. Passwords are stored and compared as plain text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.role.allows(permission)
    }

    /// Case-insensitive username comparison.
    pub fn has_username(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }

    /// The two accounts seeded into a fresh or repaired dataset.
    pub fn defaults() -> Vec<User> {
        vec![
            User {
                id: 1,
                ..User::new("admin", "admin123", UserRole::Admin)
            },
            User {
                id: 2,
                ..User::new("user", "user123", UserRole::User)
            },
        ]
    }
}
