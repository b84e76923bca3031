//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use stockroom_core::{Email, Role, UserId};

/// A user account.
///
/// The password hash never leaves the database layer; credential checks go
/// through the user repository's dedicated lookup.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal surrogate key, used for ownership joins only.
    pub id: UserId,
    /// External identifier; the only id the API ever exposes.
    pub public_id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email, unique across accounts.
    pub email: Email,
    /// Access role.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The authenticated caller, resolved fresh from the database on every
/// request so that role changes and deletions take effect immediately.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: UserId,
    pub public_id: Uuid,
    pub name: String,
    pub email: Email,
    pub role: Role,
}

impl From<User> for AuthedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            public_id: user.public_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Serialization shape for a user: exactly the fields the API exposes.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub uuid: Uuid,
    pub name: String,
    pub email: Email,
    pub role: Role,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            uuid: user.public_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<AuthedUser> for PublicUser {
    fn from(user: AuthedUser) -> Self {
        Self {
            uuid: user.public_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_serializes_only_public_fields() {
        let user = PublicUser {
            uuid: Uuid::nil(),
            name: "Alice".to_owned(),
            email: Email::parse("alice@example.com").unwrap(),
            role: Role::Member,
        };
        let json = serde_json::to_value(&user).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort_unstable();

        assert_eq!(keys, ["email", "name", "role", "uuid"]);
        assert_eq!(json["role"], "Member");
    }
}
