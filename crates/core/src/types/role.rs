//! User roles.

use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
///
/// The role decides how wide a user's view of product data is: admins
/// operate on every record, members only on records they own. Serialized
/// as the exact strings `"Admin"` and `"Member"` on the wire and in the
/// `user_role` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(type_name = "user_role"))]
pub enum Role {
    /// Full access to all users and all products.
    Admin,
    /// Access limited to the member's own products.
    Member,
}

impl Role {
    /// Whether this role grants administrative access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Member => write!(f, "Member"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Member" => Ok(Self::Member),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_format() {
        assert_eq!(Role::Admin.to_string(), "Admin");
        assert_eq!(Role::Member.to_string(), "Member");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Member".parse::<Role>().unwrap(), Role::Member);
        assert!("admin".parse::<Role>().is_err());
        assert!("superuser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_exact_labels() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"Admin\"");
        assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"Member\"");

        let role: Role = serde_json::from_str("\"Member\"").unwrap();
        assert_eq!(role, Role::Member);
        assert!(serde_json::from_str::<Role>("\"member\"").is_err());
    }

    #[test]
    fn test_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Member.is_admin());
    }
}
