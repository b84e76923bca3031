//! Ownership scoping rules.
//!
//! Every product read and mutation goes through an [`AccessScope`] derived
//! once from the caller's role and id. Services never branch on the role
//! directly; they ask the scope whether a record's owner is visible, or hand
//! the scope's owner filter to a repository query.

use crate::types::{Role, UserId};

/// The set of records a caller may operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// Every record, regardless of owner. Granted to admins.
    All,
    /// Only records owned by the given user.
    OwnedBy(UserId),
}

impl AccessScope {
    /// Derive the scope for a caller.
    ///
    /// Admins see everything; members see their own records only.
    #[must_use]
    pub const fn for_user(role: Role, user: UserId) -> Self {
        match role {
            Role::Admin => Self::All,
            Role::Member => Self::OwnedBy(user),
        }
    }

    /// Whether a record with the given owner falls inside this scope.
    #[must_use]
    pub const fn allows(&self, owner: UserId) -> bool {
        match self {
            Self::All => true,
            Self::OwnedBy(user) => user.as_i32() == owner.as_i32(),
        }
    }

    /// The owner to filter queries by, if the scope is restricted.
    ///
    /// `None` means unrestricted; repositories use this to build scoped
    /// list queries without re-deriving the role logic.
    #[must_use]
    pub const fn owner_filter(&self) -> Option<UserId> {
        match self {
            Self::All => None,
            Self::OwnedBy(user) => Some(*user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_scope_is_unrestricted() {
        let scope = AccessScope::for_user(Role::Admin, UserId::new(1));
        assert_eq!(scope, AccessScope::All);
        assert!(scope.allows(UserId::new(1)));
        assert!(scope.allows(UserId::new(2)));
        assert_eq!(scope.owner_filter(), None);
    }

    #[test]
    fn test_member_scope_is_limited_to_own_records() {
        let scope = AccessScope::for_user(Role::Member, UserId::new(1));
        assert_eq!(scope, AccessScope::OwnedBy(UserId::new(1)));
        assert!(scope.allows(UserId::new(1)));
        assert!(!scope.allows(UserId::new(2)));
        assert_eq!(scope.owner_filter(), Some(UserId::new(1)));
    }

    #[test]
    fn test_member_scope_follows_the_caller_not_the_record() {
        // Two members never share a scope.
        let alice = AccessScope::for_user(Role::Member, UserId::new(10));
        let bob = AccessScope::for_user(Role::Member, UserId::new(20));
        assert!(alice.allows(UserId::new(10)));
        assert!(!alice.allows(UserId::new(20)));
        assert!(bob.allows(UserId::new(20)));
        assert!(!bob.allows(UserId::new(10)));
    }
}
