//! Core authorization types

use serde::{Deserialize, Serialize};

/// Authenticated user identifier
pub type UserId = u64;

/// Flow identifier (database key)
pub type FlowId = i64;

/// Flow ownership record fetched from the store.
///
/// Only the fields the ownership check needs; the store may carry many more
/// columns for the full entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    /// Flow identifier
    pub id: FlowId,

    /// Owning user id
    pub user_id: UserId,
}

impl Flow {
    /// Create an ownership record
    pub fn new(id: FlowId, user_id: UserId) -> Self {
        Self { id, user_id }
    }
}

/// Outcome of a successful permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    /// User the check resolved for
    pub user_id: UserId,

    /// Whether access was granted via the admin variant of the requested
    /// permission
    pub is_admin: bool,
}

impl Grant {
    /// Grant via the admin variant (overrides ownership checks)
    pub fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }

    /// Grant via the exact requested permission
    pub fn direct(user_id: UserId) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_constructors() {
        let grant = Grant::admin(42);
        assert_eq!(grant.user_id, 42);
        assert!(grant.is_admin);

        let grant = Grant::direct(42);
        assert_eq!(grant.user_id, 42);
        assert!(!grant.is_admin);
    }

    #[test]
    fn test_flow_record() {
        let flow = Flow::new(7, 99);
        assert_eq!(flow.id, 7);
        assert_eq!(flow.user_id, 99);
    }
}
