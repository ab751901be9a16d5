//! Request-scoped identity carrier.
//!
//! The authentication middleware attaches the user id and granted permission
//! list once per request; every downstream check reads them from here.
//! Contexts derive children by value: a child inherits all ancestor
//! attachments and may shadow them by re-attaching the same field. Absence of
//! a field is observable: a check that runs before the middleware attached
//! identity fails with [`AuthzError::IdentityMissing`].

use std::sync::Arc;

use crate::error::{AuthzError, IdentityField, Result};
use crate::types::UserId;

/// Immutable request-scoped identity context.
///
/// Cloning derives a child context; the permission list is shared behind an
/// `Arc` so derivation stays cheap.
///
/// # Examples
///
/// ```
/// use flow_authz::RequestContext;
///
/// let ctx = RequestContext::new()
///     .with_user_id(42)
///     .with_permissions(vec!["flows.read".to_string()]);
///
/// assert_eq!(ctx.user_id().unwrap(), 42);
/// assert_eq!(ctx.permissions().unwrap(), ["flows.read".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    user_id: Option<UserId>,
    permissions: Option<Arc<[String]>>,
}

impl RequestContext {
    /// Creates an empty context with no identity attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a child context carrying `user_id`.
    ///
    /// Never fails; shadows any user id attached to an ancestor.
    #[must_use]
    pub fn with_user_id(&self, user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            permissions: self.permissions.clone(),
        }
    }

    /// Derives a child context carrying the granted permission list.
    ///
    /// Never fails; shadows any list attached to an ancestor. Duplicates are
    /// allowed and order is irrelevant for matching.
    #[must_use]
    pub fn with_permissions(&self, permissions: Vec<String>) -> Self {
        Self {
            user_id: self.user_id,
            permissions: Some(permissions.into()),
        }
    }

    /// Returns the authenticated user id.
    ///
    /// # Errors
    ///
    /// Returns `IdentityMissing` when no user id was attached anywhere in
    /// this context chain.
    pub fn user_id(&self) -> Result<UserId> {
        self.user_id
            .ok_or(AuthzError::IdentityMissing(IdentityField::UserId))
    }

    /// Returns the granted permission list.
    ///
    /// # Errors
    ///
    /// Returns `IdentityMissing` when no list was attached anywhere in this
    /// context chain.
    pub fn permissions(&self) -> Result<&[String]> {
        self.permissions
            .as_deref()
            .ok_or(AuthzError::IdentityMissing(IdentityField::Permissions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_has_no_identity() {
        let ctx = RequestContext::new();
        assert!(matches!(
            ctx.user_id(),
            Err(AuthzError::IdentityMissing(IdentityField::UserId))
        ));
        assert!(matches!(
            ctx.permissions(),
            Err(AuthzError::IdentityMissing(IdentityField::Permissions))
        ));
    }

    #[test]
    fn test_child_inherits_ancestor_values() {
        let root = RequestContext::new().with_user_id(1);
        let child = root.with_permissions(vec!["flows.read".to_string()]);

        assert_eq!(child.user_id().unwrap(), 1);
        assert_eq!(child.permissions().unwrap(), ["flows.read".to_string()]);
    }

    #[test]
    fn test_reattachment_shadows_latest_wins() {
        let root = RequestContext::new().with_user_id(1);
        let child = root.with_user_id(2);

        assert_eq!(child.user_id().unwrap(), 2);
        // ancestor is untouched
        assert_eq!(root.user_id().unwrap(), 1);
    }

    #[test]
    fn test_permissions_missing_does_not_affect_user_id() {
        let ctx = RequestContext::new().with_user_id(42);
        assert_eq!(ctx.user_id().unwrap(), 42);
        assert!(ctx.permissions().is_err());
    }

    #[test]
    fn test_duplicate_permissions_are_preserved() {
        let ctx = RequestContext::new()
            .with_permissions(vec!["flows.read".to_string(), "flows.read".to_string()]);
        assert_eq!(ctx.permissions().unwrap().len(), 2);
    }
}
