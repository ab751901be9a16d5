//! Error types for the authorization core

use std::fmt;

use thiserror::Error;

/// Result type alias for authorization operations
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Identity field expected on the request context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    /// Authenticated user id
    UserId,
    /// Granted permission list
    Permissions,
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserId => write!(f, "user"),
            Self::Permissions => write!(f, "user permissions"),
        }
    }
}

/// Errors produced by authorization checks
#[derive(Debug, Error)]
pub enum AuthzError {
    /// Request context lacks a required identity field (middleware never
    /// attached it)
    #[error("unauthorized: invalid {0}")]
    IdentityMissing(IdentityField),

    /// Requested permission label is not `<resource>.<action>` shaped
    #[error("invalid permission '{0}': expected '<resource>.<action>' with a lowercase action")]
    InvalidPermission(String),

    /// Authenticated user holds neither the requested permission nor its
    /// admin variant
    #[error("requested permission '{0}' not found")]
    PermissionDenied(String),

    /// Permitted in general, but the targeted flow belongs to another user
    #[error("not permitted")]
    Forbidden,

    /// Opaque failure from the flow store, surfaced unchanged
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_missing_display() {
        let err = AuthzError::IdentityMissing(IdentityField::UserId);
        assert_eq!(err.to_string(), "unauthorized: invalid user");

        let err = AuthzError::IdentityMissing(IdentityField::Permissions);
        assert_eq!(err.to_string(), "unauthorized: invalid user permissions");
    }

    #[test]
    fn test_permission_denied_display() {
        let err = AuthzError::PermissionDenied("flows.delete".to_string());
        assert_eq!(err.to_string(), "requested permission 'flows.delete' not found");
    }

    #[test]
    fn test_forbidden_display() {
        assert_eq!(AuthzError::Forbidden.to_string(), "not permitted");
    }

    #[test]
    fn test_upstream_passes_message_through() {
        let err = AuthzError::from(anyhow::anyhow!("connection reset"));
        assert_eq!(err.to_string(), "connection reset");
    }
}
