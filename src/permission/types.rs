//! Permission label parsing and admin derivation

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AuthzError, Result};

/// Action segment that grants every action on its resource.
pub const ADMIN_ACTION: &str = "admin";

/// Shape rule for permission labels: `<resource>.<action>` where the action
/// is one or more ASCII lowercase letters. The resource may itself contain
/// dots; the action is the final segment.
fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.+)\.([a-z]+)$").expect("label pattern is valid"))
}

/// A validated `<resource>.<action>` permission label.
///
/// Only *requested* labels are parsed into this type; granted labels stay
/// opaque strings and are matched verbatim. Labels that do not match the
/// shape rule are rejected at construction.
///
/// # Examples
///
/// ```
/// use flow_authz::Permission;
///
/// let perm: Permission = "flows.read".parse().unwrap();
/// assert_eq!(perm.resource(), "flows");
/// assert_eq!(perm.action(), "read");
/// assert_eq!(perm.admin_variant().as_str(), "flows.admin");
///
/// assert!("flows".parse::<Permission>().is_err());
/// assert!("flows.Read".parse::<Permission>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    raw: String,
    resource: String,
    action: String,
}

impl Permission {
    /// Parses and validates a permission label.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermission` when `label` does not match
    /// `<resource>.<action>` with a lowercase-letters-only action.
    pub fn new(label: &str) -> Result<Self> {
        let captures = label_pattern()
            .captures(label)
            .ok_or_else(|| AuthzError::InvalidPermission(label.to_string()))?;

        Ok(Self {
            raw: label.to_string(),
            resource: captures[1].to_string(),
            action: captures[2].to_string(),
        })
    }

    /// Returns the resource part (everything before the final dot).
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the action part (the final segment).
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the full label.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns whether this label is the admin variant for its resource.
    pub fn is_admin(&self) -> bool {
        self.action == ADMIN_ACTION
    }

    /// Derives the admin variant: same resource, action replaced by
    /// [`ADMIN_ACTION`]. Granting it overrides ownership checks for every
    /// action on the resource.
    pub fn admin_variant(&self) -> Self {
        Self {
            raw: format!("{}.{}", self.resource, ADMIN_ACTION),
            resource: self.resource.clone(),
            action: ADMIN_ACTION.to_string(),
        }
    }
}

impl FromStr for Permission {
    type Err = AuthzError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Permission {
    type Error = AuthzError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.raw
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
