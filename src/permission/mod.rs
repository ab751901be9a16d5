//! Permission resolution module.
//!
//! Provides label validation with admin-variant derivation and the two
//! request-level checks:
//! - [`check_permission`]: match a requested label against the identity's
//!   granted set, admin variant first
//! - [`check_permission_for_flow`]: same, plus an ownership check against
//!   the targeted flow

mod resolver;
mod types;

pub use resolver::{check_permission, check_permission_for_flow};
pub use types::{Permission, ADMIN_ACTION};
