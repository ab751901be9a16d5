//! # Flow Authorization Core (flow-authz)
//!
//! Per-request authorization for a multi-tenant flow service:
//! - Request-scoped identity context with derive-and-shadow semantics
//! - `<resource>.<action>` permission labels with boundary validation
//! - Implicit admin override (`<resource>.admin` grants every action)
//! - Flow ownership enforcement against a pluggable store
//!
//! ## Example
//!
//! ```rust
//! use flow_authz::{check_permission, RequestContext};
//!
//! let ctx = RequestContext::new()
//!     .with_user_id(42)
//!     .with_permissions(vec!["flows.admin".to_string()]);
//!
//! let grant = check_permission(&ctx, "flows.read").unwrap();
//! assert!(grant.is_admin);
//! ```

pub mod context;
pub mod error;
pub mod permission;
pub mod store;
pub mod types;

pub use context::RequestContext;
pub use error::{AuthzError, IdentityField, Result};
pub use permission::{check_permission, check_permission_for_flow, Permission, ADMIN_ACTION};
pub use store::{FlowStore, MemoryFlowStore};
pub use types::{Flow, FlowId, Grant, UserId};
