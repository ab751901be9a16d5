//! Permission resolution against the request identity.
//!
//! The resolution order is fixed: identity reads first, then label
//! validation, then the admin variant check, then the exact match. A user
//! need not hold the literal permission if they hold the admin variant for
//! its resource.

use tracing::debug;

use crate::context::RequestContext;
use crate::error::{AuthzError, Result};
use crate::permission::types::Permission;
use crate::store::FlowStore;
use crate::types::{FlowId, Grant, UserId};

/// Checks whether the current identity may exercise `label`.
///
/// Reads the user id and granted permission list from `ctx`, derives the
/// admin variant of the requested label, and matches both against the
/// granted set.
///
/// # Errors
///
/// - `IdentityMissing` when the context lacks the user id or permission list
/// - `InvalidPermission` when `label` is not `<resource>.<action>` shaped
/// - `PermissionDenied` when neither the label nor its admin variant is
///   granted
pub fn check_permission(ctx: &RequestContext, label: &str) -> Result<Grant> {
    let user_id = ctx.user_id()?;
    let granted = ctx.permissions()?;

    let permission = Permission::new(label)?;
    let admin = permission.admin_variant();

    if granted.iter().any(|p| p == admin.as_str()) {
        debug!(user_id, permission = label, "granted via admin variant");
        return Ok(Grant::admin(user_id));
    }

    if granted.iter().any(|p| p == permission.as_str()) {
        return Ok(Grant::direct(user_id));
    }

    Err(AuthzError::PermissionDenied(label.to_string()))
}

/// Checks `label` and additionally enforces ownership of the targeted flow.
///
/// Runs [`check_permission`], then fetches the ownership record for
/// `flow_id` from `store`. Exactly one store read per call; nothing is
/// cached or retried. Admin grants skip the ownership comparison.
///
/// # Errors
///
/// Propagates [`check_permission`] errors unchanged; store failures surface
/// as `Upstream`; a non-admin caller who does not own the flow gets
/// `Forbidden`.
pub async fn check_permission_for_flow<S>(
    ctx: &RequestContext,
    label: &str,
    flow_id: FlowId,
    store: &S,
) -> Result<UserId>
where
    S: FlowStore + ?Sized,
{
    let grant = check_permission(ctx, label)?;

    let flow = store.get_flow(flow_id).await?;

    if !grant.is_admin && flow.user_id != grant.user_id {
        debug!(
            user_id = grant.user_id,
            flow_id,
            owner = flow.user_id,
            "ownership check failed"
        );
        return Err(AuthzError::Forbidden);
    }

    Ok(grant.user_id)
}
