use thiserror::Error;

/// Denial returned when the acting identity does not own the target resource.
///
/// Distinct from "resource not found": callers are expected to check resource
/// existence first, so a denial always means the resource exists but belongs
/// to someone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Acting identity is not the resource owner")]
pub struct NotOwner;

/// Decide whether an identity may mutate a resource it claims to own.
///
/// This is the entire ownership model: deny iff the acting identity is not
/// the identity that created the resource. No roles, no group permissions,
/// no administrative override.
///
/// Takes only the two identifiers being compared, so it is independent of
/// any particular resource type.
pub fn authorize_mutation<Id: PartialEq>(resource_owner: &Id, actor: &Id) -> Result<(), NotOwner> {
    if resource_owner == actor {
        Ok(())
    } else {
        Err(NotOwner)
    }
}
