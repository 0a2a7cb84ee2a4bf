//! Shared endpoint resolution and kind validation for edge operations.

use crate::error::{MutationError, MutationResult};
use weave_core::{Kind, SharedObject};
use weave_registry::ResultRegistry;

/// Resolve both edge endpoints by alias and validate their declared kinds.
///
/// Steps, in order: resolve alias 1, resolve alias 2, check both kind
/// declarations are present, check both resolved objects conform. Any
/// failing step aborts before the linking function can run, so no partial
/// link is ever applied.
pub fn resolve_endpoints(
    registry: &ResultRegistry,
    first_alias: &str,
    second_alias: &str,
    first_kind: Option<Kind>,
    second_kind: Option<Kind>,
) -> MutationResult<(SharedObject, SharedObject)> {
    let first = registry
        .get(first_alias)
        .ok_or_else(|| MutationError::node_not_found(1))?;
    let second = registry
        .get(second_alias)
        .ok_or_else(|| MutationError::node_not_found(2))?;

    let first_kind = first_kind.ok_or_else(|| MutationError::missing_kind(1))?;
    let second_kind = second_kind.ok_or_else(|| MutationError::missing_kind(2))?;

    ensure_kind(&first, first_kind)?;
    ensure_kind(&second, second_kind)?;

    Ok((first, second))
}

fn ensure_kind(object: &SharedObject, expected: Kind) -> MutationResult<()> {
    if object.kind() != expected {
        return Err(MutationError::kind_mismatch(object.kind(), expected));
    }
    Ok(())
}
