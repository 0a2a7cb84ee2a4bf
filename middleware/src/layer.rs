//! The interception layer itself.

use crate::operation::Operation;
use tracing::{debug, trace};
use weave_core::{Arguments, ResolveInfo, SharedObject, Value};
use weave_mutation::{EdgeAck, MutationResult, RefField};
use weave_registry::ResultRegistry;

/// The value an intercepted invocation resolved to, unaltered by the
/// layer's own bookkeeping.
#[derive(Debug)]
pub enum Resolved {
    /// A node operation's shareable object.
    Object(SharedObject),
    /// An edge operation's acknowledgement.
    Ack(EdgeAck),
    /// A plain operation's value.
    Value(Value),
}

impl Resolved {
    /// The shared object, if this resolution produced one.
    pub fn as_object(&self) -> Option<&SharedObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The acknowledgement, if this resolution was an edge.
    pub fn as_ack(&self) -> Option<EdgeAck> {
        match self {
            Self::Ack(ack) => Some(*ack),
            _ => None,
        }
    }

    /// The plain value, if this resolution was a plain operation.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// Interception hook wrapping every operation invocation in a batch.
///
/// The registry passed in belongs to exactly one batch execution; the
/// layer mutates it only in the post-invocation step for successful
/// top-level node operations. That registration is the layer's only side
/// effect on any invocation.
#[derive(Debug, Default)]
pub struct ShareResultLayer;

impl ShareResultLayer {
    pub fn new() -> Self {
        Self
    }

    /// Intercept one operation invocation.
    ///
    /// Node operations get the registry read handle and, on success at the
    /// batch root, their result is recorded under the first path segment.
    /// Edge operations get the read handle and are never recorded. Plain
    /// operations pass through without touching the registry. Failures
    /// propagate unchanged and record nothing.
    pub fn resolve(
        &self,
        operation: &Operation,
        parent: Option<&SharedObject>,
        info: &ResolveInfo,
        args: &Arguments,
        registry: &mut ResultRegistry,
    ) -> MutationResult<Resolved> {
        match operation {
            Operation::Node(node) => {
                let object = node.mutate(parent, registry, args)?;
                // Only top-level aliases are recorded; nested resolutions
                // of node operations are rejected by the contract itself.
                if info.path.is_root() {
                    registry.put(info.alias(), object.clone())?;
                    debug!(alias = info.alias(), kind = %object.kind(), "recorded shared result");
                }
                Ok(Resolved::Object(object))
            }
            Operation::Edge(edge) => {
                let ack = edge.mutate(registry, args)?;
                trace!(alias = info.alias(), "edge linked");
                Ok(Resolved::Ack(ack))
            }
            Operation::Plain(body) => {
                let value = body(args)?;
                trace!(alias = info.alias(), "plain operation passed through");
                Ok(Resolved::Value(value))
            }
        }
    }

    /// Intercept a nested reference-field resolution.
    ///
    /// The field reads the registry but its result is never recorded;
    /// only top-level aliases exist in the registry.
    pub fn resolve_ref_field(
        &self,
        field: &RefField,
        parent: &SharedObject,
        info: &ResolveInfo,
        args: &Arguments,
        registry: &ResultRegistry,
    ) -> MutationResult<SharedObject> {
        let object = field.resolve(parent.as_ref(), registry, args)?;
        trace!(path = %info.path, "resolved reference field");
        Ok(object)
    }
}
