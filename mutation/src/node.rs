//! Node operation contract - produces a shareable value.
//!
//! A `NodeMutation` holds the user-supplied produce function as a field
//! (composition, not method rewriting). The interception layer records the
//! produced object under the batch alias after a successful return; the
//! operation body must not duplicate that registration.

use crate::error::{MutationError, MutationResult};
use std::collections::HashMap;
use weave_core::{Arguments, GraphObject, SharedObject};
use weave_registry::ResultRegistry;

type ProduceFn = Box<dyn Fn(&ResultRegistry, &Arguments) -> MutationResult<SharedObject>>;
type RefResolveFn =
    Box<dyn Fn(&dyn GraphObject, &ResultRegistry, &Arguments) -> MutationResult<SharedObject>>;

/// A nested reference field on a node operation's result.
///
/// Resolved lazily by the executor on the node's own result; reads the
/// registry by alias and may apply a domain side effect (e.g. setting the
/// child's parent foreign key). Its result is never recorded.
pub struct RefField {
    resolve: RefResolveFn,
}

impl RefField {
    /// Create a reference field from its resolve body.
    pub fn new(
        resolve: impl Fn(&dyn GraphObject, &ResultRegistry, &Arguments) -> MutationResult<SharedObject>
            + 'static,
    ) -> Self {
        Self {
            resolve: Box::new(resolve),
        }
    }

    /// Resolve against the parent operation's result and the current
    /// batch registry.
    pub fn resolve(
        &self,
        parent: &dyn GraphObject,
        registry: &ResultRegistry,
        args: &Arguments,
    ) -> MutationResult<SharedObject> {
        (self.resolve)(parent, registry, args)
    }
}

impl std::fmt::Debug for RefField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefField").finish_non_exhaustive()
    }
}

/// A node-producing mutation.
///
/// Defined only for top-level batch operations: invoking one with a
/// non-null parent is a usage error rejected before the body runs.
pub struct NodeMutation {
    produce: ProduceFn,
    ref_fields: HashMap<&'static str, RefField>,
}

impl NodeMutation {
    /// Create a node mutation from its produce body.
    ///
    /// The body receives a read handle to the current batch registry and
    /// the invocation arguments, and returns the shareable object.
    pub fn new(
        produce: impl Fn(&ResultRegistry, &Arguments) -> MutationResult<SharedObject> + 'static,
    ) -> Self {
        Self {
            produce: Box::new(produce),
            ref_fields: HashMap::new(),
        }
    }

    /// Declare a named reference field on this mutation's result.
    pub fn with_ref_field(mut self, name: &'static str, field: RefField) -> Self {
        self.ref_fields.insert(name, field);
        self
    }

    /// Look up a declared reference field.
    pub fn ref_field(&self, name: &str) -> Option<&RefField> {
        self.ref_fields.get(name)
    }

    /// Run the produce step.
    ///
    /// `parent` is the enclosing resolution's result; it must be `None`
    /// for node mutations. Registration of the returned object is the
    /// interception layer's responsibility.
    pub fn mutate(
        &self,
        parent: Option<&SharedObject>,
        registry: &ResultRegistry,
        args: &Arguments,
    ) -> MutationResult<SharedObject> {
        if let Some(parent) = parent {
            return Err(MutationError::invalid_root(parent.kind()));
        }
        (self.produce)(registry, args)
    }
}

impl std::fmt::Debug for NodeMutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeMutation")
            .field("ref_fields", &self.ref_fields.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
