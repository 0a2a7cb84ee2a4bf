//! Edge operation contracts - consume two recorded results and link them.
//!
//! An edge operation resolves two aliases through the current batch
//! registry, validates their declared kinds, and invokes the
//! caller-supplied linking function exactly once. It returns a minimal
//! acknowledgement and never records anything into the registry.
//!
//! The two concrete contracts differ only in argument naming and in
//! whether the relation is conceptually directed:
//! - [`ParentChildEdge`]: `parent`/`child`, foreign-key style
//! - [`SiblingEdge`]: `node1`/`node2`, symmetric adjacency style

use crate::error::{MutationError, MutationResult};
use crate::validation::resolve_endpoints;
use weave_core::{Arguments, GraphObject, Kind};
use weave_registry::ResultRegistry;

type LinkFn = Box<dyn Fn(&dyn GraphObject, &dyn GraphObject) -> MutationResult<()>>;

/// Minimal acknowledgement returned by a successful edge operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeAck {
    pub ok: bool,
}

impl EdgeAck {
    fn ok() -> Self {
        Self { ok: true }
    }
}

/// An operation that consumes two recorded results by alias.
pub trait EdgeMutation {
    /// Resolve, validate, and link.
    fn mutate(&self, registry: &ResultRegistry, args: &Arguments) -> MutationResult<EdgeAck>;
}

/// Endpoint configuration shared by both edge contracts.
///
/// Kinds and the linking function are static configuration of the
/// concrete edge type; a missing kind is a configuration error surfaced
/// at invocation, and a missing linking function reproduces the
/// abstract-default failure.
struct EdgeEndpoints {
    first_kind: Option<Kind>,
    second_kind: Option<Kind>,
    link: Option<LinkFn>,
}

impl EdgeEndpoints {
    fn new() -> Self {
        Self {
            first_kind: None,
            second_kind: None,
            link: None,
        }
    }

    fn mutate(
        &self,
        registry: &ResultRegistry,
        first_alias: &str,
        second_alias: &str,
    ) -> MutationResult<EdgeAck> {
        let (first, second) = resolve_endpoints(
            registry,
            first_alias,
            second_alias,
            self.first_kind,
            self.second_kind,
        )?;
        let link = self.link.as_ref().ok_or(MutationError::LinkNotImplemented)?;
        // Exactly one invocation; callers must not assume the link step
        // is idempotent.
        link(first.as_ref(), second.as_ref())?;
        Ok(EdgeAck::ok())
    }
}

fn require_str<'a>(args: &'a Arguments, name: &str) -> MutationResult<&'a str> {
    args.str_arg(name)
        .ok_or_else(|| MutationError::missing_argument(name))
}

/// Directed edge mutation for foreign-key style links.
///
/// The linking function conventionally mutates only the child side.
pub struct ParentChildEdge {
    endpoints: EdgeEndpoints,
}

impl ParentChildEdge {
    /// Create an edge with no kinds and no linking function configured.
    pub fn new() -> Self {
        Self {
            endpoints: EdgeEndpoints::new(),
        }
    }

    /// Declare the expected kind of the parent endpoint.
    pub fn parent_kind(mut self, kind: Kind) -> Self {
        self.endpoints.first_kind = Some(kind);
        self
    }

    /// Declare the expected kind of the child endpoint.
    pub fn child_kind(mut self, kind: Kind) -> Self {
        self.endpoints.second_kind = Some(kind);
        self
    }

    /// Supply the linking function.
    pub fn link(
        mut self,
        link: impl Fn(&dyn GraphObject, &dyn GraphObject) -> MutationResult<()> + 'static,
    ) -> Self {
        self.endpoints.link = Some(Box::new(link));
        self
    }
}

impl Default for ParentChildEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeMutation for ParentChildEdge {
    fn mutate(&self, registry: &ResultRegistry, args: &Arguments) -> MutationResult<EdgeAck> {
        let parent = require_str(args, "parent")?;
        let child = require_str(args, "child")?;
        self.endpoints.mutate(registry, parent, child)
    }
}

/// Symmetric edge mutation for mutual adjacency links.
///
/// The linking function conventionally mutates both sides identically.
pub struct SiblingEdge {
    endpoints: EdgeEndpoints,
}

impl SiblingEdge {
    /// Create an edge with no kinds and no linking function configured.
    pub fn new() -> Self {
        Self {
            endpoints: EdgeEndpoints::new(),
        }
    }

    /// Declare the expected kind of the first endpoint.
    pub fn node1_kind(mut self, kind: Kind) -> Self {
        self.endpoints.first_kind = Some(kind);
        self
    }

    /// Declare the expected kind of the second endpoint.
    pub fn node2_kind(mut self, kind: Kind) -> Self {
        self.endpoints.second_kind = Some(kind);
        self
    }

    /// Supply the linking function.
    pub fn link(
        mut self,
        link: impl Fn(&dyn GraphObject, &dyn GraphObject) -> MutationResult<()> + 'static,
    ) -> Self {
        self.endpoints.link = Some(Box::new(link));
        self
    }
}

impl Default for SiblingEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeMutation for SiblingEdge {
    fn mutate(&self, registry: &ResultRegistry, args: &Arguments) -> MutationResult<EdgeAck> {
        let node1 = require_str(args, "node1")?;
        let node2 = require_str(args, "node2")?;
        self.endpoints.mutate(registry, node1, node2)
    }
}
