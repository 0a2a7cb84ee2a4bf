//! The explicit operation registration surface.
//!
//! Whether an operation participates in result sharing is declared here,
//! at registration time - never inferred by inspecting the operation body
//! at runtime.

use weave_core::{Arguments, Value};
use weave_mutation::{EdgeMutation, MutationResult, NodeMutation};

type PlainFn = Box<dyn Fn(&Arguments) -> MutationResult<Value>>;

/// A registered batch operation, tagged by how it participates in
/// result sharing.
pub enum Operation {
    /// Produces a shareable object, recorded under the batch alias.
    Node(NodeMutation),
    /// Consumes two recorded objects by alias; never recorded.
    Edge(Box<dyn EdgeMutation>),
    /// Ordinary operation with zero registry interaction.
    Plain(PlainFn),
}

impl Operation {
    /// Register a node-producing mutation.
    pub fn node(mutation: NodeMutation) -> Self {
        Self::Node(mutation)
    }

    /// Register an edge mutation.
    pub fn edge(mutation: impl EdgeMutation + 'static) -> Self {
        Self::Edge(Box::new(mutation))
    }

    /// Register a plain operation from its body.
    pub fn plain(body: impl Fn(&Arguments) -> MutationResult<Value> + 'static) -> Self {
        Self::Plain(Box::new(body))
    }

    /// The declared node mutation, if this is a node registration.
    pub fn as_node(&self) -> Option<&NodeMutation> {
        match self {
            Self::Node(mutation) => Some(mutation),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node(mutation) => f.debug_tuple("Node").field(mutation).finish(),
            Self::Edge(_) => f.debug_tuple("Edge").finish_non_exhaustive(),
            Self::Plain(_) => f.debug_tuple("Plain").finish_non_exhaustive(),
        }
    }
}
