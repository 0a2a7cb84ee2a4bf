//! Weave Mutation Contracts
//!
//! The operation contracts through which batch results are shared:
//! node operations produce a value that becomes visible to later
//! operations, edge operations consume two previously recorded values
//! and establish a relation between the underlying domain entities.
//!
//! Responsibilities:
//! - Reject node operations invoked below the batch root
//! - Resolve edge endpoints by alias and validate their declared kinds
//! - Invoke the caller-supplied linking function exactly once per
//!   successful edge invocation
//! - Surface failures as typed errors, never retried or defaulted
//!
//! # Module Structure
//!
//! - `node` - Node operation contract and nested reference fields
//! - `edge` - Parent/child and sibling edge contracts
//! - `validation` - Shared endpoint resolution and kind checks
//! - `error` - Error types for mutation failures

mod edge;
mod error;
mod node;
mod validation;

pub use edge::{EdgeAck, EdgeMutation, ParentChildEdge, SiblingEdge};
pub use error::{ErrorClass, MutationError, MutationResult};
pub use node::{NodeMutation, RefField};
pub use validation::resolve_endpoints;
