//! Weave Interception Layer
//!
//! Wraps every operation invocation in a batch so that operations which
//! opted into result sharing receive the per-batch registry, and every
//! completed top-level node operation's result is recorded under its
//! alias. Operations that did not opt in pass through with zero registry
//! interaction.
//!
//! Responsibilities:
//! - Dispatch on the explicit operation registration (capability marker)
//! - Record node results keyed by the first path segment, post-success only
//! - Propagate operation failures unchanged, recording nothing
//!
//! # Module Structure
//!
//! - `operation` - The explicit registration surface (Operation enum)
//! - `layer` - ShareResultLayer, the interception hook itself

mod layer;
mod operation;

pub use layer::{Resolved, ShareResultLayer};
pub use operation::Operation;
