//! Weave Result Registry
//!
//! The per-batch alias → result store. One instance exists for exactly the
//! duration of one batch execution; it is constructed empty by the batch
//! executor and dropped when the batch finishes. Concurrent batches never
//! share an instance.
//!
//! Responsibilities:
//! - Record each completed top-level node operation's result under its alias
//! - Serve pure lookups for later operations in the same batch
//! - Preserve completion order for observability

mod error;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::ResultRegistry;
