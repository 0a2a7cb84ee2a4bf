//! Weave Core Types
//!
//! This crate provides the foundational types used throughout the weave
//! system:
//! - Scalar values and argument maps (Value, Arguments)
//! - Object kinds and the shareable object contract (Kind, GraphObject)
//! - Resolution paths and invocation context (FieldPath, ResolveInfo)

mod args;
mod object;
mod path;
mod value;

pub use args::*;
pub use object::*;
pub use path::*;
pub use value::*;
