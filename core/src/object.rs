//! The shareable object contract.
//!
//! A node-producing operation returns a kind-tagged object. The registry
//! stores these objects by alias; edge operations validate their declared
//! kinds before linking the underlying domain entities.

use crate::Value;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Declared kind of a graph object (e.g. "Parent", "Child").
///
/// Kinds are static configuration: concrete object types carry a
/// `&'static str` name, and edge endpoint validation compares names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind(&'static str);

impl Kind {
    /// Create a kind from its static name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The kind name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A value produced by a node operation and visible to later operations
/// in the same batch.
///
/// `field` is the narrow projection hook the batch executor uses to build
/// result trees; it has no side effects.
pub trait GraphObject: fmt::Debug {
    /// The declared kind of this object.
    fn kind(&self) -> Kind;

    /// Project a named scalar field, if present.
    fn field(&self, name: &str) -> Option<Value>;

    /// Downcasting support for linking functions.
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a graph object.
///
/// Batches execute cooperatively on one thread, so a plain `Rc` suffices;
/// the registry and any in-flight edge operation hold clones for at most
/// the duration of one batch.
pub type SharedObject = Rc<dyn GraphObject>;

/// Downcast a graph object to its concrete type.
pub fn downcast<T: 'static>(object: &dyn GraphObject) -> Option<&T> {
    object.as_any().downcast_ref::<T>()
}
