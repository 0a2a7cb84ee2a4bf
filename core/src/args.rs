//! Named argument maps for operation invocations.

use crate::Value;
use std::collections::HashMap;

/// Caller-supplied arguments for one operation invocation.
///
/// Whether an argument is mandatory is decided by the operation consuming
/// it; the map itself stores whatever the caller passed.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: HashMap<String, Value>,
}

impl Arguments {
    /// Create an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an argument, replacing any previous value under the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get an argument by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Get a string argument by name.
    pub fn str_arg(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Get an integer argument by name.
    pub fn int_arg(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Check whether an argument is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
