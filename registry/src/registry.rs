//! The Result Registry - per-batch alias → result lookup.

use crate::error::{RegistryError, RegistryResult};
use std::collections::HashMap;
use weave_core::SharedObject;

/// The per-batch store of completed node operation results.
///
/// Entries are never removed or overwritten within a batch; insertion
/// order follows the completion order of top-level operations. Lookups
/// for an alias never written in this batch yield `None` - there is no
/// process-wide default state to leak values across batches.
#[derive(Debug, Default)]
pub struct ResultRegistry {
    entries: HashMap<String, SharedObject>,
    order: Vec<String>,
}

impl ResultRegistry {
    /// Create an empty registry for one batch execution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed operation's result under its alias.
    ///
    /// Fails with [`RegistryError::DuplicateAlias`] when the alias is
    /// already present (documented fail-loud choice).
    pub fn put(&mut self, alias: impl Into<String>, object: SharedObject) -> RegistryResult<()> {
        let alias = alias.into();
        if self.entries.contains_key(&alias) {
            return Err(RegistryError::duplicate_alias(alias));
        }
        self.order.push(alias.clone());
        self.entries.insert(alias, object);
        Ok(())
    }

    /// Look up a recorded result by alias. Pure lookup, no side effects.
    pub fn get(&self, alias: &str) -> Option<SharedObject> {
        self.entries.get(alias).cloned()
    }

    /// Whether an alias has been recorded in this batch.
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Number of recorded results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no result has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded aliases in completion order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
