//! Registry error types.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur when recording a shared result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A second write for an alias already present in this batch.
    ///
    /// Aliases are unique within a batch, so a duplicate write is a caller
    /// bug; the registry fails loudly rather than silently overwriting.
    #[error("alias already registered in this batch: {alias}")]
    DuplicateAlias { alias: String },
}

impl RegistryError {
    pub fn duplicate_alias(alias: impl Into<String>) -> Self {
        Self::DuplicateAlias {
            alias: alias.into(),
        }
    }
}
