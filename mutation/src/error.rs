//! Mutation error types.

use thiserror::Error;
use weave_core::Kind;
use weave_registry::RegistryError;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Coarse classification of mutation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Caller or configuration bug, detectable without request data.
    Usage,
    /// An alias had no recorded value in this batch.
    Lookup,
    /// A resolved value's runtime kind did not match the declared kind.
    Validation,
    /// Failure surfaced from a user-supplied produce or link body.
    Domain,
}

/// Errors that can occur during shared-result mutation execution.
#[derive(Debug, Error)]
pub enum MutationError {
    /// A node operation was invoked below the batch root.
    #[error("shared-result mutation must be a root mutation, found a {parent_kind} parent")]
    InvalidRoot { parent_kind: String },

    /// An edge endpoint alias had no recorded value.
    #[error("Node {position} not found in mutation results")]
    NodeNotFound { position: u8 },

    /// An edge type was registered without a kind declaration.
    #[error("A type must be specified for Node {position}")]
    MissingKind { position: u8 },

    /// A resolved endpoint did not conform to the declared kind.
    #[error("{actual} is not instance of {expected}")]
    KindMismatch { actual: String, expected: String },

    /// The abstract default linking function was invoked.
    #[error("link function must be supplied by the concrete edge type")]
    LinkNotImplemented,

    /// A mandatory argument was absent.
    #[error("missing required argument: {name}")]
    MissingArgument { name: String },

    /// A second result was recorded under an alias already present.
    #[error(transparent)]
    DuplicateAlias(#[from] RegistryError),

    /// Failure raised by a user-supplied produce or link body.
    #[error("{message}")]
    Domain { message: String },
}

impl MutationError {
    pub fn invalid_root(parent_kind: Kind) -> Self {
        Self::InvalidRoot {
            parent_kind: parent_kind.name().to_string(),
        }
    }

    pub fn node_not_found(position: u8) -> Self {
        Self::NodeNotFound { position }
    }

    pub fn missing_kind(position: u8) -> Self {
        Self::MissingKind { position }
    }

    pub fn kind_mismatch(actual: Kind, expected: Kind) -> Self {
        Self::KindMismatch {
            actual: actual.name().to_string(),
            expected: expected.name().to_string(),
        }
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Classify this error per the batch-level taxonomy.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidRoot { .. }
            | Self::MissingKind { .. }
            | Self::LinkNotImplemented
            | Self::MissingArgument { .. }
            | Self::DuplicateAlias(_) => ErrorClass::Usage,
            Self::NodeNotFound { .. } => ErrorClass::Lookup,
            Self::KindMismatch { .. } => ErrorClass::Validation,
            Self::Domain { .. } => ErrorClass::Domain,
        }
    }
}
