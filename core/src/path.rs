//! Resolution paths and invocation context.
//!
//! The batch executor assigns every top-level operation an alias; nested
//! field resolutions extend the path with further segments. The first
//! segment is the registry key for shared results.

use std::fmt;

/// Position of the current resolution in the batch result tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Path for a top-level operation with the given alias.
    pub fn root(alias: impl Into<String>) -> Self {
        Self {
            segments: vec![alias.into()],
        }
    }

    /// Extend this path with a nested field segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The alias of the top-level operation this resolution belongs to.
    pub fn root_alias(&self) -> &str {
        &self.segments[0]
    }

    /// True for top-level resolutions (exactly one segment).
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// All path segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Contextual execution info passed to the interception layer for every
/// invocation. Carries at minimum the resolution path; the alias is the
/// first segment.
#[derive(Debug, Clone)]
pub struct ResolveInfo {
    /// Position of the current resolution in the result tree.
    pub path: FieldPath,
}

impl ResolveInfo {
    /// Info for a top-level operation.
    pub fn root(alias: impl Into<String>) -> Self {
        Self {
            path: FieldPath::root(alias),
        }
    }

    /// Info for a nested field under an existing resolution.
    pub fn nested(parent: &ResolveInfo, segment: impl Into<String>) -> Self {
        Self {
            path: parent.path.child(segment),
        }
    }

    /// The registry key for this resolution.
    pub fn alias(&self) -> &str {
        self.path.root_alias()
    }
}
