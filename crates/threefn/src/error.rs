//! Error types for comparator construction and comparison.

use crate::path::KeyPath;
use threefn_order::ValueKind;

/// A path could not be followed through a value.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A key was applied to a value that has no keys.
    #[error("cannot read key `{key}` of {found} (path `{path}`, depth {depth})")]
    NotAContainer {
        path: KeyPath,
        depth: usize,
        key: String,
        found: ValueKind,
    },
}

/// Errors surfaced by `threefn`.
#[derive(Debug, thiserror::Error)]
pub enum ThreeFnError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A JSON descriptor was neither a key nor a list of keys.
    #[error("invalid sort descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
