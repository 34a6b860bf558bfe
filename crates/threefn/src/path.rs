//! Key paths: the route from a value to the member it is sorted by.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of keys, outermost first.
///
/// A single key is a path of length one. The empty path names the value
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// The empty path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self(vec![key.to_string()])
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        Self(vec![key])
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}

impl From<Vec<&str>> for KeyPath {
    fn from(keys: Vec<&str>) -> Self {
        Self::new(keys)
    }
}

impl From<&[&str]> for KeyPath {
    fn from(keys: &[&str]) -> Self {
        Self::new(keys.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(keys: [&str; N]) -> Self {
        Self::new(keys)
    }
}
