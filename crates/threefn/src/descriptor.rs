//! Sort descriptors.

use crate::error::ThreeFnError;
use crate::path::KeyPath;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use threefn_order::ValueKind;

/// A custom comparison: only the sign of its result is used.
pub type SortFn<C> = Arc<dyn Fn(&C, &C) -> f64 + Send + Sync>;

/// One sort key.
pub enum Descriptor<C> {
    /// Compare the values found at this path.
    Path(KeyPath),

    /// Compare with a custom function.
    Func(SortFn<C>),
}

impl<C> Descriptor<C> {
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&C, &C) -> f64 + Send + Sync + 'static,
    {
        Descriptor::Func(Arc::new(f))
    }
}

impl<C> Clone for Descriptor<C> {
    fn clone(&self) -> Self {
        match self {
            Descriptor::Path(path) => Descriptor::Path(path.clone()),
            Descriptor::Func(f) => Descriptor::Func(Arc::clone(f)),
        }
    }
}

impl<C> fmt::Debug for Descriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Descriptor::Func(_) => f.write_str("Func"),
        }
    }
}

impl<C> From<KeyPath> for Descriptor<C> {
    fn from(path: KeyPath) -> Self {
        Descriptor::Path(path)
    }
}

impl<C> From<&str> for Descriptor<C> {
    fn from(key: &str) -> Self {
        Descriptor::Path(key.into())
    }
}

impl<C> From<String> for Descriptor<C> {
    fn from(key: String) -> Self {
        Descriptor::Path(key.into())
    }
}

impl<C> From<Vec<String>> for Descriptor<C> {
    fn from(keys: Vec<String>) -> Self {
        Descriptor::Path(keys.into())
    }
}

impl<C> From<Vec<&str>> for Descriptor<C> {
    fn from(keys: Vec<&str>) -> Self {
        Descriptor::Path(keys.into())
    }
}

impl<C> From<&[&str]> for Descriptor<C> {
    fn from(keys: &[&str]) -> Self {
        Descriptor::Path(keys.into())
    }
}

impl<C, const N: usize> From<[&str; N]> for Descriptor<C> {
    fn from(keys: [&str; N]) -> Self {
        Descriptor::Path(keys.into())
    }
}

/// Parse one descriptor: a key, or a list of keys for a nested path.
pub fn descriptor_from_value<C>(value: &Value) -> Result<Descriptor<C>, ThreeFnError> {
    match value {
        Value::String(key) => Ok(Descriptor::Path(key.as_str().into())),
        Value::Array(items) => {
            let keys = items
                .iter()
                .map(|item| {
                    item.as_str().map(String::from).ok_or_else(|| {
                        ThreeFnError::InvalidDescriptor(format!(
                            "nested path keys must be strings, got {}",
                            ValueKind::of(item)
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Descriptor::Path(keys.into()))
        }
        other => Err(ThreeFnError::InvalidDescriptor(format!(
            "expected a key or a list of keys, got {}",
            ValueKind::of(other)
        ))),
    }
}

/// Parse a descriptor list.
///
/// Accepts the same shapes as a variadic call: `"a"` is one key,
/// `["a", "b"]` is two keys, and `[["a1", "a2"], "b"]` is a nested path
/// followed by a key.
pub fn descriptors_from_value<C>(value: &Value) -> Result<Vec<Descriptor<C>>, ThreeFnError> {
    match value {
        Value::Array(items) => items.iter().map(descriptor_from_value::<C>).collect(),
        single => Ok(vec![descriptor_from_value(single)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(descriptors: &[Descriptor<Value>]) -> Vec<Vec<String>> {
        descriptors
            .iter()
            .map(|d| match d {
                Descriptor::Path(path) => path.keys().to_vec(),
                Descriptor::Func(_) => panic!("unexpected function descriptor"),
            })
            .collect()
    }

    #[test]
    fn parses_variadic_shapes() {
        let single = descriptors_from_value::<Value>(&json!("key")).unwrap();
        assert_eq!(paths(&single), vec![vec!["key"]]);

        let flat = descriptors_from_value::<Value>(&json!(["a", "b"])).unwrap();
        assert_eq!(paths(&flat), vec![vec!["a"], vec!["b"]]);

        let nested = descriptors_from_value::<Value>(&json!([["a1", "a2"], ["b"]])).unwrap();
        assert_eq!(paths(&nested), vec![vec!["a1", "a2"], vec!["b"]]);
    }

    #[test]
    fn rejects_non_key_shapes() {
        let err = descriptors_from_value::<Value>(&json!([1])).unwrap_err();
        assert!(matches!(err, ThreeFnError::InvalidDescriptor(_)));

        let err = descriptor_from_value::<Value>(&json!(["a", {"b": 1}])).unwrap_err();
        assert!(err.to_string().contains("got object"));
    }

    #[test]
    fn function_descriptors_debug_opaquely() {
        let d = Descriptor::<Value>::func(|_, _| 0.0);
        assert_eq!(format!("{d:?}"), "Func");
        let d: Descriptor<Value> = ["a1", "a2"].into();
        assert!(format!("{d:?}").starts_with("Path"));
    }
}
