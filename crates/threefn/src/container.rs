//! Property lookup across container shapes.
//!
//! A path is resolved one key at a time. The first key goes through the
//! [`Container`] capability of the value being sorted, which is where the
//! own/inherited distinction lives. Every later key descends into the
//! plain [`Value`] the previous step produced.

use crate::error::ResolveError;
use crate::path::KeyPath;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use threefn_order::{Operand, ValueKind};
use tracing::trace;

/// Which members a lookup may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LookupScope {
    /// Only members held directly by the container.
    #[default]
    Own,

    /// Own members plus members the container inherits or computes.
    Inherited,
}

/// A value whose members can be looked up by key.
pub trait Container {
    /// Look up one key. `None` means the key is not present in `scope`.
    fn lookup(&self, key: &str, scope: LookupScope) -> Option<Value>;

    /// The container as a plain value, for direct comparison.
    fn to_value(&self) -> Cow<'_, Value>;

    /// The kind of this value when it has no members at all.
    ///
    /// Reading a key from such a value is an error rather than a miss.
    fn leaf_kind(&self) -> Option<ValueKind> {
        None
    }
}

impl Container for Value {
    fn lookup(&self, key: &str, _scope: LookupScope) -> Option<Value> {
        member(self, key).cloned()
    }

    fn to_value(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }

    fn leaf_kind(&self) -> Option<ValueKind> {
        self.is_null().then_some(ValueKind::Null)
    }
}

impl Container for Map<String, Value> {
    fn lookup(&self, key: &str, _scope: LookupScope) -> Option<Value> {
        self.get(key).cloned()
    }

    fn to_value(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Object(self.clone()))
    }
}

impl Container for BTreeMap<String, Value> {
    fn lookup(&self, key: &str, _scope: LookupScope) -> Option<Value> {
        self.get(key).cloned()
    }

    fn to_value(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Object(
            self.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        ))
    }
}

impl<S: BuildHasher> Container for HashMap<String, Value, S> {
    fn lookup(&self, key: &str, _scope: LookupScope) -> Option<Value> {
        self.get(key).cloned()
    }

    fn to_value(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Object(
            self.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        ))
    }
}

impl<C: Container + ?Sized> Container for &C {
    fn lookup(&self, key: &str, scope: LookupScope) -> Option<Value> {
        (**self).lookup(key, scope)
    }

    fn to_value(&self) -> Cow<'_, Value> {
        (**self).to_value()
    }

    fn leaf_kind(&self) -> Option<ValueKind> {
        (**self).leaf_kind()
    }
}

/// Resolve `path` against `container`.
///
/// A missing key at any depth yields [`Operand::Absent`], and so does a
/// key applied to a boolean, number or string. Applying a key to `null`
/// is a [`ResolveError::NotAContainer`].
pub fn resolve<C: Container + ?Sized>(
    container: &C,
    path: &KeyPath,
    scope: LookupScope,
) -> Result<Operand, ResolveError> {
    let Some((first, rest)) = path.keys().split_first() else {
        return Ok(Operand::Value(container.to_value().into_owned()));
    };

    if let Some(found) = container.leaf_kind() {
        return Err(not_a_container(path, 0, first, found));
    }
    let Some(head) = container.lookup(first, scope) else {
        trace!(%path, depth = 0, "path did not resolve");
        return Ok(Operand::Absent);
    };

    let mut cursor = &head;
    for (offset, key) in rest.iter().enumerate() {
        let depth = offset + 1;
        if cursor.is_null() {
            return Err(not_a_container(path, depth, key, ValueKind::Null));
        }
        match member(cursor, key) {
            Some(next) => cursor = next,
            None => {
                trace!(%path, depth, "path did not resolve");
                return Ok(Operand::Absent);
            }
        }
    }

    Ok(Operand::Value(cursor.clone()))
}

fn member<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn not_a_container(path: &KeyPath, depth: usize, key: &str, found: ValueKind) -> ResolveError {
    ResolveError::NotAContainer {
        path: path.clone(),
        depth,
        key: key.to_string(),
        found,
    }
}
