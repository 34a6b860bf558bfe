//! Comparator configuration.

use crate::container::LookupScope;
use crate::error::ThreeFnError;
use serde::{Deserialize, Serialize};
use threefn_order::{CompareOptions, MissingOrder};

/// Options shared by path resolution and the base comparer.
///
/// Every field is optional in JSON; `Options::default()` is the empty
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Let paths see inherited or computed members, not just own ones.
    pub in_obj: bool,

    /// Placement of `null` and absent operands.
    pub missing: MissingOrder,
}

impl Options {
    /// Parse options from a JSON document such as `{"inObj": true}`.
    pub fn from_json_str(s: &str) -> Result<Self, ThreeFnError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn scope(&self) -> LookupScope {
        if self.in_obj {
            LookupScope::Inherited
        } else {
            LookupScope::Own
        }
    }

    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            missing: self.missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Options::from_json_str("{}").unwrap(), Options::default());
        assert_eq!(Options::default().scope(), LookupScope::Own);
    }

    #[test]
    fn in_obj_selects_inherited_scope() {
        let opts = Options::from_json_str(r#"{"inObj": true, "missing": "first"}"#).unwrap();
        assert_eq!(opts.scope(), LookupScope::Inherited);
        assert_eq!(opts.compare_options().missing, MissingOrder::First);
    }

    #[test]
    fn malformed_options_are_rejected() {
        let err = Options::from_json_str(r#"{"inObj": "yes"}"#).unwrap_err();
        assert!(matches!(err, ThreeFnError::InvalidOptions(_)));
    }
}
