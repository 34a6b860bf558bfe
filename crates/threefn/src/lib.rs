//! # threefn
//!
//! A factory for three-way comparators. Give it sort descriptors (key
//! paths, nested key paths, or custom comparison functions) and it hands
//! back one comparator usable with any sorting API.
//!
//! ## Architecture
//!
//! ```text
//! Descriptor<C>         ← Path(["a1", "a2"]) | Func(|a, b| ...)
//!     │
//! Comparator<C>         ← resolves each descriptor against (a, b)
//!     │
//! [l1, r1, l2, r2, ...] ← flat operand sequence, descriptor order
//!     │
//! threefn_order         ← first pair that differs decides
//! ```
//!
//! Path lookup goes through the [`Container`] capability, so plain JSON
//! objects, key-value maps and user types with computed members resolve
//! the same way.
//!
//! ```
//! use serde_json::json;
//! use threefn::{Options, build};
//!
//! let by_a_then_b = build(["a", "b"], Options::default());
//! let mut rows = vec![json!({"a": 0, "b": 2}), json!({"a": 0, "b": 1})];
//! by_a_then_b.sort(&mut rows).unwrap();
//! assert_eq!(rows[0]["b"], 1);
//! ```

pub mod comparator;
pub mod container;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod path;

pub use comparator::{Comparator, ComparatorBuilder, build, build_default};
pub use container::{Container, LookupScope, resolve};
pub use descriptor::{Descriptor, SortFn, descriptor_from_value, descriptors_from_value};
pub use error::{ResolveError, ThreeFnError};
pub use options::Options;
pub use path::KeyPath;
pub use threefn_order::{MissingOrder, Operand, ValueKind, sign};
