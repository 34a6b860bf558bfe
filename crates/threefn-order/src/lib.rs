//! # threefn-order
//!
//! The base comparer: a three-way total order over dynamic JSON-shaped
//! values, and the multi-key entry point that walks a flat sequence of
//! operand pairs and stops at the first pair that differs.
//!
//! ```text
//! [l1, r1, l2, r2, ...]  ← flat operand sequence
//!     │
//! compare(l1, r1)        ← Equal? move on to the next pair
//!     │
//! Ordering               ← first non-Equal result, or Equal
//! ```
//!
//! This crate knows nothing about paths or descriptors. It only orders
//! operands that were already resolved.

pub mod operand;
pub mod order;

pub use operand::{Operand, ValueKind};
pub use order::{CompareOptions, MissingOrder, compare, compare_pairs, compare_values, sign};
