//! Comparator construction.
//!
//! With no descriptors the comparator orders the two values directly.
//! Otherwise each descriptor contributes one operand pair, in order:
//!
//! - a path contributes `(resolve(a), resolve(b))`;
//! - a function contributes `(f(a, b), 0)`, so only its sign counts.
//!
//! The flat pair sequence goes to [`threefn_order::compare_pairs`], which
//! lets the first differing pair decide.

use crate::container::{Container, resolve};
use crate::descriptor::Descriptor;
use crate::error::ThreeFnError;
use crate::options::Options;
use std::cmp::Ordering;
use std::fmt;
use threefn_order::{MissingOrder, Operand, compare_pairs, compare_values, sign};
use tracing::debug;

/// A built three-way comparator.
///
/// Holds no mutable state; clones share descriptor functions.
pub struct Comparator<C> {
    descriptors: Vec<Descriptor<C>>,
    options: Options,
}

/// Build a comparator from descriptors, primary key first.
pub fn build<C, I, D>(descriptors: I, options: Options) -> Comparator<C>
where
    I: IntoIterator<Item = D>,
    D: Into<Descriptor<C>>,
{
    let descriptors: Vec<Descriptor<C>> = descriptors.into_iter().map(Into::into).collect();
    debug!(
        descriptors = descriptors.len(),
        scope = ?options.scope(),
        missing = %options.missing,
        "built comparator"
    );
    Comparator {
        descriptors,
        options,
    }
}

/// A comparator that orders values directly.
pub fn build_default<C>() -> Comparator<C> {
    build(Vec::<Descriptor<C>>::new(), Options::default())
}

impl<C> Comparator<C> {
    pub fn descriptors(&self) -> &[Descriptor<C>] {
        &self.descriptors
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl<C: Container> Comparator<C> {
    /// Compare `a` with `b`.
    ///
    /// Errors from path resolution propagate unchanged. Every descriptor
    /// is evaluated, even when an earlier one already decides.
    pub fn compare(&self, a: &C, b: &C) -> Result<Ordering, ThreeFnError> {
        let compare_options = self.options.compare_options();
        if self.descriptors.is_empty() {
            return Ok(compare_values(
                &a.to_value(),
                &b.to_value(),
                &compare_options,
            ));
        }

        let operands = self.operands(a, b)?;
        Ok(compare_pairs(&operands, &compare_options))
    }

    /// [`Comparator::compare`] as a signed indicator: `-1`, `0` or `1`.
    pub fn compare_sign(&self, a: &C, b: &C) -> Result<i32, ThreeFnError> {
        self.compare(a, b).map(sign)
    }

    /// Stably sort `items` with this comparator.
    ///
    /// On the first comparison error the remaining comparisons are
    /// treated as ties and the error is returned. `items` then holds some
    /// permutation of its input.
    pub fn sort(&self, items: &mut [C]) -> Result<(), ThreeFnError> {
        let mut failure = None;
        items.sort_by(|a, b| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            self.compare(a, b).unwrap_or_else(|err| {
                failure = Some(err);
                Ordering::Equal
            })
        });
        failure.map_or(Ok(()), Err)
    }

    /// The flat operand sequence `[l1, r1, l2, r2, ...]` for `(a, b)`.
    pub fn operands(&self, a: &C, b: &C) -> Result<Vec<Operand>, ThreeFnError> {
        let scope = self.options.scope();
        let mut operands = Vec::with_capacity(self.descriptors.len() * 2);
        for descriptor in &self.descriptors {
            match descriptor {
                Descriptor::Func(f) => {
                    operands.push(Operand::Score(f(a, b)));
                    operands.push(Operand::ZERO);
                }
                Descriptor::Path(path) => {
                    operands.push(resolve(a, path, scope)?);
                    operands.push(resolve(b, path, scope)?);
                }
            }
        }
        Ok(operands)
    }
}

impl<C> Clone for Comparator<C> {
    fn clone(&self) -> Self {
        Self {
            descriptors: self.descriptors.clone(),
            options: self.options,
        }
    }
}

impl<C> fmt::Debug for Comparator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("descriptors", &self.descriptors)
            .field("options", &self.options)
            .finish()
    }
}

/// Fluent construction of a [`Comparator`].
pub struct ComparatorBuilder<C> {
    descriptors: Vec<Descriptor<C>>,
    options: Options,
}

impl<C> ComparatorBuilder<C> {
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
            options: Options::default(),
        }
    }

    /// Add a path (or any other descriptor) as the next tie-breaker.
    pub fn by(mut self, descriptor: impl Into<Descriptor<C>>) -> Self {
        self.descriptors.push(descriptor.into());
        self
    }

    /// Add a custom comparison function as the next tie-breaker.
    pub fn by_fn<F>(self, f: F) -> Self
    where
        F: Fn(&C, &C) -> f64 + Send + Sync + 'static,
    {
        self.by(Descriptor::func(f))
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn in_obj(mut self, in_obj: bool) -> Self {
        self.options.in_obj = in_obj;
        self
    }

    pub fn missing(mut self, missing: MissingOrder) -> Self {
        self.options.missing = missing;
        self
    }

    pub fn build(self) -> Comparator<C> {
        build(self.descriptors, self.options)
    }
}

impl<C> Default for ComparatorBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
