//! Core trait for bound predicates.

use crate::error::Result;
use crate::rules::Value;

/// A pure verdict over the values one rule produces across a selection.
///
/// The selector calls [`is_within`](Self::is_within) with the values of
/// every currently-selected item followed by the candidate under
/// consideration, in acceptance order. Implementations must be pure:
/// the same slice always yields the same answer.
///
/// # Examples
///
/// ```
/// use u_curate::bounds::{self, BoundPredicate};
/// use u_curate::rules::Value;
///
/// let at_most_two = bounds::max_count(2);
/// let values: Vec<Value> = vec![true.into(), false.into(), true.into()];
/// assert!(at_most_two.is_within(&values));
/// ```
pub trait BoundPredicate: Send + Sync {
    /// Returns `true` if `values` still satisfies this bound.
    fn is_within(&self, values: &[Value]) -> bool;

    /// Short human-readable form, used in logs and error messages.
    fn describe(&self) -> String {
        "custom".to_string()
    }

    /// Checks the bound's own parameters.
    ///
    /// `rule` names the owning rule for error reporting.
    fn validate(&self, _rule: &str) -> Result<()> {
        Ok(())
    }
}

/// A bound backed by an arbitrary closure.
///
/// Built with [`from_fn`].
pub struct FnBound<F> {
    description: String,
    predicate: F,
}

impl<F> BoundPredicate for FnBound<F>
where
    F: Fn(&[Value]) -> bool + Send + Sync,
{
    fn is_within(&self, values: &[Value]) -> bool {
        (self.predicate)(values)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

/// Wraps a closure as a [`BoundPredicate`].
///
/// # Examples
///
/// ```
/// use u_curate::bounds::{self, BoundPredicate};
/// use u_curate::rules::Value;
///
/// // No more than two truthy values, written by hand.
/// let bound = bounds::from_fn("two or fewer", |values: &[Value]| {
///     values.iter().filter(|v| v.is_truthy()).count() <= 2
/// });
/// assert!(bound.is_within(&[true.into(), true.into()]));
/// assert!(!bound.is_within(&[true.into(), true.into(), true.into()]));
/// ```
pub fn from_fn<F>(description: impl Into<String>, predicate: F) -> FnBound<F>
where
    F: Fn(&[Value]) -> bool + Send + Sync,
{
    FnBound {
        description: description.into(),
        predicate,
    }
}
