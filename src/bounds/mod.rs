//! Bound predicates.
//!
//! A bound looks at the ordered values one rule produces across a
//! (tentative) selection and decides whether the selection is still
//! acceptable. The selector grows a selection one item at a time, so every
//! bound is only ever evaluated over prefixes of the final result.
//!
//! Builders:
//!
//! - [`max_count`] / [`min_count`]: absolute number of truthy values.
//! - [`max_percentage`] / [`min_percentage`]: share of truthy values,
//!   rounded up and recomputed for the current length.
//! - [`max_duplication`]: how often any single value may repeat.
//! - [`from_fn`]: any caller-supplied predicate.
//!
//! # Tip
//!
//! Avoid bounds that a one-element list cannot meet. Selection starts
//! from nothing and adds items one by one, so such a bound rejects every
//! first candidate. The `min_*` builders handle this by requiring *all*
//! values to match while the list is shorter than the threshold.

mod builders;
mod types;

pub use builders::{
    max_count, max_duplication, max_percentage, min_count, min_percentage, Bound,
};
pub use types::{from_fn, BoundPredicate, FnBound};
