//! Constraint-bounded randomized subset selection.
//!
//! Curates a pool of records down to a bounded subset that satisfies a set
//! of aggregate rules, such as "at most 10% of the selection is X" or
//! "no more than two items share Y":
//!
//! - **Bounds** ([`bounds`]): pure predicates over the values one rule
//!   produces across a selection (`max_count`, `min_count`,
//!   `max_percentage`, `min_percentage`, `max_duplication`).
//! - **Rules** ([`rules`]): a named value function plus its bounds and
//!   optional tags, collected in an ordered [`rules::RuleSet`].
//! - **Selector** ([`selector`]): greedy, randomized, fixed-point search
//!   that grows a selection one item at a time while every bound holds.
//! - **Tagger** ([`tagger`]): stamps items with the tags of every rule
//!   they match.
//! - **Catalog** ([`catalog`]): a ready-made book record, rule set and
//!   pool filter.
//!
//! # Example
//!
//! ```
//! use u_curate::bounds;
//! use u_curate::rules::{Rule, RuleSet};
//! use u_curate::selector::{ItemSelector, SelectorConfig};
//!
//! let rules = RuleSet::new()
//!     .with_rule(Rule::new("odd", |x: &u32| x % 2 == 1).with_bound(bounds::max_count(2)));
//! let selector = ItemSelector::new(rules);
//!
//! let pool: Vec<u32> = (0..20).collect();
//! let selection = selector.select(&pool, &SelectorConfig::default().with_seed(1));
//!
//! // All ten even numbers plus two odd ones.
//! assert_eq!(selection.len(), 12);
//! ```
//!
//! # Determinism
//!
//! The only source of randomness is the pool shuffle at the start of each
//! run, driven by [`selector::SelectorConfig::seed`] or a caller-supplied
//! RNG. Same seed, same pool, same rules: same result.

pub mod bounds;
pub mod catalog;
pub mod error;
pub mod rules;
pub mod selector;
pub mod tagger;

pub use error::{CurateError, Result};
