//! Greedy randomized subset selection.
//!
//! [`ItemSelector`] curates a pool down to a subset in which every bound
//! of every rule holds. It shuffles the pool, then sweeps it repeatedly,
//! accepting any item whose addition keeps all bounds satisfied, until a
//! sweep accepts nothing or the requested count is reached.
//!
//! The search never backtracks, so the result is reproducible for a given
//! seed but not guaranteed to be the largest feasible subset.
//!
//! The building blocks are public so rule authors can check a rule's
//! shape without running a selection:
//!
//! - [`ItemSelector::build_profile`]: one item's value under every rule.
//! - [`ItemSelector::compile_profiles`]: profiles → per-rule sequences.
//! - [`ItemSelector::values_are_within_bounds`]: all bounds, all rules.

mod config;
mod runner;
mod types;

pub use config::SelectorConfig;
pub use runner::{ItemSelector, Selection};
pub use types::{CompiledValues, Profile};
