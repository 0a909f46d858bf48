//! Rule model.
//!
//! A [`Rule`] binds a name to a value function, the bounds those values
//! must satisfy across a selection, and optional tags. Rules live in an
//! ordered, name-unique [`RuleSet`].
//!
//! Rules contain no domain concepts: the caller decides what an item is
//! and which of its fields each value function reads.

mod rule;
mod set;
mod value;

pub use rule::Rule;
pub use set::RuleSet;
pub use value::Value;
