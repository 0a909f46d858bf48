//! Ordered, name-unique rule collections.

use super::rule::Rule;
use crate::error::{CurateError, Result};

/// An ordered mapping from rule name to [`Rule`].
///
/// Insertion order is the evaluation order for profiles, compiled values,
/// bound checks and tagging. Names are unique.
///
/// # Examples
///
/// ```
/// use u_curate::bounds;
/// use u_curate::rules::{Rule, RuleSet};
///
/// let rules = RuleSet::new()
///     .with_rule(Rule::new("big", |x: &i32| *x > 9).with_bound(bounds::max_count(2)))
///     .with_rule(Rule::new("even", |x: &i32| x % 2 == 0).with_bound(bounds::min_percentage(0.5)));
///
/// assert_eq!(rules.names(), vec!["big", "even"]);
/// ```
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    /// Creates an empty rule set. Every selection is vacuously valid.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule, builder style.
    ///
    /// # Panics
    ///
    /// Panics if the name is already taken or a bound is invalid. Use
    /// [`insert`](Self::insert) to handle those cases as errors.
    pub fn with_rule(mut self, rule: Rule<T>) -> Self {
        if let Err(e) = self.insert(rule) {
            panic!("invalid rule set: {e}");
        }
        self
    }

    /// Adds a rule after checking its name and bounds.
    pub fn insert(&mut self, rule: Rule<T>) -> Result<()> {
        if self.get(rule.name()).is_some() {
            return Err(CurateError::DuplicateRule(rule.name().to_string()));
        }
        rule.validate()?;
        self.rules.push(rule);
        Ok(())
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule<T>> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Iterates rules in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule<T>> {
        self.rules.iter()
    }

    /// Returns rule names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RuleSet<T> {
    type Item = &'a Rule<T>;
    type IntoIter = std::slice::Iter<'a, Rule<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}
