//! A single named rule.

use super::value::Value;
use crate::bounds::BoundPredicate;
use crate::error::Result;
use std::fmt;

type ValueFn<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;

/// A named pairing of a value extractor and the bounds its values must
/// satisfy across a selection.
///
/// The value function should be pure and return a falsy value
/// ([`Value::Null`] or `false`) for missing fields rather than panic.
///
/// # Examples
///
/// ```
/// use u_curate::bounds;
/// use u_curate::rules::Rule;
///
/// struct Book { pages: u32 }
///
/// // At most 10% of the selection may be long books; tag those that are.
/// let rule = Rule::new("long books are rare", |b: &Book| b.pages > 600)
///     .with_bound(bounds::max_percentage(0.1))
///     .with_tags(["long"]);
///
/// assert!(rule.value(&Book { pages: 700 }).is_truthy());
/// assert_eq!(rule.tags(), Some(&["long".to_string()][..]));
/// ```
pub struct Rule<T> {
    name: String,
    value: ValueFn<T>,
    bounds: Vec<Box<dyn BoundPredicate>>,
    tags: Option<Vec<String>>,
}

impl<T> Rule<T> {
    /// Creates a rule with no bounds and no tags.
    pub fn new<F, V>(name: impl Into<String>, value: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            value: Box::new(move |item: &T| value(item).into()),
            bounds: Vec::new(),
            tags: None,
        }
    }

    /// Appends a bound. Bounds are evaluated in insertion order.
    pub fn with_bound<B: BoundPredicate + 'static>(mut self, bound: B) -> Self {
        self.bounds.push(Box::new(bound));
        self
    }

    /// Sets the tags the tagger adds to items matching this rule.
    ///
    /// An empty list is still "tagged" (the rule takes part in tagging but
    /// contributes nothing).
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the value function for one item.
    pub fn value(&self, item: &T) -> Value {
        (self.value)(item)
    }

    /// Returns the bounds in evaluation order.
    pub fn bounds(&self) -> &[Box<dyn BoundPredicate>] {
        &self.bounds
    }

    /// Returns the configured tags, or `None` if the rule does not tag.
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Returns `true` if every bound holds for `values`.
    ///
    /// Stops at the first failing bound.
    pub fn is_within_bounds(&self, values: &[Value]) -> bool {
        self.bounds.iter().all(|bound| bound.is_within(values))
    }

    /// Validates every bound's parameters.
    pub fn validate(&self) -> Result<()> {
        self.bounds
            .iter()
            .try_for_each(|bound| bound.validate(&self.name))
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds: Vec<String> = self.bounds.iter().map(|b| b.describe()).collect();
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("bounds", &bounds)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
