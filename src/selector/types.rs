//! Profiles and compiled values.

use crate::rules::Value;

/// One item's value under every rule, keyed by rule name in rule order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    entries: Vec<(String, Value)>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `rule`, replacing any earlier value in place.
    pub fn insert(&mut self, rule: impl Into<String>, value: Value) {
        let rule = rule.into();
        match self.entries.iter_mut().find(|(name, _)| *name == rule) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((rule, value)),
        }
    }

    pub fn get(&self, rule: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == rule)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Profile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut profile = Profile::new();
        for (rule, value) in iter {
            profile.insert(rule, value.into());
        }
        profile
    }
}

/// Per-rule value sequences across a candidate selection.
///
/// Each sequence is in selection (acceptance) order, not pool order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledValues {
    entries: Vec<(String, Vec<Value>)>,
}

impl CompiledValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sequence for `rule`, replacing any earlier one in place.
    pub fn insert(&mut self, rule: impl Into<String>, values: Vec<Value>) {
        let rule = rule.into();
        match self.entries.iter_mut().find(|(name, _)| *name == rule) {
            Some((_, slot)) => *slot = values,
            None => self.entries.push((rule, values)),
        }
    }

    pub fn get(&self, rule: &str) -> Option<&[Value]> {
        self.entries
            .iter()
            .find(|(name, _)| name == rule)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of rules covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends one item's profile to every sequence.
    ///
    /// A rule the profile lacks contributes [`Value::Null`].
    pub(crate) fn push_profile(&mut self, profile: &Profile) {
        for (name, values) in &mut self.entries {
            values.push(profile.get(name).cloned().unwrap_or_default());
        }
    }

    /// Removes the most recently pushed profile.
    pub(crate) fn pop_profile(&mut self) {
        for (_, values) in &mut self.entries {
            values.pop();
        }
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for CompiledValues
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut compiled = CompiledValues::new();
        for (rule, values) in iter {
            compiled.insert(rule, values.into_iter().map(Into::into).collect());
        }
        compiled
    }
}
