//! Rule-driven tagging.

use super::types::Taggable;
use crate::rules::{Rule, RuleSet};
use std::collections::HashSet;
use tracing::trace;

/// Stamps items with the tags of every rule they match.
///
/// Only rules that carry a tag list take part; the rest are skipped.
/// Whether an item was selected does not matter: each rule's value
/// function is evaluated independently for each item.
///
/// # Examples
///
/// ```
/// use u_curate::rules::{Rule, RuleSet};
/// use u_curate::tagger::{ItemTagger, Taggable};
///
/// #[derive(Debug)]
/// struct Book { fiction: bool, tags: Vec<String> }
///
/// impl Taggable for Book {
///     fn tags(&self) -> &[String] { &self.tags }
///     fn set_tags(&mut self, tags: Vec<String>) { self.tags = tags; }
/// }
///
/// let rules = RuleSet::new()
///     .with_rule(Rule::new("fiction", |b: &Book| b.fiction).with_tags(["fiction"]));
///
/// let mut books = vec![
///     Book { fiction: true, tags: vec!["new".into()] },
///     Book { fiction: false, tags: vec![] },
/// ];
/// ItemTagger::new(&rules).tag(&mut books);
///
/// assert_eq!(books[0].tags, vec!["new", "fiction"]);
/// assert!(books[1].tags.is_empty());
/// ```
pub struct ItemTagger<'r, T> {
    rules: Vec<&'r Rule<T>>,
}

impl<'r, T> ItemTagger<'r, T> {
    pub fn new(rules: &'r RuleSet<T>) -> Self {
        Self {
            rules: rules.iter().filter(|rule| rule.tags().is_some()).collect(),
        }
    }

    /// Number of rules that contribute tags.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Computes an item's tags without writing them.
    ///
    /// Existing tags come first, then the tags of each matching rule in
    /// rule order. Duplicates are dropped, keeping the first occurrence.
    pub fn tags_for(&self, item: &T) -> Vec<String>
    where
        T: Taggable,
    {
        let matched = self
            .rules
            .iter()
            .filter(|rule| rule.value(item).is_truthy())
            .flat_map(|rule| rule.tags().unwrap_or_default());

        let mut seen = HashSet::new();
        item.tags()
            .iter()
            .chain(matched)
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect()
    }

    /// Tags every item in place and hands the same slice back.
    ///
    /// Every item ends up with a tag list, empty if nothing matched.
    pub fn tag<'i>(&self, items: &'i mut [T]) -> &'i mut [T]
    where
        T: Taggable,
    {
        for item in items.iter_mut() {
            let tags = self.tags_for(item);
            item.set_tags(tags);
        }
        trace!(event = "tag_end", items = items.len(), rules = self.rules.len());
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        x: &'static str,
        tags: Option<Vec<String>>,
    }

    impl Taggable for Entry {
        fn tags(&self) -> &[String] {
            self.tags.as_deref().unwrap_or(&[])
        }

        fn set_tags(&mut self, tags: Vec<String>) {
            self.tags = Some(tags);
        }
    }

    fn entry(x: &'static str) -> Entry {
        Entry { x, tags: None }
    }

    fn tagged(x: &'static str, tags: &[&str]) -> Entry {
        Entry {
            x,
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        }
    }

    fn run(rules: RuleSet<Entry>, mut items: Vec<Entry>) -> Vec<Entry> {
        ItemTagger::new(&rules).tag(&mut items);
        items
    }

    #[test]
    fn test_empty_rules() {
        let rules = RuleSet::new();
        let tagger = ItemTagger::<Entry>::new(&rules);
        assert_eq!(tagger.rule_count(), 0);
        assert_eq!(run(RuleSet::new(), vec![entry("a")]), vec![tagged("a", &[])]);
    }

    #[test]
    fn test_tags_match() {
        let rules = RuleSet::new().with_rule(Rule::new("some rule", |_: &Entry| true).with_tags(["xyz"]));
        assert_eq!(run(rules, vec![entry("my item")]), vec![tagged("my item", &["xyz"])]);
    }

    #[test]
    fn test_no_match_gives_empty_list() {
        let rules = RuleSet::new().with_rule(Rule::new("some rule", |_: &Entry| false).with_tags(["xyz"]));
        assert_eq!(run(rules, vec![entry("my item")]), vec![tagged("my item", &[])]);
    }

    #[test]
    fn test_empty_tag_list() {
        let rules = RuleSet::new()
            .with_rule(Rule::new("some rule", |_: &Entry| true).with_tags(Vec::<String>::new()));
        assert_eq!(run(rules, vec![entry("my item")]), vec![tagged("my item", &[])]);
    }

    #[test]
    fn test_rules_without_tags_are_skipped() {
        let rules = RuleSet::new().with_rule(Rule::new("some rule", |_: &Entry| true));
        let tagger = ItemTagger::new(&rules);
        assert_eq!(tagger.rule_count(), 0);
        let mut items = vec![entry("my item")];
        tagger.tag(&mut items);
        assert_eq!(items, vec![tagged("my item", &[])]);
    }

    #[test]
    fn test_all_tags_of_rule() {
        let rules =
            RuleSet::new().with_rule(Rule::new("some rule", |_: &Entry| true).with_tags(["xyz", "abc"]));
        assert_eq!(run(rules, vec![entry("my item")]), vec![tagged("my item", &["xyz", "abc"])]);
    }

    #[test]
    fn test_existing_tags_first() {
        let rules =
            RuleSet::new().with_rule(Rule::new("some rule", |_: &Entry| true).with_tags(["xyz", "abc"]));
        assert_eq!(
            run(rules, vec![tagged("my item", &["def"])]),
            vec![tagged("my item", &["def", "xyz", "abc"])]
        );
    }

    #[test]
    fn test_tags_from_matching_rules_only() {
        let rules = RuleSet::new()
            .with_rule(Rule::new("some rule", |_: &Entry| true).with_tags(["xyz"]))
            .with_rule(Rule::new("other rule", |_: &Entry| false).with_tags(["abc"]))
            .with_rule(Rule::new("third rule", |_: &Entry| true).with_tags(["ghi"]));
        assert_eq!(run(rules, vec![entry("my item")]), vec![tagged("my item", &["xyz", "ghi"])]);
    }

    #[test]
    fn test_all_items() {
        let rules = RuleSet::new().with_rule(Rule::new("some rule", |_: &Entry| true).with_tags(["xyz"]));
        let items = vec![entry("my item"), tagged("not my item", &["def"])];
        assert_eq!(
            run(rules, items),
            vec![tagged("my item", &["xyz"]), tagged("not my item", &["def", "xyz"])]
        );
    }

    #[test]
    fn test_dedupe() {
        let rules = RuleSet::new()
            .with_rule(Rule::new("some rule", |_: &Entry| true).with_tags(["xyz"]))
            .with_rule(Rule::new("some other rule", |_: &Entry| true).with_tags(["xyz", "xyz"]));
        let items = vec![
            entry("my item"),
            tagged("not my item", &["xyz"]),
            tagged("3rd item", &["xyz", "xyz"]),
        ];
        assert_eq!(
            run(rules, items),
            vec![
                tagged("my item", &["xyz"]),
                tagged("not my item", &["xyz"]),
                tagged("3rd item", &["xyz"]),
            ]
        );
    }

    #[test]
    fn test_value_decides_per_item() {
        let rules = RuleSet::new()
            .with_rule(Rule::new("starts with a", |e: &Entry| e.x.starts_with('a')).with_tags(["a"]));
        let tagger = ItemTagger::new(&rules);
        assert_eq!(tagger.tags_for(&entry("apple")), vec!["a"]);
        assert!(tagger.tags_for(&entry("pear")).is_empty());
    }

    #[test]
    fn test_tagging_twice_is_stable() {
        let rules = RuleSet::new().with_rule(Rule::new("r", |_: &Entry| true).with_tags(["t"]));
        let tagger = ItemTagger::new(&rules);
        let mut items = vec![entry("x")];
        tagger.tag(&mut items);
        tagger.tag(&mut items);
        assert_eq!(items, vec![tagged("x", &["t"])]);
    }
}
