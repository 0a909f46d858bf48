//! Sweep loop.

use super::config::SelectorConfig;
use super::types::{CompiledValues, Profile};
use crate::rules::RuleSet;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a selection run.
#[derive(Debug)]
pub struct Selection<'a, T> {
    /// Selected items: start items first, then new items in acceptance
    /// order.
    pub items: Vec<&'a T>,

    /// Number of sweeps over the shuffled pool, including the final one
    /// that accepted nothing (if the run reached a fixed point).
    pub sweeps: usize,

    /// Number of candidates checked against the bounds.
    pub evaluations: usize,

    /// Number of items accepted in this run (excludes start items).
    pub accepted: usize,

    /// Whether the run stopped because `count` was reached.
    pub reached_count: bool,
}

impl<'a, T> Selection<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    pub fn into_items(self) -> Vec<&'a T> {
        self.items
    }

    /// Clones the selected items, e.g. to tag them.
    pub fn to_owned_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|&item| item.clone()).collect()
    }
}

impl<T> Clone for Selection<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            sweeps: self.sweeps,
            evaluations: self.evaluations,
            accepted: self.accepted,
            reached_count: self.reached_count,
        }
    }
}

/// Greedy randomized subset selector.
///
/// Builds a selection from a pool such that every bound of every rule
/// holds, adding one item at a time.
///
/// # Algorithm
///
/// 1. Shuffle the pool.
/// 2. Start from the given start items (not re-validated).
/// 3. Sweep the shuffled pool: for each item not yet selected, tentatively
///    append it, compile every rule's values over the tentative selection,
///    and keep it iff all bounds hold. Stop once `count` is reached.
/// 4. Repeat sweeps until one accepts nothing or `count` is reached.
///
/// Accepted items are never removed. With conflicting bounds the result
/// settles at the first size the greedy order can reach, which may be
/// smaller than what another acceptance order would allow.
///
/// # Examples
///
/// ```
/// use u_curate::bounds;
/// use u_curate::rules::{Rule, RuleSet};
/// use u_curate::selector::{ItemSelector, SelectorConfig};
///
/// let rules = RuleSet::new().with_rule(
///     Rule::new("greater than 9", |x: &i32| *x > 9)
///         .with_bound(bounds::max_percentage(0.1)),
/// );
/// let selector = ItemSelector::new(rules);
///
/// let pool: Vec<i32> = (1..=15).collect();
/// let config = SelectorConfig::default().with_count(10).with_seed(42);
/// let selection = selector.select(&pool, &config);
///
/// assert_eq!(selection.len(), 10);
/// assert_eq!(selection.iter().filter(|x| **x > 9).count(), 1);
/// ```
pub struct ItemSelector<T> {
    rules: RuleSet<T>,
}

impl<T> ItemSelector<T> {
    pub fn new(rules: RuleSet<T>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet<T> {
        &self.rules
    }

    /// Selects from `pool`, starting from nothing.
    ///
    /// Check the length of the result: it may be shorter than
    /// `config.count` when the rules cannot be satisfied further.
    pub fn select<'a>(&self, pool: &'a [T], config: &SelectorConfig) -> Selection<'a, T> {
        self.extend(pool, &[], config)
    }

    /// Extends an existing selection (usually an earlier result) with items
    /// from `pool`.
    pub fn extend<'a>(
        &self,
        pool: &'a [T],
        start: &[&'a T],
        config: &SelectorConfig,
    ) -> Selection<'a, T> {
        let mut rng = config.create_rng();
        self.extend_with_rng(pool, start, config.count, &mut rng)
    }

    /// Runs the sweep loop with a caller-supplied random source.
    ///
    /// `start` items keep their order at the front of the result. Items are
    /// identified by address, so equal values at different pool positions
    /// are distinct candidates. Each start item excludes at most one pool
    /// slot, which keeps zero-sized item types (one shared address) usable.
    /// When `start` already holds `count` or more items it is returned
    /// unchanged.
    pub fn extend_with_rng<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [T],
        start: &[&'a T],
        count: Option<usize>,
        rng: &mut R,
    ) -> Selection<'a, T> {
        let limit = count.unwrap_or(usize::MAX);

        debug!(
            event = "select_start",
            pool = pool.len(),
            start = start.len(),
            count = ?count,
            rules = self.rules.len(),
        );

        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.shuffle(rng);

        let mut items: Vec<&'a T> = start.to_vec();
        // Each start item claims at most one pool slot, so zero-sized items
        // (which all share one address) are not all marked at once.
        let mut taken = vec![false; pool.len()];
        for item in start {
            if let Some(slot) =
                (0..pool.len()).find(|&i| !taken[i] && std::ptr::eq(*item, &pool[i]))
            {
                taken[slot] = true;
            }
        }

        let start_profiles: Vec<Profile> =
            start.iter().map(|item| self.build_profile(item)).collect();
        let mut compiled = self.compile_profiles(&start_profiles);

        // Profiles are pure per item; compute each at most once per run.
        let mut profiles: Vec<Option<Profile>> = (0..pool.len()).map(|_| None).collect();

        let mut sweeps = 0usize;
        let mut evaluations = 0usize;

        while items.len() < limit {
            sweeps += 1;
            let before = items.len();

            for &idx in &order {
                if items.len() >= limit {
                    break;
                }
                if taken[idx] {
                    continue;
                }

                let profile = profiles[idx].get_or_insert_with(|| self.build_profile(&pool[idx]));
                compiled.push_profile(profile);
                evaluations += 1;

                if self.values_are_within_bounds(&compiled) {
                    taken[idx] = true;
                    items.push(&pool[idx]);
                } else {
                    compiled.pop_profile();
                }
            }

            trace!(
                event = "sweep_end",
                sweep = sweeps,
                accepted = items.len() - before,
                selected = items.len(),
            );

            // Fixed point
            if items.len() == before {
                break;
            }
        }

        let reached_count = items.len() >= limit;
        let accepted = items.len() - start.len();

        debug!(
            event = "select_end",
            sweeps = sweeps,
            selected = items.len(),
            accepted = accepted,
            evaluations = evaluations,
            reached_count = reached_count,
        );

        Selection {
            items,
            sweeps,
            evaluations,
            accepted,
            reached_count,
        }
    }

    /// Evaluates every rule's value function for `item`.
    pub fn build_profile(&self, item: &T) -> Profile {
        let mut profile = Profile::new();
        for rule in &self.rules {
            profile.insert(rule.name(), rule.value(item));
        }
        profile
    }

    /// Turns a list of profiles into one value sequence per rule, in
    /// profile order.
    ///
    /// A profile lacking a rule contributes [`Value::Null`](crate::rules::Value::Null).
    pub fn compile_profiles(&self, profiles: &[Profile]) -> CompiledValues {
        let mut compiled = CompiledValues::new();
        for rule in &self.rules {
            let values = profiles
                .iter()
                .map(|profile| profile.get(rule.name()).cloned().unwrap_or_default())
                .collect();
            compiled.insert(rule.name(), values);
        }
        compiled
    }

    /// Returns `true` if every bound of every rule holds.
    ///
    /// A rule absent from `compiled` is checked against the empty sequence.
    pub fn values_are_within_bounds(&self, compiled: &CompiledValues) -> bool {
        self.rules
            .iter()
            .all(|rule| rule.is_within_bounds(compiled.get(rule.name()).unwrap_or(&[])))
    }
}
