//! The production rule set for book curation.

use super::item::CatalogItem;
use super::section::categorize;
use crate::bounds::{max_duplication, max_percentage, min_percentage};
use crate::rules::{Rule, RuleSet};
use crate::selector::{ItemSelector, SelectorConfig};
use crate::tagger::ItemTagger;
use tracing::debug;

pub const USED_COPIES: &str = "There should be a few used copies available";
pub const SEARCH_PER_SECTION: &str =
    "There should be no more than 2 of the same search term in the same section";
pub const MOSTLY_OLD: &str = "Most books should be over 5 years old";
pub const MOSTLY_FICTION: &str =
    "Most books should be fiction, but there should be a solid chunk of non-fiction";

/// Minimum second-hand offers for a book to count as "available used".
const MIN_SECOND_HAND: u32 = 3;

/// Books older than this many years count as old.
const OLD_AFTER_YEARS: i32 = 5;

/// Smallest cover edge, in pixels, that still renders.
const MIN_IMAGE_EDGE: u32 = 10;

/// Builds the curation rules. `reference_year` is "now" for the age rule.
///
/// - 90% of books have at least three second-hand offers.
/// - No search term shows up more than twice in the same section.
/// - 90% of books are more than five years old (tagged `vintage`).
/// - Between 50% and 80% of books are fiction (tagged `fiction`).
pub fn catalog_rules(reference_year: i32) -> RuleSet<CatalogItem> {
    RuleSet::new()
        .with_rule(
            Rule::new(USED_COPIES, |item: &CatalogItem| {
                item.offer_counts
                    .is_some_and(|offers| offers.second_hand() >= MIN_SECOND_HAND)
            })
            .with_bound(min_percentage(0.9)),
        )
        .with_rule(
            Rule::new(SEARCH_PER_SECTION, |item: &CatalogItem| {
                format!("{}:{}", item.search, categorize(item))
            })
            .with_bound(max_duplication(2)),
        )
        .with_rule(
            Rule::new(MOSTLY_OLD, move |item: &CatalogItem| {
                item.published_year
                    .is_some_and(|year| year < reference_year - OLD_AFTER_YEARS)
            })
            .with_bound(min_percentage(0.9))
            .with_tags(["vintage"]),
        )
        .with_rule(
            Rule::new(MOSTLY_FICTION, |item: &CatalogItem| item.is_fiction)
                .with_bound(min_percentage(0.5))
                .with_bound(max_percentage(0.8))
                .with_tags(["fiction"]),
        )
}

/// Returns `true` for records that should never enter the pool.
///
/// Calendars and maps, records missing offers, a publication date, an
/// English edition, a usable cover or a real page count, and adult-only
/// titles are all rejected.
pub fn is_rejected(item: &CatalogItem) -> bool {
    let format = item.format.as_deref().unwrap_or_default().to_lowercase();
    let usable_image = item
        .image
        .as_ref()
        .is_some_and(|img| img.width >= MIN_IMAGE_EDGE && img.height >= MIN_IMAGE_EDGE);

    format.contains("calendar")
        || format.contains("map")
        || item.offer_counts.is_none()
        || item.published_year.is_none()
        || !item.has_english
        || !usable_image
        || !matches!(item.pages, Some(pages) if pages > 1)
        || item.is_adult_only
}

/// Filters, selects and tags a raw pool with [`catalog_rules`].
///
/// Returns owned, tagged copies of the selected records in selection
/// order.
pub fn curate(
    pool: &[CatalogItem],
    reference_year: i32,
    config: &SelectorConfig,
) -> Vec<CatalogItem> {
    let candidates: Vec<CatalogItem> = pool.iter().filter(|item| !is_rejected(item)).cloned().collect();
    debug!(
        event = "curate_pool",
        raw = pool.len(),
        candidates = candidates.len(),
    );

    let selector = ItemSelector::new(catalog_rules(reference_year));
    let mut selected = selector.select(&candidates, config).to_owned_items();
    ItemTagger::new(selector.rules()).tag(&mut selected);
    selected
}
