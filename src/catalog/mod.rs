//! Book catalog preset.
//!
//! The record shape, section categorizer, pool filter and rule set used
//! to curate a shelf of second-hand books. Fetching and normalizing
//! upstream records is left to the caller; this module starts from
//! already-normalized [`CatalogItem`]s.

mod item;
mod rules;
mod section;

pub use item::{CatalogItem, Image, OfferCounts};
pub use rules::{
    catalog_rules, curate, is_rejected, MOSTLY_FICTION, MOSTLY_OLD, SEARCH_PER_SECTION,
    USED_COPIES,
};
pub use section::{categorize, Section};
