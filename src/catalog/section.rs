//! Shelf sections.

use super::item::CatalogItem;
use std::fmt;

/// The shelf section a book is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    Children,
    ScienceFiction,
    Horror,
    Adventure,
    Literature,
    SelfHelp,
    Religion,
    Reference,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Children => "Children",
            Section::ScienceFiction => "Science Fiction",
            Section::Horror => "Horror",
            Section::Adventure => "Adventure",
            Section::Literature => "Literature",
            Section::SelfHelp => "Self Help",
            Section::Religion => "Religion",
            Section::Reference => "Reference",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const RELIGION_MARKERS: [&str; 6] = ["religion", "christian", "buddh", "jewish", "muslim", "islam"];

/// Files a book under a section from its category names.
///
/// Matching is case-insensitive over all category names joined together.
/// Children's books win over everything; otherwise fiction and
/// non-fiction are split by keyword, falling back to Literature and
/// Reference.
pub fn categorize(item: &CatalogItem) -> Section {
    let categories = item.categories.join(" ").to_lowercase();
    let mentions = |needle: &str| categories.contains(needle);

    if mentions("children") {
        Section::Children
    } else if item.is_fiction {
        if mentions("science") {
            Section::ScienceFiction
        } else if mentions("horror") {
            Section::Horror
        } else if mentions("adventure") {
            Section::Adventure
        } else {
            Section::Literature
        }
    } else if mentions("help") {
        Section::SelfHelp
    } else if RELIGION_MARKERS.iter().any(|&m| mentions(m)) {
        Section::Religion
    } else {
        Section::Reference
    }
}
