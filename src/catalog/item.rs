//! Normalized catalog records.

use crate::tagger::Taggable;

/// Offer counts by condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfferCounts {
    pub new: u32,
    pub used: u32,
    pub collectible: u32,
    pub refurbished: u32,
}

impl OfferCounts {
    /// Second-hand offers of any kind.
    pub fn second_hand(&self) -> u32 {
        self.used + self.collectible + self.refurbished
    }
}

/// Cover image dimensions in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A book as produced by the upstream normalization step.
///
/// Every optional field may be absent in upstream data; rules treat an
/// absent field as "does not count".
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    /// The search term that surfaced this record.
    pub search: String,
    pub categories: Vec<String>,
    pub is_fiction: bool,
    pub offer_counts: Option<OfferCounts>,
    pub published_year: Option<i32>,
    pub has_english: bool,
    pub format: Option<String>,
    pub image: Option<Image>,
    pub pages: Option<u32>,
    pub is_adult_only: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tags: Option<Vec<String>>,
}

impl Taggable for CatalogItem {
    fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = Some(tags);
    }
}
