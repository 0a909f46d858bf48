//! Rule-driven tagging.
//!
//! A stateless post-pass: for each item, every tagged rule whose value is
//! truthy contributes its tags. Typically run over a selection's items,
//! but any items will do.

mod engine;
mod types;

pub use engine::ItemTagger;
pub use types::Taggable;
