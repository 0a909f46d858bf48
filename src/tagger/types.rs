//! Core trait for taggable items.

/// An item that carries an ordered list of tags.
///
/// # Examples
///
/// ```
/// use u_curate::tagger::Taggable;
///
/// struct Record { tags: Option<Vec<String>> }
///
/// impl Taggable for Record {
///     fn tags(&self) -> &[String] {
///         self.tags.as_deref().unwrap_or(&[])
///     }
///
///     fn set_tags(&mut self, tags: Vec<String>) {
///         self.tags = Some(tags);
///     }
/// }
/// ```
pub trait Taggable {
    /// Current tags, empty if the item has none yet.
    fn tags(&self) -> &[String];

    /// Replaces the item's tags.
    fn set_tags(&mut self, tags: Vec<String>);
}
