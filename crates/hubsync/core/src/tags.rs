//! Tag set validation and normalization.

use std::collections::BTreeSet;

use thiserror::Error;

/// Maximum number of tags the hub accepts on a single registration.
pub const MAX_TAGS: usize = 64;

/// Tag set validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagSetError {
    /// More tags than the hub accepts on one registration.
    #[error("tag set has {0} tags, hub limit is {MAX_TAGS}")]
    TooMany(usize),
    /// Tags must be non-empty strings.
    #[error("tag set contains an empty tag")]
    EmptyTag,
}

/// A normalized, deduplicated set of registration tags.
///
/// Equality is set equality: order-free, exact membership. The empty set
/// and "no tags supplied" are the same value everywhere tags are compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    /// The empty tag set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate and normalize a tag collection.
    ///
    /// Duplicates collapse; empty input yields the empty set.
    pub fn normalize<I, T>(tags: I) -> Result<Self, TagSetError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut set = BTreeSet::new();
        for tag in tags {
            let tag = tag.into();
            if tag.is_empty() {
                return Err(TagSetError::EmptyTag);
            }
            set.insert(tag);
        }

        if set.len() > MAX_TAGS {
            return Err(TagSetError::TooMany(set.len()));
        }

        Ok(Self { tags: set })
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Whether the set contains `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Iterate the tags.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_deduplicates() {
        let tags = TagSet::normalize(["a", "b", "a"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("a"));
        assert!(tags.contains("b"));
    }

    #[test]
    fn test_empty_input_equals_empty_set() {
        let none: [&str; 0] = [];
        assert_eq!(TagSet::normalize(none).unwrap(), TagSet::empty());
    }

    #[test]
    fn test_sixty_tags_pass() {
        let tags: Vec<String> = (1..=60).map(|i| format!("tagNum{i}")).collect();
        let set = TagSet::normalize(tags).unwrap();
        assert_eq!(set.len(), 60);
    }

    #[test]
    fn test_over_limit_rejected() {
        let tags: Vec<String> = (1..=65).map(|i| format!("tagNum{i}")).collect();
        assert_eq!(TagSet::normalize(tags), Err(TagSetError::TooMany(65)));
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert_eq!(TagSet::normalize(["a", ""]), Err(TagSetError::EmptyTag));
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a = TagSet::normalize(["x", "y", "z"]).unwrap();
        let b = TagSet::normalize(["z", "x", "y"]).unwrap();
        assert_eq!(a, b);

        let c = TagSet::normalize(["x", "y"]).unwrap();
        assert_ne!(a, c);
    }
}
