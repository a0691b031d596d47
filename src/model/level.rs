//! Abstraction level labels.
//!
//! A label is whatever text follows an `@level:` marker, trimmed once at each
//! end. Labels are never validated: case, inner whitespace and the empty
//! string are all kept as given.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label given to lines that appear before the first marker.
pub const DEFAULT_LEVEL: &str = "default";

/// Abstraction level label extracted from a marker line.
///
/// Ordering is the lexicographic order of the underlying string, which is
/// the order `abstraction_levels` is reported in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelLabel(String);

impl LevelLabel {
    /// Build a label from text taken verbatim.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a label from the raw text after an `@level:` prefix.
    ///
    /// Leading and trailing whitespace is trimmed; inner whitespace is kept.
    pub fn from_marker_text(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The label used before any marker has been seen.
    pub fn default_level() -> Self {
        Self(DEFAULT_LEVEL.to_string())
    }

    /// Borrow the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the implicit `"default"` level.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LEVEL
    }
}

impl fmt::Display for LevelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LevelLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LevelLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LevelLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_marker_text_trims_both_ends_only() {
        let label = LevelLabel::from_marker_text("  two  words \t");
        assert_eq!(label.as_str(), "two  words");
    }

    #[test]
    fn from_marker_text_accepts_empty() {
        let label = LevelLabel::from_marker_text("   ");
        assert_eq!(label.as_str(), "");
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_ne!(LevelLabel::new("High"), LevelLabel::new("high"));
    }

    #[test]
    fn default_level_is_default() {
        let label = LevelLabel::default_level();
        assert!(label.is_default());
        assert_eq!(label, "default");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut labels = vec![
            LevelLabel::new("mid"),
            LevelLabel::new("High"),
            LevelLabel::new("high"),
            LevelLabel::new(""),
        ];
        labels.sort();
        let names: Vec<&str> = labels.iter().map(LevelLabel::as_str).collect();
        assert_eq!(names, vec!["", "High", "high", "mid"]);
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&LevelLabel::new("high")).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
