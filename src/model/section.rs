//! Sections of a pseudo-file.

use crate::model::LevelLabel;
use serde::{Deserialize, Serialize};

/// A maximal run of non-marker lines sharing one active level.
///
/// Lines are stored exactly as they appeared in the document, without
/// trimming. Serialized as `{"level": ..., "content": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    level: LevelLabel,
    #[serde(rename = "content")]
    lines: Vec<String>,
}

impl Section {
    /// Create a section from its level and body lines.
    pub fn new(level: LevelLabel, lines: Vec<String>) -> Self {
        Self { level, lines }
    }

    /// Level active for every line of this section.
    pub fn level(&self) -> &LevelLabel {
        &self.level
    }

    /// Body lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of body lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the section has no lines. The parser never emits one.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
