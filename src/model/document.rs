//! Parsed pseudo-file documents.

use crate::model::{LevelLabel, Section};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Result of parsing one pseudo-file.
///
/// Built once per parse and never mutated afterwards. The serialized field
/// names (`raw_content`, `abstraction_levels`, `sections`) are part of the
/// HTTP contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    raw_content: String,
    abstraction_levels: Vec<LevelLabel>,
    sections: Vec<Section>,
}

impl ParsedDocument {
    pub(crate) fn new(
        raw_content: impl Into<String>,
        abstraction_levels: Vec<LevelLabel>,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            raw_content: raw_content.into(),
            abstraction_levels,
            sections,
        }
    }

    /// The document text exactly as received.
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Every distinct label mentioned by a marker, sorted ascending.
    ///
    /// Includes labels whose section was dropped for being empty.
    pub fn abstraction_levels(&self) -> &[LevelLabel] {
        &self.abstraction_levels
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All lines filed under `level`, across every section with that label,
    /// in document order.
    pub fn lines_at_level<'a>(&'a self, level: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.sections
            .iter()
            .filter(move |section| section.level() == level)
            .flat_map(|section| section.lines().iter().map(String::as_str))
    }

    /// Short human-readable summary: the level set followed by one line per
    /// section with its label and line count.
    pub fn outline(&self) -> String {
        let mut out = String::new();

        if self.abstraction_levels.is_empty() {
            out.push_str("levels: (none)\n");
        } else {
            let levels: Vec<String> = self
                .abstraction_levels
                .iter()
                .map(|level| format!("{:?}", level.as_str()))
                .collect();
            let _ = writeln!(out, "levels: {}", levels.join(", "));
        }

        let _ = writeln!(out, "sections: {}", self.sections.len());
        for (index, section) in self.sections.iter().enumerate() {
            let noun = if section.len() == 1 { "line" } else { "lines" };
            let _ = writeln!(
                out,
                "  {}. {:?} ({} {})",
                index + 1,
                section.level().as_str(),
                section.len(),
                noun
            );
        }

        out
    }
}
