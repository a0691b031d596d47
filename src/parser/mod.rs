//! Pseudo-file parser.
//!
//! Splits a document on `\n` and makes two independent passes over the
//! lines: one collects every label named by an `@level:` marker, the other
//! folds the lines into sections. Marker lines are consumed by both passes
//! and never appear in a section body.

use crate::model::{InternalFault, LevelLabel, ParsedDocument, Section};
use std::collections::BTreeSet;
use tracing::debug;

/// Prefix that turns a (trimmed) line into a level marker.
pub const LEVEL_MARKER: &str = "@level:";

/// Parse a pseudo-file into its level set and ordered sections.
///
/// Never fails: every string is a valid document. An empty string yields a
/// single `default` section holding one empty line.
pub fn parse(content: &str) -> ParsedDocument {
    let lines: Vec<&str> = content.split('\n').collect();

    let abstraction_levels = extract_abstraction_levels(&lines);
    let sections = segment_sections(&lines);

    debug!(
        lines = lines.len(),
        levels = abstraction_levels.len(),
        sections = sections.len(),
        "Parsed pseudo file"
    );

    ParsedDocument::new(content, abstraction_levels, sections)
}

/// Parse request input that may be absent.
///
/// This is the boundary used by the HTTP layer: a missing or non-string
/// `content` field arrives here as `None` and becomes an [`InternalFault`].
///
/// # Errors
///
/// Returns `InternalFault` only when `content` is `None`.
pub fn parse_request(content: Option<&str>) -> Result<ParsedDocument, InternalFault> {
    let content = content.ok_or_else(|| {
        InternalFault::new(
            "Failed to parse pseudo file: request body has no string `content` field",
        )
    })?;
    Ok(parse(content))
}

/// Label carried by a marker line, or `None` for an ordinary line.
///
/// The line is trimmed before the prefix check, so indented markers count.
/// A line that merely contains `@level:` somewhere else is not a marker.
pub fn marker_label(line: &str) -> Option<LevelLabel> {
    line.trim()
        .strip_prefix(LEVEL_MARKER)
        .map(LevelLabel::from_marker_text)
}

/// Distinct labels named by any marker, sorted ascending.
///
/// Labels whose section ends up empty are still reported.
pub fn extract_abstraction_levels<S: AsRef<str>>(lines: &[S]) -> Vec<LevelLabel> {
    lines
        .iter()
        .filter_map(|line| marker_label(line.as_ref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fold lines into sections in document order.
///
/// A marker closes the running section (unless it has no lines, in which
/// case it is dropped) and opens a new one under the marker's label. Lines
/// are stored untrimmed.
pub fn segment_sections<S: AsRef<str>>(lines: &[S]) -> Vec<Section> {
    lines
        .iter()
        .fold(SectionFold::default(), |fold, line| fold.step(line.as_ref()))
        .finish()
}

/// Fold state: sections already closed plus the one being filled.
#[derive(Debug)]
struct SectionFold {
    closed: Vec<Section>,
    level: LevelLabel,
    lines: Vec<String>,
}

impl Default for SectionFold {
    fn default() -> Self {
        Self {
            closed: Vec::new(),
            level: LevelLabel::default_level(),
            lines: Vec::new(),
        }
    }
}

impl SectionFold {
    fn step(mut self, line: &str) -> Self {
        match marker_label(line) {
            Some(level) => {
                self.close();
                self.level = level;
            }
            None => self.lines.push(line.to_string()),
        }
        self
    }

    /// Move the running section into `closed` if it holds any lines.
    fn close(&mut self) {
        if !self.lines.is_empty() {
            let lines = std::mem::take(&mut self.lines);
            self.closed.push(Section::new(self.level.clone(), lines));
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.close();
        self.closed
    }
}
