//! Property-based tests for the pseudo-file parser.
//!
//! Tests validate:
//! 1. Non-marker lines survive in order (coverage)
//! 2. Level set is sorted, deduplicated and unaffected by repeated markers
//! 3. No emitted section is empty and no section line is a marker
//! 4. Documents without markers collapse to one default section

use proptest::prelude::*;
use pseudolens::parser::{self, marker_label};

/// A line that is either a marker or ordinary text, with optional padding.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[ a-z@:]{0,12}",
        1 => ("[ \t]{0,2}", "[a-zA-Z ]{0,6}", "[ \t]{0,2}")
            .prop_map(|(pad, label, tail)| format!("{pad}@level:{label}{tail}")),
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..20).prop_map(|lines| lines.join("\n"))
}

// ===== Property 1: Coverage =====

proptest! {
    #[test]
    fn section_lines_are_exactly_the_non_marker_lines(doc in document_strategy()) {
        let parsed = parser::parse(&doc);

        let expected: Vec<&str> = doc
            .split('\n')
            .filter(|line| marker_label(line).is_none())
            .collect();
        let actual: Vec<&str> = parsed
            .sections()
            .iter()
            .flat_map(|section| section.lines().iter().map(String::as_str))
            .collect();

        prop_assert_eq!(actual, expected);
    }
}

// ===== Property 2: Level set =====

proptest! {
    #[test]
    fn levels_are_sorted_and_distinct(doc in document_strategy()) {
        let parsed = parser::parse(&doc);
        let levels = parsed.abstraction_levels();

        prop_assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn duplicating_markers_does_not_change_levels(doc in document_strategy()) {
        let doubled: String = doc
            .split('\n')
            .flat_map(|line| {
                if marker_label(line).is_some() {
                    vec![line, line]
                } else {
                    vec![line]
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let parsed_doc = parser::parse(&doc);
        let parsed_doubled = parser::parse(&doubled);
        prop_assert_eq!(
            parsed_doc.abstraction_levels(),
            parsed_doubled.abstraction_levels()
        );
    }

    #[test]
    fn every_section_level_is_declared_or_leading_default(doc in document_strategy()) {
        let parsed = parser::parse(&doc);

        for (index, section) in parsed.sections().iter().enumerate() {
            let declared = parsed.abstraction_levels().contains(section.level());
            prop_assert!(
                declared || (index == 0 && section.level().is_default()),
                "section {} has undeclared level {:?}",
                index,
                section.level()
            );
        }
    }
}

// ===== Property 3: Section shape =====

proptest! {
    #[test]
    fn emitted_sections_are_never_empty(doc in document_strategy()) {
        for section in parser::parse(&doc).sections() {
            prop_assert!(!section.is_empty());
        }
    }

    #[test]
    fn section_lines_are_never_markers(doc in document_strategy()) {
        for section in parser::parse(&doc).sections() {
            for line in section.lines() {
                prop_assert!(marker_label(line).is_none());
            }
        }
    }
}

// ===== Property 4: No-marker documents =====

proptest! {
    #[test]
    fn marker_free_document_is_one_default_section(lines in prop::collection::vec("[a-z ]{0,10}", 1..10)) {
        let doc = lines.join("\n");
        let parsed = parser::parse(&doc);

        prop_assert!(parsed.abstraction_levels().is_empty());
        prop_assert_eq!(parsed.sections().len(), 1);
        prop_assert!(parsed.sections()[0].level().is_default());
        prop_assert_eq!(parsed.sections()[0].lines(), lines.as_slice());
    }
}
