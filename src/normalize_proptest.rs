//! Property-based tests for normalization and extraction.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::extract::IncludeExtractor;
    use crate::normalize::Normalizer;
    use proptest::prelude::*;

    fn normalizer() -> Normalizer {
        Normalizer::new("#pragma once").unwrap()
    }

    /// Longest run of consecutive blank, newline-terminated lines
    fn longest_blank_run(text: &str) -> usize {
        let mut longest = 0;
        let mut current = 0;
        let pieces: Vec<&str> = text.split('\n').collect();
        // The last piece has no terminating newline
        for line in &pieces[..pieces.len() - 1] {
            if line.trim_matches([' ', '\t']).is_empty() {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        longest
    }

    // ============================================================================
    // blank-line collapse
    // ============================================================================

    proptest! {
        /// Property: no run of three or more blank lines survives
        #[test]
        fn collapse_leaves_no_long_blank_runs(
            lines in prop::collection::vec(prop_oneof!["", "int x;", "  ", "// c"], 0..40)
        ) {
            let text = lines.join("\n");
            let collapsed = normalizer().collapse_blank_lines(&text);
            prop_assert!(longest_blank_run(&collapsed) <= 2);
        }

        /// Property: text without long blank runs is left untouched
        #[test]
        fn collapse_keeps_short_runs(
            blocks in prop::collection::vec(("[a-z;]{1,8}", 0usize..3), 1..20)
        ) {
            let mut text = String::new();
            for (content, blanks) in &blocks {
                text.push_str(content);
                text.push('\n');
                text.push_str(&"\n".repeat(*blanks));
            }
            prop_assert_eq!(normalizer().collapse_blank_lines(&text), text);
        }

        /// Property: collapsing is idempotent
        #[test]
        fn collapse_is_idempotent(text in "[a-z \n]{0,80}") {
            let normalizer = normalizer();
            let once = normalizer.collapse_blank_lines(&text);
            let twice = normalizer.collapse_blank_lines(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: non-blank lines survive collapsing in order
        #[test]
        fn collapse_preserves_content_lines(text in "[a-z\n]{0,80}") {
            let content = |t: &str| -> Vec<String> {
                t.lines().filter(|l| !l.is_empty()).map(str::to_string).collect()
            };
            let collapsed = normalizer().collapse_blank_lines(&text);
            prop_assert_eq!(content(&collapsed), content(&text));
        }
    }

    // ============================================================================
    // guard removal
    // ============================================================================

    proptest! {
        /// Property: the guard marker never survives normalization
        #[test]
        fn guard_never_survives(
            pieces in prop::collection::vec(prop_oneof!["#pragma once", "int a;", "\n"], 0..30)
        ) {
            let text = pieces.concat();
            prop_assert!(!normalizer().normalize(&text).contains("#pragma once"));
        }
    }

    // ============================================================================
    // extraction
    // ============================================================================

    proptest! {
        /// Property: every in-scope directive is found, in order, with a span
        /// that slices back to its text
        #[test]
        fn extract_finds_generated_directives(
            names in prop::collection::vec("[a-z]{1,8}", 0..10),
            filler in "[a-z ;]{0,20}"
        ) {
            let text: String = names
                .iter()
                .map(|n| format!("{}\n#include \"lib/{}.h\"\n", filler, n))
                .collect();

            let extractor = IncludeExtractor::new("lib/").unwrap();
            let found = extractor.extract(&text);

            prop_assert_eq!(found.len(), names.len());
            for (directive, name) in found.iter().zip(&names) {
                prop_assert_eq!(&directive.target, &format!("lib/{}.h", name));
                prop_assert_eq!(&text[directive.span.clone()], directive.text.as_str());
            }
        }

        /// Property: extraction is deterministic
        #[test]
        fn extract_is_deterministic(text in "[#a-z\"/ \n]{0,120}") {
            let extractor = IncludeExtractor::new("a").unwrap();
            prop_assert_eq!(extractor.extract_all(&text), extractor.extract_all(&text));
        }
    }
}
