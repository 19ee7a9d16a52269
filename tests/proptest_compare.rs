//! Property-based tests for the compare pipeline.
//!
//! Ensures the pipeline handles arbitrary input without panicking and that
//! the key invariants hold across random inputs: lossless segment
//! reconstruction, the identical short-circuit, and the delegation gate.

use codiff::diff::reconstruct;
use codiff::{
    compare, diff_lines, estimate_tokens, ComparisonResult, CostModel, OperatingMode, SegmentKind,
};
use proptest::prelude::*;

/// Multi-line text over a small alphabet, so random pairs actually share
/// lines and exercise every segment kind.
fn line_text() -> impl Strategy<Value = String> {
    proptest::collection::vec("[abc x]{0,6}", 0..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn segments_reconstruct_both_sides(original in line_text(), modified in line_text()) {
        let segments = diff_lines(&original, &modified);
        prop_assert_eq!(reconstruct(&segments, SegmentKind::Delete), original);
        prop_assert_eq!(reconstruct(&segments, SegmentKind::Insert), modified);
    }

    #[test]
    fn self_comparison_is_identical_with_exact_savings(text in "\\PC{0,200}") {
        let result = compare(&text, &text, OperatingMode::default(), &CostModel::default())
            .expect("compare runs");

        match result {
            ComparisonResult::Identical(payload) => {
                prop_assert_eq!(
                    payload.savings.estimated_savings,
                    2 * estimate_tokens(&text) as i64 - 15
                );
            }
            other => prop_assert!(false, "expected identical, got {:?}", other),
        }
    }

    #[test]
    fn delegation_never_fires_with_mode_disabled(
        original in line_text(),
        modified in line_text(),
    ) {
        for mode in [OperatingMode::new(false, false), OperatingMode::new(false, true)] {
            let result = compare(&original, &modified, mode, &CostModel::default())
                .expect("compare runs");
            prop_assert!(!matches!(result, ComparisonResult::DelegateToLlm(_)));
        }
    }

    #[test]
    fn exactly_one_variant_and_identical_iff_equal(
        original in line_text(),
        modified in line_text(),
    ) {
        let result = compare(
            &original,
            &modified,
            OperatingMode::new(true, false),
            &CostModel::default(),
        )
        .expect("compare runs");

        match result {
            ComparisonResult::Identical(_) => prop_assert_eq!(original, modified),
            _ => prop_assert_ne!(original, modified),
        }
    }

    #[test]
    fn standard_mode_payload_never_carries_equal_segments(
        original in line_text(),
        modified in line_text(),
    ) {
        let result = compare(
            &original,
            &modified,
            OperatingMode::default(),
            &CostModel::default(),
        )
        .expect("compare runs");

        if let ComparisonResult::Diff(payload) = result {
            prop_assert!(payload.diff.iter().all(codiff::DiffSegment::is_change));
        }
    }

    #[test]
    fn estimator_never_exceeds_char_count(text in "\\PC{0,500}") {
        // Tokens are whitespace-delimited fragments; there can never be more
        // fragments than characters.
        prop_assert!(estimate_tokens(&text) <= text.chars().count());
    }

    #[test]
    fn similarity_stays_in_unit_range(a in "\\PC{0,200}", b in "\\PC{0,200}") {
        let score = codiff::positional_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }
}
