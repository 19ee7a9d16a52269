//! Delegation advisor.
//!
//! Decides whether a comparison should short-circuit into a recommendation
//! that the calling LLM diff the texts itself. Delegation is only worth it
//! when the texts are small, nearly identical in place, and the fixed
//! delegation message is cheaper than even an unpadded change-only diff —
//! the case where a computed diff would mostly restate near-duplicate
//! content back at the caller.

use crate::config::OperatingMode;
use crate::diff::{diff_lines, CostModel, DiffSegment, InputCost};
use crate::error::{ErrorContext, Result};
use crate::estimate::estimate_payload_tokens;
use crate::response::{candidate_diff_payload, delegation_payload};
use crate::similarity::positional_similarity;

/// Decide whether to delegate this comparison back to the caller.
///
/// Applies only in token-saving mode; otherwise always declines. Each step
/// can reject early:
///
/// 1. Reject when the combined input cost exceeds the large-input ceiling.
/// 2. Reject when the line diff yields no non-equal segments (nothing
///    cheaper to delegate; the identical short-circuit did not catch this
///    pair, so a real diff response is still the right answer).
/// 3. Measure the rendered cost of both candidate responses.
/// 4. Score positional similarity on the raw texts.
/// 5. Delegate iff the delegation candidate is strictly cheaper, similarity
///    clears the threshold, and the input cost is under the small-input
///    limit.
pub fn should_delegate(
    original: &str,
    modified: &str,
    mode: OperatingMode,
    model: &CostModel,
) -> Result<bool> {
    if !mode.token_saving {
        return Ok(false);
    }

    let input = InputCost::of(original, modified);
    if input.total() > model.delegation_max_input_cost {
        tracing::debug!(
            input_cost = input.total(),
            "input too large for delegation, diffing server-side"
        );
        return Ok(false);
    }

    let changes: Vec<DiffSegment> = diff_lines(original, modified)
        .into_iter()
        .filter(DiffSegment::is_change)
        .collect();
    if changes.is_empty() {
        return Ok(false);
    }

    let delegation_cost = estimate_payload_tokens(&delegation_payload(input, model))
        .context("measuring delegation candidate cost")?;
    let diff_cost = estimate_payload_tokens(&candidate_diff_payload(changes, input))
        .context("measuring diff candidate cost")?;

    let similarity = positional_similarity(original, modified);

    tracing::debug!(
        delegation_cost,
        diff_cost,
        similarity,
        input_cost = input.total(),
        "weighed delegation against computed diff"
    );

    Ok(delegation_cost < diff_cost
        && similarity > model.delegation_similarity_threshold
        && input.total() < model.delegation_small_input_cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single line of `n` words, optionally with the last character
    /// changed. Long single-line texts keep positional similarity near 1.0
    /// while making the change-only diff expensive to restate.
    fn near_identical_pair(n: usize) -> (String, String) {
        let original: String = (0..n)
            .map(|i| format!("word{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let mut modified = original.clone();
        modified.pop();
        modified.push('#');
        (original, modified)
    }

    #[test]
    fn declines_without_token_saving_mode() {
        let model = CostModel::default();
        let (original, modified) = near_identical_pair(80);
        assert!(!should_delegate(
            &original,
            &modified,
            OperatingMode::new(false, false),
            &model
        )
        .expect("advisor runs"));
    }

    #[test]
    fn delegates_small_near_identical_texts() {
        let model = CostModel::default();
        let (original, modified) = near_identical_pair(80);
        assert!(should_delegate(
            &original,
            &modified,
            OperatingMode::new(true, false),
            &model
        )
        .expect("advisor runs"));
    }

    #[test]
    fn rejects_large_inputs() {
        let model = CostModel::default();
        let (original, modified) = near_identical_pair(600);
        // 1200 tokens combined: past the large-input ceiling.
        assert!(!should_delegate(
            &original,
            &modified,
            OperatingMode::new(true, false),
            &model
        )
        .expect("advisor runs"));
    }

    #[test]
    fn rejects_mid_size_inputs_past_small_limit() {
        let model = CostModel::default();
        let (original, modified) = near_identical_pair(150);
        // 300 tokens combined: under the ceiling but not "small".
        assert!(!should_delegate(
            &original,
            &modified,
            OperatingMode::new(true, false),
            &model
        )
        .expect("advisor runs"));
    }

    #[test]
    fn rejects_dissimilar_texts() {
        let model = CostModel::default();
        // Whole-line rewrite: cheap inputs but positionally dissimilar.
        assert!(!should_delegate(
            "the quick brown fox",
            "何か別のものです完全に",
            OperatingMode::new(true, false),
            &model
        )
        .expect("advisor runs"));
    }

    #[test]
    fn rejects_when_diff_candidate_is_cheaper() {
        let model = CostModel::default();
        // Similar and tiny, but the change-only diff payload is far cheaper
        // than the fixed delegation message.
        assert!(!should_delegate(
            "alpha beta gamma delta",
            "alpha beta gamma deltx",
            OperatingMode::new(true, false),
            &model
        )
        .expect("advisor runs"));
    }
}
