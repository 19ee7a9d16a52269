//! Cost model for diff responses.

use crate::estimate::estimate_tokens;
use serde::{Deserialize, Serialize};

/// Policy knobs for the cost-aware response decisions.
///
/// These are tuned heuristics with no derivation from first principles; the
/// delegation and warning behavior is specified against these exact values,
/// so changing them changes observable behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostModel {
    /// Input cost above which delegation is never considered; large inputs
    /// are always worth diffing server-side.
    pub delegation_max_input_cost: usize,
    /// Input cost that must not be reached for delegation to fire.
    pub delegation_small_input_cost: usize,
    /// Similarity that must be exceeded for delegation to fire.
    pub delegation_similarity_threshold: f64,
    /// Flat output cost charged for an identical-texts response.
    pub identical_response_cost: usize,
    /// Flat penalty added to the input cost when estimating what a full
    /// diff-tool response would cost the caller.
    pub diff_tool_overhead: usize,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            delegation_max_input_cost: 1000,
            delegation_small_input_cost: 200,
            delegation_similarity_threshold: 0.9,
            identical_response_cost: 15,
            diff_tool_overhead: 50,
        }
    }
}

/// Token cost of sending the two raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputCost {
    /// Estimated tokens in the original text.
    pub original_tokens: usize,
    /// Estimated tokens in the modified text.
    pub modified_tokens: usize,
}

impl InputCost {
    /// Estimate both sides of a comparison.
    #[must_use]
    pub fn of(original: &str, modified: &str) -> Self {
        Self {
            original_tokens: estimate_tokens(original),
            modified_tokens: estimate_tokens(modified),
        }
    }

    /// Combined cost of sending both raw inputs.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.original_tokens + self.modified_tokens
    }
}

/// The `savings` block of a response payload.
///
/// Field names are part of the wire format; token costs are measured over
/// the rendered payload, so renames would silently shift every estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsReport {
    /// Estimated tokens in the original text.
    pub original_tokens: usize,
    /// Estimated tokens in the modified text.
    pub modified_tokens: usize,
    /// `original_tokens + modified_tokens`.
    pub input_cost: usize,
    /// Measured token cost of the response actually returned.
    pub output_cost: usize,
    /// Estimated tokens saved versus sending the raw inputs. Signed: the
    /// identical path reports a deficit for inputs cheaper than its flat
    /// response cost.
    pub estimated_savings: i64,
}

impl SavingsReport {
    /// A report with zeroed output fields, as embedded in a payload whose
    /// own rendered cost is still being measured.
    #[must_use]
    pub fn unmeasured(input: InputCost) -> Self {
        Self {
            original_tokens: input.original_tokens,
            modified_tokens: input.modified_tokens,
            input_cost: input.total(),
            output_cost: 0,
            estimated_savings: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_carries_tuned_literals() {
        let model = CostModel::default();
        assert_eq!(model.delegation_max_input_cost, 1000);
        assert_eq!(model.delegation_small_input_cost, 200);
        assert!((model.delegation_similarity_threshold - 0.9).abs() < f64::EPSILON);
        assert_eq!(model.identical_response_cost, 15);
        assert_eq!(model.diff_tool_overhead, 50);
    }

    #[test]
    fn input_cost_sums_both_sides() {
        let input = InputCost::of("one two three", "four five");
        assert_eq!(input.original_tokens, 3);
        assert_eq!(input.modified_tokens, 2);
        assert_eq!(input.total(), 5);
    }

    #[test]
    fn savings_report_uses_wire_field_names() {
        let report = SavingsReport::unmeasured(InputCost::of("a b", "c"));
        let json = serde_json::to_value(&report).expect("report serializes");

        assert_eq!(json["originalTokens"], 2);
        assert_eq!(json["modifiedTokens"], 1);
        assert_eq!(json["inputCost"], 3);
        assert_eq!(json["outputCost"], 0);
        assert_eq!(json["estimatedSavings"], 0);
    }
}
