//! Response composition.
//!
//! Builds the final structured result for one comparison: the identical
//! short-circuit, the delegation recommendation, or the diff payload with
//! measured output cost and advisory warnings. Field names and message
//! strings are wire format; the token cost of a response is measured over
//! its rendered form, so they must stay byte-stable.

use crate::config::OperatingMode;
use crate::diff::{CostModel, DiffSegment, InputCost, SavingsReport};
use crate::error::{ErrorContext, Result};
use crate::estimate::estimate_payload_tokens;
use serde::Serialize;

/// Message carried by an identical-texts response.
pub const IDENTICAL_MESSAGE: &str = "The provided texts are identical - no differences found.";

/// Message carried by a delegation response.
pub const DELEGATION_MESSAGE: &str = "For optimal token efficiency, please analyze these texts \
     directly rather than using the diff tool. The texts appear to have minor differences that \
     you can identify more cost-effectively.";

/// Recommendation carried by a delegation response.
pub const DELEGATION_RECOMMENDATION: &str = "Compare the texts manually by scanning for \
     differences in IDs, formatting, or content. Focus on semantic changes rather than \
     cosmetic ones.";

/// Warning attached to every accuracy-mode diff payload.
pub const ACCURACY_WARNING: &str = "ACCURACY MODE: Including unchanged text ('equal' parts) \
     may increase token costs significantly.";

/// Warning attached when the diff saves nothing over the raw inputs.
pub const NO_SAVINGS_WARNING: &str = "NO TOKEN SAVINGS: This diff provides no token savings \
     over sending the original texts.";

/// The tagged output of one comparison.
///
/// Exactly one variant is produced per call. `Identical` is produced iff the
/// two inputs are string-equal; `DelegateToLlm` is never produced unless
/// token-saving mode is enabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComparisonResult {
    /// The inputs are exactly equal.
    Identical(IdenticalPayload),
    /// The caller should compare the texts itself.
    DelegateToLlm(DelegationPayload),
    /// A computed line diff.
    Diff(DiffPayload),
}

impl ComparisonResult {
    /// Render the payload as it goes over the wire: pretty JSON with
    /// 2-space indentation.
    pub fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("rendering comparison result")
    }
}

/// Response body for exactly equal inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdenticalPayload {
    /// Always `"identical"`.
    pub result: &'static str,
    pub message: &'static str,
    pub savings: SavingsReport,
}

/// Response body recommending the caller diff the texts itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegationPayload {
    /// Always `"delegate_to_llm"`.
    pub result: &'static str,
    pub message: &'static str,
    pub recommendation: &'static str,
    pub input_info: DelegationInputInfo,
}

/// Cost context attached to a delegation response.
///
/// The original wire format mixes naming conventions here; preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelegationInputInfo {
    #[serde(rename = "originalTokens")]
    pub original_tokens: usize,
    #[serde(rename = "modifiedTokens")]
    pub modified_tokens: usize,
    #[serde(rename = "inputCost")]
    pub input_cost: usize,
    pub estimated_diff_tool_cost: usize,
}

/// Response body carrying a computed diff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffPayload {
    pub diff: Vec<DiffSegment>,
    /// `"standard"` or `"accuracy"`.
    pub mode: &'static str,
    pub savings: SavingsReport,
    /// Advisory metadata only; never alters the diff content. Absent from
    /// the wire when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Compose the identical-texts response.
///
/// Output cost is a flat constant, and the estimated savings stay unclamped:
/// inputs cheaper than the flat response cost report a negative saving.
#[must_use]
pub fn identical(original: &str, modified: &str, model: &CostModel) -> ComparisonResult {
    let input = InputCost::of(original, modified);
    let savings = SavingsReport {
        original_tokens: input.original_tokens,
        modified_tokens: input.modified_tokens,
        input_cost: input.total(),
        output_cost: model.identical_response_cost,
        estimated_savings: input.total() as i64 - model.identical_response_cost as i64,
    };

    ComparisonResult::Identical(IdenticalPayload {
        result: "identical",
        message: IDENTICAL_MESSAGE,
        savings,
    })
}

/// Compose the delegation payload for the given input cost.
///
/// Also used by the advisor as the delegation-side candidate when weighing
/// response shapes. `estimated_diff_tool_cost` is a fixed-penalty estimate,
/// not a measurement.
#[must_use]
pub fn delegation_payload(input: InputCost, model: &CostModel) -> DelegationPayload {
    DelegationPayload {
        result: "delegate_to_llm",
        message: DELEGATION_MESSAGE,
        recommendation: DELEGATION_RECOMMENDATION,
        input_info: DelegationInputInfo {
            original_tokens: input.original_tokens,
            modified_tokens: input.modified_tokens,
            input_cost: input.total(),
            estimated_diff_tool_cost: input.total() + model.diff_tool_overhead,
        },
    }
}

/// Build the diff-side candidate the advisor weighs: changes only, standard
/// mode, zeroed output-cost fields.
#[must_use]
pub fn candidate_diff_payload(changes: Vec<DiffSegment>, input: InputCost) -> DiffPayload {
    DiffPayload {
        diff: changes,
        mode: "standard",
        savings: SavingsReport::unmeasured(input),
        warnings: Vec::new(),
    }
}

/// Compose the diff response for the active mode.
///
/// Filters `equal` segments out unless accuracy mode keeps them, measures
/// the payload's own rendered token cost, and clamps the reported savings at
/// zero (unlike the identical path). Warnings are computed from the signed
/// pre-clamp deficit and appended after measurement, so they never influence
/// the measured cost.
pub fn diff_response(
    segments: Vec<DiffSegment>,
    input: InputCost,
    mode: OperatingMode,
) -> Result<ComparisonResult> {
    let diff: Vec<DiffSegment> = if mode.include_equal_segments() {
        segments
    } else {
        segments.into_iter().filter(DiffSegment::is_change).collect()
    };

    let mut payload = DiffPayload {
        diff,
        mode: mode.diff_mode_label(),
        savings: SavingsReport::unmeasured(input),
        warnings: Vec::new(),
    };

    let output_cost =
        estimate_payload_tokens(&payload).context("measuring diff payload cost")?;
    let deficit = input.total() as i64 - output_cost as i64;

    payload.savings.output_cost = output_cost;
    payload.savings.estimated_savings = deficit.max(0);
    payload.warnings = cost_warnings(mode, deficit);

    Ok(ComparisonResult::Diff(payload))
}

/// Advisory warnings for a diff payload.
fn cost_warnings(mode: OperatingMode, deficit: i64) -> Vec<String> {
    let mut warnings = Vec::new();

    if mode.accuracy {
        warnings.push(ACCURACY_WARNING.to_owned());
    }

    if deficit == 0 {
        warnings.push(NO_SAVINGS_WARNING.to_owned());
    } else if deficit < 0 {
        warnings.push(format!(
            "INCREASED COST: This diff costs {} more tokens than sending the original texts.",
            deficit.unsigned_abs()
        ));
    }

    warnings
}
