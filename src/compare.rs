//! The compare operation.
//!
//! One synchronous, stateless pipeline per call: identical short-circuit,
//! then the delegation advisor, then the line diff handed to the response
//! composer. The operating mode is an explicit parameter, never ambient
//! state, so all four mode combinations are exercisable in-process.

use crate::advisor::should_delegate;
use crate::config::OperatingMode;
use crate::diff::{diff_lines, CostModel, InputCost};
use crate::error::Result;
use crate::response::{self, ComparisonResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input to one comparison. No identity beyond the call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompareRequest {
    /// The original/baseline text content to compare against
    pub original: String,
    /// The modified/updated text content to compare with the original
    pub modified: String,
}

/// Compare two texts and build the structured result for the active mode.
///
/// Produces exactly one [`ComparisonResult`] variant: `Identical` iff the
/// inputs are string-equal, `DelegateToLlm` when the advisor accepts (only
/// possible in token-saving mode), otherwise a composed `Diff`.
pub fn compare(
    original: &str,
    modified: &str,
    mode: OperatingMode,
    model: &CostModel,
) -> Result<ComparisonResult> {
    if original == modified {
        return Ok(response::identical(original, modified, model));
    }

    if should_delegate(original, modified, mode, model)? {
        let input = InputCost::of(original, modified);
        return Ok(ComparisonResult::DelegateToLlm(response::delegation_payload(
            input, model,
        )));
    }

    let segments = diff_lines(original, modified);
    response::diff_response(segments, InputCost::of(original, modified), mode)
}

/// [`compare`] over a deserialized tool request.
pub fn compare_request(
    request: &CompareRequest,
    mode: OperatingMode,
    model: &CostModel,
) -> Result<ComparisonResult> {
    compare(&request.original, &request.modified, mode, model)
}
