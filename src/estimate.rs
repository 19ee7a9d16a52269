//! Token cost estimation.
//!
//! Approximates LLM token counts by counting whitespace-delimited fragments.
//! This is a deliberately cheap proxy rather than a real tokenizer: it is
//! monotonic with text length for typical prose and code, which is all the
//! delegation heuristics need. It does not match any specific model's
//! tokenization.

use crate::error::Result;
use serde::Serialize;

/// Estimate the token cost of a text.
///
/// Splits on runs of whitespace and counts the non-empty fragments.
/// Empty or whitespace-only input yields 0.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate the token cost of a response payload in its rendered form.
///
/// The payload is serialized with 2-space pretty printing, exactly as it
/// would go over the wire, and the rendering is token-counted. Measuring the
/// rendered form (keys, braces and all) keeps candidate-cost comparisons
/// honest about serialization overhead.
pub fn estimate_payload_tokens<T: Serialize>(payload: &T) -> Result<usize> {
    let rendered = serde_json::to_string_pretty(payload)?;
    Ok(estimate_tokens(&rendered))
}
