//! **Cost-aware line diffing for LLM callers.**
//!
//! `codiff` compares two text blobs and returns a structured line-level
//! difference, while actively managing the token cost of that response for
//! the language model consuming it. It powers an MCP (Model Context
//! Protocol) stdio server exposing a single `codiff` tool, and a Rust
//! library for running the same pipeline in-process.
//!
//! # Architecture
//!
//! The pipeline is pure, synchronous, in-memory computation over the two
//! input strings:
//!
//! - [`estimate`]: whitespace-token cost proxy for texts and rendered
//!   payloads.
//! - [`similarity`]: positional similarity scorer the delegation thresholds
//!   are tuned against.
//! - [`diff`]: line-LCS segment engine and the [`CostModel`] policy knobs.
//! - [`advisor`]: decides whether recommending the caller diff the texts
//!   itself is cheaper than returning a computed diff.
//! - [`response`]: composes the final [`ComparisonResult`] — identical,
//!   delegation, or diff with measured cost and advisory warnings.
//! - [`server`]: the stdio JSON-RPC transport.
//!
//! # Example
//!
//! ```
//! use codiff::{compare, ComparisonResult, CostModel, OperatingMode};
//!
//! let result = compare(
//!     "a\nb\nc",
//!     "a\nx\nc",
//!     OperatingMode::default(),
//!     &CostModel::default(),
//! )?;
//!
//! assert!(matches!(result, ComparisonResult::Diff(_)));
//! # Ok::<(), codiff::CodiffError>(())
//! ```
//!
//! # Operating modes
//!
//! Two independent flags, fixed at startup: token-saving mode enables
//! delegation and defaults to change-only output; accuracy mode keeps
//! unchanged (`equal`) segments for full context at higher token cost. Modes
//! select filtering defaults and warning text, never a different algorithm.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize->f64/i64 casts in cost math are bounded by input size
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    // Doc completeness: # Errors sections are aspirational here
    clippy::missing_errors_doc
)]

pub mod advisor;
pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod estimate;
pub mod response;
pub mod server;
pub mod similarity;

// Re-export main types for convenience
pub use compare::{compare, compare_request, CompareRequest};
pub use config::OperatingMode;
pub use diff::{diff_lines, CostModel, DiffSegment, InputCost, SavingsReport, SegmentKind};
pub use error::{CodiffError, ErrorContext, Result};
pub use estimate::{estimate_payload_tokens, estimate_tokens};
pub use response::{ComparisonResult, DelegationPayload, DiffPayload, IdenticalPayload};
pub use similarity::positional_similarity;
