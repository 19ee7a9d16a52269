//! Line-oriented diff engine and cost model.
//!
//! The engine wraps a general-purpose LCS-style line diff (the [`similar`]
//! crate) and exposes its output as an ordered, lossless segment sequence.
//! The cost model holds the policy knobs the delegation advisor and response
//! composer decide with.

mod cost;
mod engine;

pub use cost::{CostModel, InputCost, SavingsReport};
pub use engine::{diff_lines, reconstruct, DiffSegment, SegmentKind};
