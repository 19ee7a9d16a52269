//! Positional text similarity.
//!
//! The delegation thresholds are tuned against this exact metric, so it must
//! not be swapped for a "better" edit-distance measure: the positional
//! comparison deliberately penalizes leading insertions and deletions, which
//! keeps delegation limited to texts that are near-duplicates in place.

/// Score how alike two texts are, in `[0.0, 1.0]`.
///
/// Counts exact character matches at identical offsets up to the length of
/// the shorter text, divided by the length of the longer text. Two empty
/// texts score 1.0.
#[must_use]
pub fn positional_similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);

    if max_len == 0 {
        return 1.0;
    }

    let matches = a.chars().zip(b.chars()).filter(|(ca, cb)| ca == cb).count();

    matches as f64 / max_len as f64
}
