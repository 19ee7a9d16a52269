//! Line diff segment computation.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// The role a segment plays in the reconstruction of the two texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Present in both texts.
    Equal,
    /// Present only in the modified text.
    Insert,
    /// Present only in the original text.
    Delete,
}

/// One run of consecutive lines sharing a change kind.
///
/// An ordered segment sequence is a complete reconstruction path:
/// concatenating the text of `Equal` and `Insert` segments reproduces the
/// modified input, and concatenating `Equal` and `Delete` segments
/// reproduces the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// Change kind, serialized as `equal` / `insert` / `delete`.
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    /// The lines covered by this segment, newlines included.
    pub text: String,
}

impl DiffSegment {
    /// True for `Insert` and `Delete` segments.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.kind != SegmentKind::Equal
    }
}

/// Compute the ordered segment sequence between two texts.
///
/// Runs a line-granular LCS diff and merges consecutive same-kind lines into
/// one segment per run. Deterministic: identical inputs always yield the
/// identical sequence. No filtering happens here; the response composer
/// decides which segments a payload carries.
#[must_use]
pub fn diff_lines(original: &str, modified: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::from_lines(original, modified);
    let mut segments: Vec<DiffSegment> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Equal,
            ChangeTag::Insert => SegmentKind::Insert,
            ChangeTag::Delete => SegmentKind::Delete,
        };
        let text = change.value();

        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(text),
            _ => segments.push(DiffSegment {
                kind,
                text: text.to_owned(),
            }),
        }
    }

    segments
}

/// Reassemble one side of the comparison from a segment sequence.
///
/// Pass [`SegmentKind::Insert`] to rebuild the modified text or
/// [`SegmentKind::Delete`] to rebuild the original.
#[must_use]
pub fn reconstruct(segments: &[DiffSegment], side: SegmentKind) -> String {
    segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Equal || s.kind == side)
        .map(|s| s.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_line_substitution() {
        let segments = diff_lines("a\nb\nc", "a\nx\nc");

        assert_eq!(
            segments,
            vec![
                DiffSegment {
                    kind: SegmentKind::Equal,
                    text: "a\n".to_owned(),
                },
                DiffSegment {
                    kind: SegmentKind::Delete,
                    text: "b\n".to_owned(),
                },
                DiffSegment {
                    kind: SegmentKind::Insert,
                    text: "x\n".to_owned(),
                },
                DiffSegment {
                    kind: SegmentKind::Equal,
                    text: "c".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn consecutive_changed_lines_merge_into_one_segment() {
        let segments = diff_lines("a\nb\nc\nd\n", "a\nx\ny\nd\n");

        let deletes: Vec<_> = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Delete)
            .collect();
        let inserts: Vec<_> = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Insert)
            .collect();

        assert_eq!(deletes.len(), 1);
        assert_eq!(deletes[0].text, "b\nc\n");
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].text, "x\ny\n");
    }

    #[test]
    fn reconstruction_round_trips_both_sides() {
        let original = "fn main() {\n    println!(\"hi\");\n}\n";
        let modified = "fn main() {\n    println!(\"hello\");\n    run();\n}\n";
        let segments = diff_lines(original, modified);

        assert_eq!(reconstruct(&segments, SegmentKind::Delete), original);
        assert_eq!(reconstruct(&segments, SegmentKind::Insert), modified);
    }

    #[test]
    fn empty_original_yields_pure_insert() {
        let segments = diff_lines("", "a\nb\n");

        assert!(segments.iter().all(|s| s.kind == SegmentKind::Insert));
        assert_eq!(reconstruct(&segments, SegmentKind::Insert), "a\nb\n");
        assert_eq!(reconstruct(&segments, SegmentKind::Delete), "");
    }

    #[test]
    fn missing_trailing_newline_is_preserved() {
        let segments = diff_lines("a\nb", "a\nc");

        assert_eq!(reconstruct(&segments, SegmentKind::Delete), "a\nb");
        assert_eq!(reconstruct(&segments, SegmentKind::Insert), "a\nc");
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let first = diff_lines("x\ny\nz", "x\nq\nz");
        let second = diff_lines("x\ny\nz", "x\nq\nz");
        assert_eq!(first, second);
    }

    #[test]
    fn segment_kind_serializes_lowercase() {
        let segment = DiffSegment {
            kind: SegmentKind::Insert,
            text: "new line\n".to_owned(),
        };
        let json = serde_json::to_value(&segment).expect("segment serializes");
        assert_eq!(json["type"], "insert");
        assert_eq!(json["text"], "new line\n");
    }
}
