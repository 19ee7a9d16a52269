#![no_main]
use codiff::{compare, ComparisonResult, CostModel, OperatingMode, SegmentKind};
use libfuzzer_sys::fuzz_target;

/// Fuzz the compare pipeline in its most permissive mode.
///
/// Splits the input into an (original, modified) pair and checks the
/// reconstruction invariant on every diff result: Equal+Delete segments must
/// reproduce the original, Equal+Insert the modified.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut mid = s.len() / 2;
    while !s.is_char_boundary(mid) {
        mid -= 1;
    }
    let (original, modified) = s.split_at(mid);

    let result = compare(
        original,
        modified,
        OperatingMode::new(true, true),
        &CostModel::default(),
    )
    .expect("in-memory compare cannot fail");

    if let ComparisonResult::Diff(payload) = result {
        let rebuilt_original: String = payload
            .diff
            .iter()
            .filter(|seg| seg.kind != SegmentKind::Insert)
            .map(|seg| seg.text.as_str())
            .collect();
        assert_eq!(rebuilt_original, original);

        let rebuilt_modified: String = payload
            .diff
            .iter()
            .filter(|seg| seg.kind != SegmentKind::Delete)
            .map(|seg| seg.text.as_str())
            .collect();
        assert_eq!(rebuilt_modified, modified);
    }
});
