#![no_main]
use codiff::server::handle_message;
use codiff::{CostModel, OperatingMode};
use libfuzzer_sys::fuzz_target;

/// Fuzz the JSON-RPC dispatch with arbitrary UTF-8 lines.
///
/// Exercises the parse-error path, notification handling, and every method
/// route; the dispatcher must never panic on hostile input.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = handle_message(s, OperatingMode::new(true, true), &CostModel::default());
    }
});
