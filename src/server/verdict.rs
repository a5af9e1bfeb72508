//! Verdict derivation from a poll cycle's log lines

use crate::types::{LogLines, Verdict};

/// Derive the verdict for one poll cycle.
///
/// `Fail` if any source produced at least one new line, `Pass` otherwise.
/// Pure; independent of the mapping's iteration order.
pub fn evaluate(logs: &LogLines) -> Verdict {
    if logs.values().any(|lines| !lines.is_empty()) {
        Verdict::Fail
    } else {
        Verdict::Pass
    }
}
