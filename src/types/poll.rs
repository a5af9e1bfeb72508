//! Poll response types and the instrumentation report consumed by clients

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from log source name to the lines newly observed for it.
pub type LogLines = BTreeMap<String, Vec<String>>;

/// Pass/fail verdict derived from a poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No watched file produced new output
    Pass,
    /// At least one watched file produced new output
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}

/// Body of a successful poll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollResponse {
    /// New lines per log source since the previous poll
    pub logs: LogLines,
    /// Derived verdict for this poll cycle
    pub verdict: Verdict,
}

/// Instrumentation report as consumed by the env forwarder.
///
/// Every key is optional on the wire; absent keys deserialize to their
/// empty defaults so a minimal `{}` response is still well-formed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstrumentReport {
    /// New lines per log source, if the server reported any
    #[serde(default)]
    pub logs: LogLines,
    /// Signal names the target crashed on, if any
    #[serde(default)]
    pub signals: Vec<String>,
    /// Verdict string, `"pass"` or `"fail"` when present
    #[serde(default)]
    pub verdict: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Verdict::Pass).unwrap(), "\"pass\"");
        assert_eq!(serde_json::to_string(&Verdict::Fail).unwrap(), "\"fail\"");
    }

    #[test]
    fn test_poll_response_shape() {
        let mut logs = LogLines::new();
        logs.insert("a.log".to_string(), vec!["ERROR: crash".to_string()]);
        logs.insert("b.log".to_string(), vec![]);

        let body = serde_json::to_value(PollResponse {
            logs,
            verdict: Verdict::Fail,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "logs": {"a.log": ["ERROR: crash"], "b.log": []},
                "verdict": "fail",
            })
        );
    }

    #[test]
    fn test_instrument_report_tolerates_missing_keys() {
        let report: InstrumentReport = serde_json::from_str("{}").unwrap();
        assert!(report.logs.is_empty());
        assert!(report.signals.is_empty());
        assert!(report.verdict.is_none());
    }

    #[test]
    fn test_instrument_report_full() {
        let report: InstrumentReport = serde_json::from_str(
            r#"{"logs": {"f.log": ["line"]}, "signals": ["SIGSEGV"], "verdict": "fail"}"#,
        )
        .unwrap();
        assert_eq!(report.logs["f.log"], vec!["line"]);
        assert_eq!(report.signals, vec!["SIGSEGV"]);
        assert_eq!(report.verdict.as_deref(), Some("fail"));
    }
}
