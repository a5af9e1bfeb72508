//! Forward prefixed environment variables and interpret the verdict

use crate::types::InstrumentReport;
use crate::{Result, TailError};
use std::collections::BTreeMap;
use tracing::{debug, error};

/// Exit code when the report carries no fail verdict.
pub const EXIT_PASS: i32 = 0;
/// Exit code when the report's verdict is `"fail"`.
pub const EXIT_FAIL: i32 = 1;
/// Exit code when the response could not be parsed as a report.
///
/// Distinct from [`EXIT_PASS`] on purpose: callers keying off the exit
/// code must be able to tell "all pass" from "response unparseable".
pub const EXIT_MALFORMED: i32 = 2;

/// Collect process environment variables whose names start with `prefix`.
pub fn collect_prefixed_env(prefix: &str) -> BTreeMap<String, String> {
    std::env::vars()
        .filter(|(name, _)| name.starts_with(prefix))
        .collect()
}

/// One-shot forwarder: POST env vars, read back an instrumentation report.
pub struct EnvForwarder {
    url: String,
    prefix: String,
}

impl EnvForwarder {
    /// Create a forwarder targeting `url`, filtering env vars by `prefix`.
    pub fn new(url: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prefix: prefix.into(),
        }
    }

    /// POST the prefixed environment as JSON and return the exit code the
    /// report maps to. Log lines and crash signals from the report are
    /// printed to stdout as a side effect.
    pub async fn run(&self) -> Result<i32> {
        let env = collect_prefixed_env(&self.prefix);
        debug!("forwarding {} {}* variables to {}", env.len(), self.prefix, self.url);

        let response = reqwest::Client::new()
            .post(&self.url)
            .json(&env)
            .send()
            .await
            .map_err(|e| TailError::Client(format!("Request to {} failed: {}", self.url, e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| TailError::Client(format!("Failed to read response: {}", e)))?;

        Ok(Self::interpret(&body))
    }

    /// Map a raw response body to the forwarder's exit code, printing the
    /// report's contents along the way.
    pub fn interpret(body: &str) -> i32 {
        let report: InstrumentReport = match serde_json::from_str(body) {
            Ok(report) => report,
            Err(e) => {
                error!("Response not in expected format (JSON dictionary): {}", e);
                return EXIT_MALFORMED;
            }
        };

        for (name, lines) in &report.logs {
            for line in lines {
                println!("{}: {}", name, line);
            }
        }
        if !report.signals.is_empty() {
            println!("Crashed on signal: {}", report.signals.join(" "));
        }

        if report.verdict.as_deref() == Some("fail") {
            EXIT_FAIL
        } else {
            EXIT_PASS
        }
    }
}
