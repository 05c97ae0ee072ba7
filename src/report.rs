//! Report sinks rendering publish outcomes.

use crate::error::ErrorSeverity;
use crate::publisher::PublishResult;
use crate::traits::ReportSink;
use serde_json::Value;
use tracing::{error, info, warn};

/// Prints outcomes to stdout, failures to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Lines printed for an outcome: the message, then the payload if there is one.
    pub fn render(result: &PublishResult) -> Vec<String> {
        let mut lines = vec![result.message()];
        if let Some(payload) = &result.payload {
            lines.push(render_payload(payload));
        }
        lines
    }
}

impl ReportSink for ConsoleSink {
    fn report(&self, result: &PublishResult) {
        for line in Self::render(result) {
            if result.success {
                println!("{line}");
            } else {
                eprintln!("{line}");
            }
        }
    }
}

/// Emits outcomes as `tracing` events, at a level matching the error severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, result: &PublishResult) {
        let payload = result.payload.as_ref().map(render_payload).unwrap_or_default();

        match &result.error {
            None => info!(status = ?result.status_code, "{} {payload}", result.message()),
            Some(e) => {
                let severity = e.severity();
                match severity {
                    ErrorSeverity::Warning => {
                        warn!(%severity, kind = ?e.kind(), "{} {payload}", result.message())
                    }
                    ErrorSeverity::Error | ErrorSeverity::Critical => error!(
                        %severity,
                        kind = ?e.kind(),
                        status = ?result.status_code,
                        "{} {payload}",
                        result.message()
                    ),
                }
            }
        }
    }
}

fn render_payload(payload: &Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}
