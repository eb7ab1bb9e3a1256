use chrono::{DateTime, Local};
use serde::Serialize;

use crate::scan::{ScanReport, ScanState};

/// Serializable view of a settled scan, written by `--output`.
#[derive(Debug, Serialize)]
pub struct ScanRecord<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a ScanReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned_at: Option<DateTime<Local>>,
}

impl<'a> ScanRecord<'a> {
    pub fn from_state(state: &'a ScanState) -> Self {
        let mut record = ScanRecord {
            tool: "urlcheck",
            version: env!("CARGO_PKG_VERSION"),
            state: state.name(),
            url: state.submitted_url(),
            error: None,
            report: state.report(),
            scanned_at: None,
        };
        match state {
            ScanState::Error { message, .. } => record.error = Some(message.as_str()),
            ScanState::Success { scanned_at, .. } => record.scanned_at = Some(*scanned_at),
            ScanState::Idle | ScanState::Pending { .. } => {}
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_record_carries_message() {
        let state = ScanState::Error {
            url: "https://example.com".into(),
            message: "Server error or invalid response.".into(),
        };
        let value = serde_json::to_value(ScanRecord::from_state(&state)).unwrap();
        assert_eq!(value["state"], "error");
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["error"], "Server error or invalid response.");
        assert!(value.get("report").is_none());
    }

    #[test]
    fn success_record_embeds_report_verbatim() {
        let report: ScanReport =
            serde_json::from_str(r#"{"status":"safe","malicious":0,"engine_results":{}}"#).unwrap();
        let state = ScanState::Success {
            url: "https://example.com".into(),
            report,
            scanned_at: Local::now(),
        };
        let value = serde_json::to_value(ScanRecord::from_state(&state)).unwrap();
        assert_eq!(value["state"], "success");
        assert_eq!(
            value["report"],
            serde_json::json!({"status": "safe", "malicious": 0, "engine_results": {}})
        );
        assert!(value["scanned_at"].is_string());
    }
}
