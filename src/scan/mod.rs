pub mod controller;
pub mod state;
pub mod transport;

use std::collections::BTreeMap;
use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::default::{
    GENERIC_ERROR_MESSAGE, MALFORMED_RESPONSE_MESSAGE, MALICIOUS_VERDICT, SAFE_STATUS,
};

pub use controller::ScanController;
pub use state::{ScanState, Ticket};
pub use transport::HttpTransport;

/// Body of a scan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub url: String,
}

impl ScanRequest {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self { url: url.into() }
    }
}

/// Report returned by the scanning service.
///
/// Every field is optional. The service may answer with only `error`, with
/// the verdict fields, or with a mix; rendering is best-effort over whatever
/// is present. Absent fields are skipped on serialization so a report
/// re-serializes to the same object it was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Number of engines that flagged the URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malicious: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harmless: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Community votes, malicious minus harmless
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_score: Option<i64>,
    /// Engine name to verdict
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_results: Option<BTreeMap<String, String>>,
}

impl ScanReport {
    /// Upstream error message, if a non-empty one is present.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|s| !s.is_empty())
    }

    /// Verdict status, if a non-empty one is present.
    pub fn verdict_status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_safe(&self) -> bool {
        self.status.as_deref() == Some(SAFE_STATUS)
    }
}

/// Whether an engine verdict is the literal `malicious`.
pub fn is_flagged_verdict(verdict: &str) -> bool {
    verdict == MALICIOUS_VERDICT
}

/// Failure of a single scan request.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("response body is not JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),
    #[error("response does not match the scan report schema: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl ScanError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ScanError::Transport(_) | ScanError::InvalidBody(_) => GENERIC_ERROR_MESSAGE,
            ScanError::Malformed(_) => MALFORMED_RESPONSE_MESSAGE,
        }
    }
}

/// Parse a response body into a report.
///
/// Non-JSON bodies and JSON that does not fit the report schema are kept
/// apart so they can surface different messages.
pub fn parse_report(body: &[u8]) -> Result<ScanReport, ScanError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(ScanError::InvalidBody)?;
    // serde would otherwise accept a sequence positionally
    if !value.is_object() {
        return Err(ScanError::Malformed(<serde_json::Error as serde::de::Error>::custom(
            "expected a JSON object",
        )));
    }
    serde_json::from_value(value).map_err(ScanError::Malformed)
}

/// Sends a scan request and yields the raw response body.
///
/// Any response the transport itself accepts is returned, whatever its
/// status code.
pub trait ScanTransport {
    fn send(&self, request: &ScanRequest) -> impl Future<Output = Result<Vec<u8>, ScanError>>;
}
