/// Scanning endpoint used when `--endpoint` is not given
pub const DEFAULT_SCAN_ENDPOINT: &str = "http://localhost:5000/check";
/// Fixed denominator of the community score readout
pub const COMMUNITY_SCORE_DENOMINATOR: u32 = 97;
/// Message shown for transport failures and non-JSON bodies
pub const GENERIC_ERROR_MESSAGE: &str = "Server error or invalid response.";
/// Message shown when the body is JSON but not a scan report
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Malformed response from scanning service.";
/// Verdict value that marks an engine row as flagged
pub const MALICIOUS_VERDICT: &str = "malicious";
/// Status value that marks a URL as safe
pub const SAFE_STATUS: &str = "safe";
/// Content tags shown with every summary
pub const CONTENT_TAGS: [&str; 3] = ["text/html", "external-resources", "status: 200"];

// User files
pub const USER_DIR_NAME: &str = ".urlcheck";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const LOG_FILE_NAME: &str = "urlcheck.log";
