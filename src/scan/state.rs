use chrono::{DateTime, Local};

use super::{ScanError, ScanReport};

/// Identifies one submission. Settlements carrying an outdated ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(pub u64);

/// State of the scan form.
///
/// `Pending` and the terminal variants are exclusive, so a settled result is
/// never observable while a request is still marked in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScanState {
    #[default]
    Idle,
    Pending {
        url: String,
        ticket: Ticket,
    },
    Error {
        url: String,
        message: String,
    },
    Success {
        url: String,
        report: ScanReport,
        scanned_at: DateTime<Local>,
    },
}

impl ScanState {
    /// Enter `Pending` for a new submission. Allowed from every state.
    pub fn begin(self, url: String, ticket: Ticket) -> ScanState {
        ScanState::Pending { url, ticket }
    }

    /// Settle the pending submission identified by `ticket`.
    ///
    /// Returns the state unchanged when it is not pending on that ticket.
    pub fn settle(self, ticket: Ticket, outcome: Result<ScanReport, ScanError>) -> ScanState {
        match self {
            ScanState::Pending { url, ticket: current } if current == ticket => match outcome {
                Ok(report) => ScanState::Success {
                    url,
                    report,
                    scanned_at: Local::now(),
                },
                Err(e) => ScanState::Error {
                    url,
                    message: e.user_message().to_string(),
                },
            },
            other => {
                tracing::debug!("Discarding stale scan response (ticket {})", ticket.0);
                other
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ScanState::Pending { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanState::Error { .. } | ScanState::Success { .. })
    }

    /// URL of the latest submission.
    pub fn submitted_url(&self) -> Option<&str> {
        match self {
            ScanState::Idle => None,
            ScanState::Pending { url, .. }
            | ScanState::Error { url, .. }
            | ScanState::Success { url, .. } => Some(url),
        }
    }

    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            ScanState::Success { report, .. } => Some(report),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Pending { .. } => "pending",
            ScanState::Error { .. } => "error",
            ScanState::Success { .. } => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> String {
        "https://example.com".to_string()
    }

    #[test]
    fn begin_from_any_state() {
        let s = ScanState::Idle.begin(url(), Ticket(1));
        assert!(s.is_pending());
        let s = s.settle(Ticket(1), Ok(ScanReport::default()));
        assert!(s.is_terminal());
        let s = s.begin("https://other.test".into(), Ticket(2));
        assert!(s.is_pending());
        assert_eq!(s.submitted_url(), Some("https://other.test"));
        assert!(s.report().is_none());
    }

    #[test]
    fn transport_failure_settles_to_generic_error() {
        let s = ScanState::Idle
            .begin(url(), Ticket(1))
            .settle(Ticket(1), Err(ScanError::Transport("connection refused".into())));
        assert_eq!(
            s,
            ScanState::Error {
                url: url(),
                message: "Server error or invalid response.".into()
            }
        );
        assert!(!s.is_pending());
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let s = ScanState::Idle
            .begin(url(), Ticket(1))
            .begin("https://newer.test".into(), Ticket(2));
        let s = s.settle(Ticket(1), Ok(ScanReport::default()));
        assert!(s.is_pending());
        assert_eq!(s.submitted_url(), Some("https://newer.test"));

        let s = s.settle(Ticket(2), Ok(ScanReport::default()));
        assert_eq!(s.name(), "success");
    }

    #[test]
    fn settle_without_pending_is_ignored() {
        let s = ScanState::Idle.settle(Ticket(1), Ok(ScanReport::default()));
        assert_eq!(s, ScanState::Idle);
    }
}
