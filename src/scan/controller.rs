use super::{parse_report, ScanError, ScanReport, ScanRequest, ScanState, ScanTransport, Ticket};

/// Owns the submit, fetch and settle cycle of the scan form.
pub struct ScanController<T> {
    transport: T,
    state: ScanState,
    last_ticket: u64,
}

impl<T: ScanTransport> ScanController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ScanState::Idle,
            last_ticket: 0,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Mark a new submission as pending and hand out its ticket.
    pub fn begin(&mut self, url: &str) -> Ticket {
        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        let state = std::mem::take(&mut self.state);
        self.state = state.begin(url.to_string(), ticket);
        debug_assert!(self.state.is_pending());
        ticket
    }

    /// Apply the outcome of the submission identified by `ticket`.
    ///
    /// Returns false when the ticket has been superseded and the outcome dropped.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<ScanReport, ScanError>) -> bool {
        let state = std::mem::take(&mut self.state);
        self.state = state.settle(ticket, outcome);
        ticket.0 == self.last_ticket && self.state.is_terminal()
    }

    /// Send one request and parse its body.
    pub async fn fetch(&self, request: &ScanRequest) -> Result<ScanReport, ScanError> {
        let body = self.transport.send(request).await?;
        parse_report(&body)
    }

    /// Submit `url` and wait until the request settles.
    pub async fn submit(&mut self, url: &str) -> &ScanState {
        let ticket = self.begin(url);
        tracing::info!("Scanning {}", url);
        let outcome = self.fetch(&ScanRequest::new(url)).await;
        match &outcome {
            Ok(report) => tracing::debug!(
                "Scan settled: status={:?} malicious={:?}",
                report.status,
                report.malicious
            ),
            Err(e) => tracing::warn!("Scan failed: {}", e),
        }
        self.settle(ticket, outcome);
        &self.state
    }
}
