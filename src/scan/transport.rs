use reqwest::Client;

use super::{ScanError, ScanRequest, ScanTransport};

/// Posts scan requests to the scanning service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client<S: Into<String>>(client: Client, endpoint: S) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScanTransport for HttpTransport {
    async fn send(&self, request: &ScanRequest) -> Result<Vec<u8>, ScanError> {
        // json() sets Content-Type: application/json
        let res = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;
        tracing::debug!("{} responded with {}", self.endpoint, res.status());
        let body = res
            .bytes()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}
