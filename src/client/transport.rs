//! Network access for the data layer

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::client::{ClientError, PageRequest};
use crate::models::PageResult;

/// Address the catalog server listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Upper bound on one page request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// == Items Transport ==
/// Source of listing pages.
pub trait ItemsTransport: Send + Sync + 'static {
    /// Fetches one page of the listing.
    fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = Result<PageResult, ClientError>> + Send;
}

// == HTTP Transport ==
/// Fetches pages from a running catalog server.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport against `base_url` (scheme, host and port, no
    /// trailing path) with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a transport whose requests fail once `timeout` elapses.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a transport against the local server on its default port.
    pub fn local() -> Result<Self, ClientError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ItemsTransport for HttpTransport {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, ClientError> {
        let url = format!("{}/api/items", self.base_url);
        debug!("GET {} page={} q={:?}", url, request.page, request.q);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("page", request.page.to_string()),
                ("limit", request.limit.to_string()),
                ("q", request.q.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json::<PageResult>().await?)
    }
}
