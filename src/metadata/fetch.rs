//! Page fetch capability: the trait seam plus the reqwest-backed implementation.
//!
//! The extractor consumes page bodies through [`PageFetcher`] so that the
//! network policy lives in one place and tests can substitute canned pages.
//! The policy is a single GET per extraction with one hard total timeout and
//! no retry; a hung remote server cannot block a caller past the bound.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::error::ExtractError;

/// Total request timeout (connect + read) in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/learnstack/enricher";

/// Default User-Agent for enrichment requests (identifies the tool).
#[must_use]
fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("enricher/{version} (metadata-enrichment; +{PROJECT_UA_URL})")
}

/// Fetches the body text of a page.
///
/// # Object Safety
///
/// This trait uses `async_trait` to support dynamic dispatch via
/// `Box<dyn PageFetcher>`. Rust 2024 native async traits are not object-safe,
/// so `async_trait` is required for fetcher injection.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs a single GET and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] on transport failure, non-2xx status, or an
    /// unreadable body.
    async fn fetch(&self, url: &str) -> Result<String, ExtractError>;
}

/// reqwest-backed fetcher enforcing the shared timeout and User-Agent policy.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Creates a fetcher with the default total timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ClientConstruction`] when the HTTP client
    /// cannot be built.
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Creates a fetcher with a custom total timeout (for tests).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ClientConstruction`] when the HTTP client
    /// cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(default_user_agent())
            .gzip(true)
            .build()
            .map_err(|error| ExtractError::client_construction(&error.to_string()))?;
        Ok(Self { client })
    }
}

impl std::fmt::Debug for HttpPageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPageFetcher").finish_non_exhaustive()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| ExtractError::fetch_failed(url, &error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::http_status(url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|error| ExtractError::body_read(url, &error.to_string()))
    }
}
