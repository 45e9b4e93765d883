//! Best-effort metadata extraction for resource URLs.
//!
//! Given a URL, the extractor performs a single bounded-timeout GET, parses
//! the page, and derives title, description, topics, reading time, and
//! difficulty. It never fails: every error path is converted into the
//! fallback record at one boundary, so callers always receive a usable
//! record. Extraction is advisory enrichment and must never block a caller's
//! workflow on a bad or unreachable URL.
//!
//! # Architecture
//!
//! - [`MetadataRecord`] / [`Difficulty`] - the result types
//! - [`PageFetcher`] / [`HttpPageFetcher`] - injected fetch capability
//! - [`PageContent`] - one-pass HTML field extraction
//! - [`estimate_reading_minutes`] / [`score_difficulty`] /
//!   [`topics_from_headings`] - pure scorers, swappable independently of the
//!   fetch/parse pipeline
//!
//! # Example
//!
//! ```no_run
//! use enricher_core::metadata::MetadataExtractor;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = MetadataExtractor::new()?;
//! let record = extractor.extract("https://example.com/intro-to-rust").await;
//! println!("{} ({} min)", record.title, record.estimated_time);
//! # Ok(())
//! # }
//! ```

mod error;
mod fetch;
mod heuristics;
mod page;
mod record;

pub use error::ExtractError;
pub use fetch::{HttpPageFetcher, PageFetcher, REQUEST_TIMEOUT_SECS};
pub use heuristics::{
    MAX_TOPICS, estimate_reading_minutes, score_difficulty, topics_from_headings, word_count,
};
pub use page::PageContent;
pub use record::{Difficulty, FALLBACK_DESCRIPTION, FALLBACK_ESTIMATED_MINUTES, MetadataRecord};

use tracing::{debug, warn};
use url::Url;

/// Schemes accepted as fetchable resource URLs.
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Validates resource URL syntax before any network is touched.
///
/// Accepts http(s)/ftp(s) URLs with a host (domain, IP, or localhost; port
/// and path come free with the parser). Validation is independent of
/// fetchability: ftp URLs pass here and fail at the fetch layer, both landing
/// in the fallback path.
fn validate_url(raw: &str) -> Result<(), ExtractError> {
    let parsed = Url::parse(raw).map_err(|e| ExtractError::malformed(raw, &e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ExtractError::unsupported_scheme(raw, parsed.scheme()));
    }

    if parsed.host().is_none() {
        return Err(ExtractError::no_host(raw));
    }

    Ok(())
}

/// Extracts best-effort metadata from resource URLs.
///
/// Owns its fetch capability, so one extractor reuses a single connection
/// pool across calls. Stateless between invocations and safe to share across
/// tasks.
pub struct MetadataExtractor {
    fetcher: Box<dyn PageFetcher>,
}

impl std::fmt::Debug for MetadataExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataExtractor").finish_non_exhaustive()
    }
}

impl MetadataExtractor {
    /// Creates an extractor backed by the shared HTTP fetch policy.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ClientConstruction`] when the HTTP client
    /// cannot be built.
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self::with_fetcher(Box::new(HttpPageFetcher::new()?)))
    }

    /// Creates an extractor with an injected fetch capability.
    ///
    /// Used by tests and by callers that carry their own client policy.
    #[must_use]
    pub fn with_fetcher(fetcher: Box<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Extracts metadata for `url`, always returning a usable record.
    ///
    /// Every failure (invalid syntax, transport error, timeout, non-2xx
    /// status, unreadable body) is logged with the offending URL and mapped
    /// to [`MetadataRecord::fallback`]. This method is the single fallback
    /// boundary for the whole pipeline.
    #[tracing::instrument(skip_all)]
    pub async fn extract(&self, url: impl AsRef<str> + Send) -> MetadataRecord {
        let url = url.as_ref();
        match self.try_extract(url).await {
            Ok(record) => record,
            Err(error) => {
                warn!(url = %url, error = %error, "extraction failed; returning fallback record");
                MetadataRecord::fallback(url)
            }
        }
    }

    /// Enriches a batch of URLs concurrently, preserving input order.
    ///
    /// Inherits the per-call never-fail contract: the output always has one
    /// record per input URL.
    #[tracing::instrument(skip_all, fields(count = urls.len()))]
    pub async fn extract_all(&self, urls: &[String]) -> Vec<MetadataRecord> {
        let tasks = urls.iter().map(|url| self.extract(url.as_str()));
        futures_util::future::join_all(tasks).await
    }

    /// The fallible pipeline: validate, fetch, parse, score.
    async fn try_extract(&self, url: &str) -> Result<MetadataRecord, ExtractError> {
        validate_url(url)?;

        let body = self.fetcher.fetch(url).await?;
        let page = PageContent::from_html(&body);

        let mut topics = if page.keywords.is_empty() {
            topics_from_headings(&page.headings)
        } else {
            page.keywords
        };
        topics.truncate(MAX_TOPICS);

        debug!(
            url = %url,
            title = %page.title,
            topics = topics.len(),
            "page fields extracted"
        );

        Ok(MetadataRecord {
            title: page.title,
            description: page.description,
            estimated_time: estimate_reading_minutes(&page.text),
            topics,
            difficulty: score_difficulty(&page.text),
            url: url.to_string(),
        })
    }
}

/// Convenience function: extracts metadata with a one-shot default extractor.
///
/// Never fails; when even the HTTP client cannot be constructed, the fallback
/// record is returned. For repeated extractions, create a
/// [`MetadataExtractor`] instance instead and reuse its connection pool.
#[tracing::instrument(skip_all)]
pub async fn extract_metadata_from_url(url: impl AsRef<str> + Send) -> MetadataRecord {
    let url = url.as_ref();
    match MetadataExtractor::new() {
        Ok(extractor) => extractor.extract(url).await,
        Err(error) => {
            warn!(url = %url, error = %error, "extractor unavailable; returning fallback record");
            MetadataRecord::fallback(url)
        }
    }
}
