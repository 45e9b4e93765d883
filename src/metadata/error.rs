//! Error types for metadata extraction.
//!
//! Every variant here is absorbed at the extractor boundary and converted to
//! the fallback record. The taxonomy exists for logging and tests, not for
//! propagation to callers.

use thiserror::Error;

/// Errors that can occur while extracting metadata from a URL.
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    /// Input is not a syntactically valid fetchable URL
    #[error("invalid URL '{url}': {reason}\n  Suggestion: {suggestion}")]
    InvalidUrl {
        /// The input that failed validation
        url: String,
        /// Why the URL is invalid
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// HTTP client could not be constructed
    #[error(
        "HTTP client construction failed: {reason}\n  Suggestion: Check TLS and proxy configuration"
    )]
    ClientConstruction {
        /// Builder error text
        reason: String,
    },

    /// Transport-level failure (DNS, refused connection, timeout, TLS)
    #[error(
        "fetch failed for '{url}': {reason}\n  Suggestion: Check that the host is reachable and the URL is current"
    )]
    FetchFailed {
        /// The URL being fetched
        url: String,
        /// Transport error text
        reason: String,
    },

    /// Server answered with a non-success status
    #[error(
        "'{url}' returned HTTP {status}\n  Suggestion: Check that the resource is public and still exists"
    )]
    HttpStatus {
        /// The URL being fetched
        url: String,
        /// Response status code
        status: u16,
    },

    /// Response body could not be decoded as text
    #[error(
        "response body for '{url}' could not be read: {reason}\n  Suggestion: The page may be binary content rather than HTML"
    )]
    BodyRead {
        /// The URL being fetched
        url: String,
        /// Decode error text
        reason: String,
    },
}

impl ExtractError {
    /// Creates an `InvalidUrl` error for a malformed URL.
    #[must_use]
    pub fn malformed(url: &str, parse_error: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: parse_error.to_string(),
            suggestion: "Check the URL format and try again".to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a non-fetchable URL scheme.
    #[must_use]
    pub fn unsupported_scheme(url: &str, scheme: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: format!("scheme '{scheme}' is not supported"),
            suggestion: "Use http:// or https:// URLs".to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a URL without a host.
    #[must_use]
    pub fn no_host(url: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: "URL has no host".to_string(),
            suggestion: "Ensure the URL includes a domain (e.g., example.com)".to_string(),
        }
    }

    /// Creates a `ClientConstruction` error.
    #[must_use]
    pub fn client_construction(reason: &str) -> Self {
        Self::ClientConstruction {
            reason: reason.to_string(),
        }
    }

    /// Creates a `FetchFailed` error for a transport-level failure.
    #[must_use]
    pub fn fetch_failed(url: &str, reason: &str) -> Self {
        Self::FetchFailed {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an `HttpStatus` error for a non-success response.
    #[must_use]
    pub fn http_status(url: &str, status: u16) -> Self {
        Self::HttpStatus {
            url: url.to_string(),
            status,
        }
    }

    /// Creates a `BodyRead` error.
    #[must_use]
    pub fn body_read(url: &str, reason: &str) -> Self {
        Self::BodyRead {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
