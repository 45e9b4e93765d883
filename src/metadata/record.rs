//! Metadata record types returned by the extractor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Description used when a page provides none or extraction fails.
pub const FALLBACK_DESCRIPTION: &str = "No description available";

/// Reading-time estimate in minutes used when extraction fails.
pub const FALLBACK_ESTIMATED_MINUTES: u32 = 30;

/// Content difficulty rating derived from page text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Short words, little or no technical vocabulary
    Beginner,
    /// Middle ground; also the rating assumed when the page cannot be scored
    #[default]
    Intermediate,
    /// Long words and a dense technical vocabulary
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Best-effort metadata for a single resource URL.
///
/// Every field has a documented default, so callers can persist or forward
/// the record without null checks. Constructed fresh per extraction and owned
/// entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Page title, or the input URL when the page could not be read.
    pub title: String,
    /// Meta description (`description`, then `og:description`), or fallback text.
    pub description: String,
    /// Estimated reading time in whole minutes, at least 1.
    pub estimated_time: u32,
    /// Lowercased topic labels, at most five.
    pub topics: Vec<String>,
    /// Heuristic difficulty rating.
    pub difficulty: Difficulty,
    /// The original input URL.
    pub url: String,
}

impl MetadataRecord {
    /// Creates the degraded record returned when extraction cannot complete.
    ///
    /// The URL doubles as the title so downstream lists still show something
    /// recognizable for the resource.
    #[must_use]
    pub fn fallback(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            title: url.clone(),
            description: FALLBACK_DESCRIPTION.to_string(),
            estimated_time: FALLBACK_ESTIMATED_MINUTES,
            topics: Vec::new(),
            difficulty: Difficulty::Intermediate,
            url,
        }
    }
}
