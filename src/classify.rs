//! Resource-type classification from URL patterns.
//!
//! Labels a URL as `video`, `course`, `book`, or `article` by matching it
//! against ordered platform pattern groups. No network access, no state;
//! every input maps to a label. Evaluation order is video, then course, then
//! book, then the article default, and the order is load-bearing: a lecture
//! URL on a course platform must classify as video.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Coarse classification of a learning resource's medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Default for anything unmatched (blog posts, docs, papers)
    #[default]
    Article,
    /// Hosted video or a lecture page on a course platform
    Video,
    /// A course landing or enrollment page
    Course,
    /// A book listing or online-library page
    Book,
}

impl ResourceType {
    /// Stable lowercase label used in serialized records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Course => "course",
            Self::Book => "book",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiles a regex at static init; panics on invalid pattern.
fn compile_static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid static regex '{pattern}': {e}"))
}

static VIDEO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_static_regex(
        r"(?i)youtube\.com|youtu\.be|vimeo\.com|dailymotion\.com|twitch\.tv|ted\.com/talks|coursera\.org/lecture|udemy\.com/\S*lecture",
    )
});

static COURSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_static_regex(
        r"(?i)coursera\.org/learn|udemy\.com/course|edx\.org/course|pluralsight\.com/courses|linkedin\.com/learning|skillshare\.com",
    )
});

static BOOK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_static_regex(
        r"(?i)amazon\.[a-z.]+/\S*(?:dp|gp/product)/|goodreads\.com|books\.google|oreilly\.com/library|packtpub\.com|manning\.com",
    )
});

/// Ordered pattern groups; the first matching group wins.
static PATTERN_GROUPS: [(ResourceType, &LazyLock<Regex>); 3] = [
    (ResourceType::Video, &VIDEO_PATTERN),
    (ResourceType::Course, &COURSE_PATTERN),
    (ResourceType::Book, &BOOK_PATTERN),
];

/// Classifies a URL into a resource type.
///
/// Pure pattern matching on the raw URL string; no fetch is performed and
/// unmatched URLs default to [`ResourceType::Article`].
#[must_use]
pub fn detect_resource_type(url: &str) -> ResourceType {
    for (kind, pattern) in &PATTERN_GROUPS {
        if pattern.is_match(url) {
            return *kind;
        }
    }
    ResourceType::Article
}
