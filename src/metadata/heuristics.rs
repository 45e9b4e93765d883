//! Pure scoring heuristics: reading time, difficulty, and fallback topics.
//!
//! Every function here operates on plain text and performs no I/O, so an
//! individual scorer can be swapped without touching the fetch/parse
//! pipeline.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::record::Difficulty;

/// Average adult reading speed, words per minute.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Upper bound on topics attached to a record.
pub const MAX_TOPICS: usize = 5;

/// Fixed ML/AI vocabulary used as a proxy for content difficulty.
/// Each term counts at most once no matter how often it appears.
const TECHNICAL_TERMS: [&str; 17] = [
    "algorithm",
    "neural network",
    "machine learning",
    "deep learning",
    "backpropagation",
    "gradient descent",
    "tensorflow",
    "pytorch",
    "regression",
    "classification",
    "clustering",
    "optimization",
    "hyperparameter",
    "convolutional",
    "transformer",
    "reinforcement learning",
    "overfitting",
];

#[allow(clippy::expect_used)]
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word regex is valid")); // Static pattern, safe to panic

#[allow(clippy::expect_used)]
static TOKEN_SPLIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s\-_]+").expect("token split regex is valid")); // Static pattern, safe to panic

/// Counts word-like tokens in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Estimates reading time in whole minutes at 200 words per minute.
///
/// Rounded to the nearest minute with a floor of one, so even a stub page
/// reports a usable estimate.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_reading_minutes(text: &str) -> u32 {
    let minutes = (word_count(text) as f64 / WORDS_PER_MINUTE).round();
    minutes.max(1.0) as u32
}

/// Scores content difficulty from average word length and technical vocabulary.
///
/// Decision table, evaluated in order, first match wins:
/// average word length > 6 and more than 10 technical terms is advanced;
/// average > 5 and more than 5 terms is intermediate; everything else is
/// beginner.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score_difficulty(text: &str) -> Difficulty {
    let mut words = 0usize;
    let mut chars = 0usize;
    for token in WORD_PATTERN.find_iter(text) {
        words += 1;
        chars += token.as_str().chars().count();
    }
    let avg_word_length = chars as f64 / words.max(1) as f64;

    let lowered = text.to_lowercase();
    let technical_terms = TECHNICAL_TERMS
        .iter()
        .filter(|term| lowered.contains(*term))
        .count();

    if avg_word_length > 6.0 && technical_terms > 10 {
        Difficulty::Advanced
    } else if avg_word_length > 5.0 && technical_terms > 5 {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    }
}

/// Derives fallback topics from heading text when a page has no keywords.
///
/// Headings are lowercased and split on comma/whitespace/hyphen/underscore
/// runs; tokens longer than three characters that are not purely numeric are
/// kept, deduplicated in first-seen order, and capped at [`MAX_TOPICS`].
#[must_use]
pub fn topics_from_headings(headings: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut topics = Vec::new();

    for heading in headings {
        let lowered = heading.to_lowercase();
        for token in TOKEN_SPLIT_PATTERN.split(&lowered) {
            if token.chars().count() <= 3 || token.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if seen.insert(token.to_string()) {
                topics.push(token.to_string());
            }
            if topics.len() == MAX_TOPICS {
                return topics;
            }
        }
    }

    topics
}
