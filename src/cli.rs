//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Default number of URLs enriched concurrently.
pub const DEFAULT_CONCURRENCY: u8 = 8;

/// Fetch metadata and classify learning resources from URLs.
///
/// Enricher takes resource URLs (arguments, a file, or stdin) and emits one
/// JSON object per URL combining the detected resource type with best-effort
/// metadata. Bad or unreachable URLs produce fallback records, never errors.
#[derive(Parser, Debug)]
#[command(name = "enricher")]
#[command(author, version, about)]
pub struct Args {
    /// Resource URLs to enrich
    pub urls: Vec<String>,

    /// Read URLs from a file (one per line; blank lines and # comments skipped)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Classify only (no network): print resource types instead of full records
    #[arg(long)]
    pub classify_only: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Maximum concurrent fetches (1-64)
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY, value_parser = clap::value_parser!(u8).range(1..=64))]
    pub concurrency: u8,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parses URL-list text: one URL per line, blank lines and `#` comments skipped.
#[must_use]
pub fn parse_url_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
