//! CLI entry point for the enricher tool.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::Parser;
use enricher_core::{MetadataExtractor, MetadataRecord, ResourceType, detect_resource_type};
use serde::Serialize;
use tracing::{debug, info, warn};

mod cli;

use cli::{Args, parse_url_lines};

/// One output line: the detected resource type plus the metadata record.
#[derive(Debug, Serialize)]
struct EnrichedResource {
    resource_type: ResourceType,
    #[serde(flatten)]
    metadata: MetadataRecord,
}

/// One output line in `--classify-only` mode.
#[derive(Debug, Serialize)]
struct ClassifiedUrl<'a> {
    url: &'a str,
    resource_type: ResourceType,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr; stdout carries only the JSON output stream
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let urls = gather_urls(&args)?;
    if urls.is_empty() {
        info!("No input provided. Pass URLs as arguments, via --input, or on stdin.");
        info!("Example: enricher https://www.coursera.org/learn/machine-learning");
        return Ok(());
    }

    info!(urls = urls.len(), "Input gathered");

    if args.classify_only {
        for url in &urls {
            let line = ClassifiedUrl {
                url,
                resource_type: detect_resource_type(url),
            };
            print_json(&line, args.pretty)?;
        }
        return Ok(());
    }

    let records = extract_records(&urls, args.concurrency).await;

    for record in records {
        let line = EnrichedResource {
            resource_type: detect_resource_type(&record.url),
            metadata: record,
        };
        print_json(&line, args.pretty)?;
    }

    info!(enriched = urls.len(), "Enrichment complete");

    Ok(())
}

/// Collects URLs from positional args, then `--input` file, then piped stdin.
fn gather_urls(args: &Args) -> Result<Vec<String>> {
    let mut urls = args.urls.clone();

    if let Some(path) = &args.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read URL file '{}'", path.display()))?;
        urls.extend(parse_url_lines(&content));
    }

    if urls.is_empty() && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        urls.extend(parse_url_lines(&buffer));
    }

    Ok(urls)
}

/// Enriches `urls` in chunks of `concurrency`, emitting fallback records when
/// even the HTTP client cannot be constructed.
async fn extract_records(urls: &[String], concurrency: u8) -> Vec<MetadataRecord> {
    match MetadataExtractor::new() {
        Ok(extractor) => {
            let mut records = Vec::with_capacity(urls.len());
            for chunk in urls.chunks(usize::from(concurrency)) {
                records.extend(extractor.extract_all(chunk).await);
            }
            records
        }
        Err(error) => {
            warn!(error = %error, "HTTP client unavailable; emitting fallback records");
            urls.iter()
                .map(|url| MetadataRecord::fallback(url.as_str()))
                .collect()
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let line = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{line}");
    Ok(())
}
