//! Integration tests for the metadata extractor.
//!
//! Exercises the full extraction flow through the public API against a local
//! mock HTTP server.

use std::collections::HashSet;
use std::net::TcpListener;
use std::time::Duration;

use enricher_core::metadata::{
    Difficulty, FALLBACK_ESTIMATED_MINUTES, HttpPageFetcher, MetadataExtractor, MetadataRecord,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn extractor() -> MetadataExtractor {
    MetadataExtractor::new().unwrap()
}

const ARTICLE_PAGE: &str = r#"<html>
    <head>
        <title>Test Title</title>
        <meta name="description" content="Test Description">
        <meta name="keywords" content="python, machine learning, ai">
    </head>
    <body>
        <h1>Introduction</h1>
        <p>A short article body about learning.</p>
    </body>
</html>"#;

#[tokio::test]
async fn test_extract_reads_fields_from_live_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_PAGE))
        .expect(1) // exactly one outbound request per invocation
        .mount(&server)
        .await;

    let url = format!("{}/article", server.uri());
    let record = extractor().extract(&url).await;

    assert_eq!(record.title, "Test Title");
    assert_eq!(record.description, "Test Description");
    assert_eq!(record.url, url);
    assert!(record.estimated_time >= 1);

    let topics: HashSet<&str> = record.topics.iter().map(String::as_str).collect();
    let expected: HashSet<&str> = ["python", "machine", "learning", "ai"].into();
    assert_eq!(topics, expected);
}

#[tokio::test]
async fn test_extract_reading_time_from_word_count() {
    // 400 word tokens at 200 wpm is exactly two minutes
    let body = format!("<html><body>{}</body></html>", "word ".repeat(400));
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/long"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let record = extractor().extract(format!("{}/long", server.uri())).await;
    assert_eq!(record.estimated_time, 2);
}

#[tokio::test]
async fn test_extract_short_page_floors_reading_time_at_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stub"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>tiny page</body></html>"),
        )
        .mount(&server)
        .await;

    let record = extractor().extract(format!("{}/stub", server.uri())).await;
    assert_eq!(record.estimated_time, 1);
}

#[tokio::test]
async fn test_extract_heading_topics_when_keywords_absent() {
    let body = r"<html><body>
        <h1>Spaced Repetition Basics</h1>
        <h2>Review Scheduling</h2>
    </body></html>";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/guide"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let record = extractor().extract(format!("{}/guide", server.uri())).await;
    let topics: HashSet<&str> = record.topics.iter().map(String::as_str).collect();
    let expected: HashSet<&str> =
        ["spaced", "repetition", "basics", "review", "scheduling"].into();
    assert_eq!(topics, expected);
}

#[tokio::test]
async fn test_extract_plain_prose_scores_beginner() {
    let body = "<html><body><p>The cat sat on the mat and had a long nap in the warm sun.</p></body></html>";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/easy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let record = extractor().extract(format!("{}/easy", server.uri())).await;
    assert_eq!(record.difficulty, Difficulty::Beginner);
}

#[tokio::test]
async fn test_extract_non_success_status_returns_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/gone", server.uri());
    let record = extractor().extract(&url).await;
    assert_eq!(record, MetadataRecord::fallback(&url));
    assert_eq!(record.title, url);
    assert_eq!(record.estimated_time, FALLBACK_ESTIMATED_MINUTES);
}

#[tokio::test]
async fn test_extract_unreachable_host_returns_fallback() {
    // Bind then drop a listener so the port is known to refuse connections
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let url = format!("http://127.0.0.1:{port}/page");
    let record = extractor().extract(&url).await;
    assert_eq!(record, MetadataRecord::fallback(&url));
}

#[tokio::test]
async fn test_extract_slow_server_times_out_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ARTICLE_PAGE)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    // Shrink the timeout so the test does not wait out the full default bound
    let fetcher = HttpPageFetcher::with_timeout(Duration::from_millis(200)).unwrap();
    let extractor = MetadataExtractor::with_fetcher(Box::new(fetcher));

    let url = format!("{}/slow", server.uri());
    let record = extractor.extract(&url).await;
    assert_eq!(record, MetadataRecord::fallback(&url));
}

#[tokio::test]
async fn test_extract_malformed_url_returns_fallback_without_network() {
    let record = extractor().extract("www.example.com/missing-scheme").await;
    assert_eq!(
        record,
        MetadataRecord::fallback("www.example.com/missing-scheme")
    );
}

#[tokio::test]
async fn test_extract_repeated_calls_produce_identical_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_PAGE))
        .mount(&server)
        .await;

    let url = format!("{}/article", server.uri());
    let extractor = extractor();
    let first = extractor.extract(&url).await;
    let second = extractor.extract(&url).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_extract_all_mixed_batch_preserves_order_and_never_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let urls = vec![
        format!("{}/ok", server.uri()),
        format!("{}/gone", server.uri()),
        "definitely not a url".to_string(),
    ];
    let records = extractor().extract_all(&urls).await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Test Title");
    assert_eq!(records[1], MetadataRecord::fallback(&urls[1]));
    assert_eq!(records[2], MetadataRecord::fallback(&urls[2]));
}
