//! Integration tests for the crawler
//!
//! These tests use wiremock to serve pages to the real HTTP fetcher and drive
//! the crawl engine end-to-end.

use mailtrawl::config::{Config, UserAgentConfig};
use mailtrawl::console::{run_interactive, ConsoleOptions};
use mailtrawl::crawler::{build_http_client, crawl, CrawlEngine, CrawlReport, HttpFetcher};
use mailtrawl::output::generate_markdown_summary;
use mailtrawl::{parse_url, FetchError};
use std::io::Cursor;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a recognisable user agent
fn create_test_config() -> Config {
    Config {
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: Some("https://example.com/contact".to_string()),
            contact_email: Some("test@example.com".to_string()),
        },
        ..Config::default()
    }
}

/// Serves `body` as plain text at `route`
async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn engine() -> CrawlEngine {
    CrawlEngine::from_config(&create_test_config()).expect("Failed to build engine")
}

fn page(base: &str, route: &str) -> Url {
    parse_url(&format!("{}{}", base, route)).expect("Failed to parse test URL")
}

#[tokio::test]
async fn test_seed_records_email() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "contact: a@b.com".to_string()).await;

    let mut engine = engine();
    let report = engine.seed(&page(&base_url, "/")).await.unwrap();

    assert_eq!(report, CrawlReport::new(1, 0));
    assert_eq!(engine.emails_snapshot(), vec!["a@b.com".to_string()]);
    assert_eq!(engine.visited_snapshot(), vec![page(&base_url, "/")]);
    assert!(engine.frontier_snapshot().is_empty());
}

#[tokio::test]
async fn test_step_skips_unreachable_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // /u1 is never mounted, so wiremock answers 404
    mount_page(
        &mock_server,
        "/",
        format!("{base}/u1\n{base}/u2\n", base = base_url),
    )
    .await;
    mount_page(&mock_server, "/u2", "nothing to see".to_string()).await;

    let mut engine = engine();
    let seeded = engine.seed(&page(&base_url, "/")).await.unwrap();
    assert_eq!(seeded, CrawlReport::new(0, 2));

    let report = engine.step().await;

    assert_eq!(report, CrawlReport::new(0, 0));
    assert_eq!(
        engine.visited_snapshot(),
        vec![
            page(&base_url, "/"),
            page(&base_url, "/u1"),
            page(&base_url, "/u2"),
        ]
    );
    assert!(engine.frontier_snapshot().is_empty());
    assert_eq!(engine.fetch_failures(), 1);
}

#[tokio::test]
async fn test_repeated_url_line_enqueued_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!("{base}/next\n{base}/other\n", base = base_url),
    )
    .await;
    mount_page(
        &mock_server,
        "/next",
        "http://a.com/x\nsome filler text\nhttp://a.com/x\n".to_string(),
    )
    .await;

    let mut engine = engine();
    engine.seed(&page(&base_url, "/")).await.unwrap();

    let report = engine.step().await;

    assert_eq!(report, CrawlReport::new(0, 1));
    let frontier = engine.frontier_snapshot();
    let count = frontier
        .iter()
        .filter(|u| u.as_str() == "http://a.com/x")
        .count();
    assert_eq!(count, 1);
    assert_eq!(
        frontier,
        vec![page(&base_url, "/other"), Url::parse("http://a.com/x").unwrap()]
    );
}

#[tokio::test]
async fn test_visited_url_not_requeued() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", format!("{}/loop", base_url)).await;
    mount_page(
        &mock_server,
        "/loop",
        format!("{base}/\n{base}/loop\n", base = base_url),
    )
    .await;

    let mut engine = engine();
    engine.seed(&page(&base_url, "/")).await.unwrap();
    let report = engine.step().await;

    assert_eq!(report, CrawlReport::new(0, 0));
    assert!(engine.is_exhausted());
}

#[tokio::test]
async fn test_email_suppresses_url_on_same_line() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!("write to owner@example.org or see {}/about\n", base_url),
    )
    .await;

    let mut engine = engine();
    let report = engine.seed(&page(&base_url, "/")).await.unwrap();

    assert_eq!(report, CrawlReport::new(1, 0));
    assert_eq!(engine.emails_snapshot(), vec!["owner@example.org".to_string()]);
    assert!(engine.frontier_snapshot().is_empty());
}

#[tokio::test]
async fn test_step_on_empty_frontier_is_noop() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "a@b.com\nc@d.com".to_string()).await;

    let mut engine = engine();
    engine.seed(&page(&base_url, "/")).await.unwrap();

    let before = (
        engine.emails_snapshot(),
        engine.frontier_snapshot(),
        engine.visited_snapshot(),
    );
    let report = engine.step().await;
    let after = (
        engine.emails_snapshot(),
        engine.frontier_snapshot(),
        engine.visited_snapshot(),
    );

    assert_eq!(report, CrawlReport::new(0, 0));
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_seed_http_error_surfaces() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let mut engine = engine();
    let result = engine.seed(&page(&base_url, "/gone")).await;

    match result {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 410),
        other => panic!("expected a status error, got {:?}", other),
    }
    assert!(engine.visited_snapshot().is_empty());
    assert_eq!(engine.pages_crawled(), 0);
}

#[tokio::test]
async fn test_slow_page_times_out() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late@example.com")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(250))
        .build()
        .unwrap();
    let mut engine = CrawlEngine::new(HttpFetcher::with_client(client));

    let result = engine.seed(&page(&base_url, "/slow")).await;

    assert!(matches!(result, Err(FetchError::Timeout { .. })));
    assert!(engine.emails_snapshot().is_empty());
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "user-agent",
            "TestBot/1.0.0 (+https://example.com/contact; test@example.com)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("ua@example.com"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config()).unwrap();
    let mut engine = CrawlEngine::new(HttpFetcher::with_client(client));

    let report = engine.seed(&page(&base_url, "/")).await.unwrap();
    assert_eq!(report, CrawlReport::new(1, 0));
}

#[tokio::test]
async fn test_unattended_crawl_to_completion() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            "<h1>Home</h1>\ninfo@example.com\n{base}/team\n{base}/missing\n",
            base = base_url
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/team",
        format!(
            "alice@example.com\nbob@example.com\ninfo@example.com\n{base}/\n{base}/jobs\n",
            base = base_url
        ),
    )
    .await;
    mount_page(&mock_server, "/jobs", "hiring@example.com".to_string()).await;

    let summary = crawl(&create_test_config(), &page(&base_url, "/"))
        .await
        .expect("Crawl failed");

    assert_eq!(summary.pages_crawled, 3);
    assert_eq!(summary.fetch_failures, 1);
    assert_eq!(
        summary.emails,
        vec![
            "info@example.com",
            "alice@example.com",
            "bob@example.com",
            "hiring@example.com"
        ]
    );
    assert_eq!(
        summary.visited,
        vec![
            page(&base_url, "/"),
            page(&base_url, "/team"),
            page(&base_url, "/missing"),
            page(&base_url, "/jobs"),
        ]
    );
    assert!(summary.pending.is_empty());
    assert!(!summary.is_partial());

    // Write the markdown summary
    let dir = tempfile::tempdir().unwrap();
    let summary_path = dir.path().join("summary.md");
    generate_markdown_summary(&summary, &summary_path).unwrap();

    let markdown = std::fs::read_to_string(&summary_path).unwrap();
    assert!(markdown.contains("hiring@example.com"));
    assert!(markdown.contains(&format!("{}/jobs", base_url)));
}

#[tokio::test]
async fn test_unattended_crawl_page_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!("{base}/a\n{base}/b\n{base}/c\n", base = base_url),
    )
    .await;
    for route in ["/a", "/b", "/c"] {
        mount_page(&mock_server, route, String::new()).await;
    }

    let mut config = create_test_config();
    config.crawler.max_pages = Some(2);

    let summary = crawl(&config, &page(&base_url, "/")).await.unwrap();

    assert_eq!(summary.pages_crawled, 2);
    assert_eq!(summary.pending, vec![page(&base_url, "/b"), page(&base_url, "/c")]);
    assert!(summary.is_partial());
}

#[tokio::test]
async fn test_interactive_session() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!("sales@example.com\n{base}/one\n{base}/two\n", base = base_url),
    )
    .await;
    mount_page(&mock_server, "/one", "support@example.com".to_string()).await;

    let mut engine = engine();
    let mut input = Cursor::new(format!("{}/\ny\nn\n", base_url).into_bytes());
    let mut out = Vec::new();

    run_interactive(
        &mut engine,
        &mut input,
        &mut out,
        None,
        ConsoleOptions {
            clear_screen: false,
        },
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(&format!("Visited {}/one", base_url)));
    assert!(text.contains("There is currently 1 URL left to visit"));
    assert!(text.contains("Emails Found:\n\tsales@example.com\n\tsupport@example.com\n"));
    assert!(text.contains(&format!("URLs Left to Visit:\n\t{}/two\n", base_url)));
}
