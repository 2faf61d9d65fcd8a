//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use frontier_crawl::config::{Config, CrawlerConfig, FilterConfig, HttpConfig, OutputConfig};
use frontier_crawl::crawler::{crawl, Coordinator, Frontier};
use frontier_crawl::output::MemoryOutput;
use frontier_crawl::url::LinkFilter;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing its log inside `dir`
fn create_test_config(dir: &TempDir, seed: &str) -> Config {
    Config {
        seed: Some(seed.to_string()),
        http: HttpConfig {
            timeout_secs: 2,
            ..HttpConfig::default()
        },
        filter: FilterConfig::default(),
        output: OutputConfig {
            log_path: dir.path().join("pages.txt").to_string_lossy().into_owned(),
            append: false,
        },
        crawler: CrawlerConfig::default(),
    }
}

fn html_page(title: &str, links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">{}</a>"#, href, href))
        .collect();
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, anchors
    )
}

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

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read page log")
        .lines()
        .map(str::to_string)
        .collect()
}

fn log_path(config: &Config) -> &Path {
    Path::new(&config.output.log_path)
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", &["/1.html", "/2.html", "/about", "http://other.test/3.html"]),
    )
    .await;
    mount_page(&mock_server, "/1.html", html_page("One", &["/2.html", "/"])).await;
    mount_page(&mock_server, "/2.html", html_page("Two", &["/1.html"])).await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", base_url);
    let config = create_test_config(&dir, &seed);

    let stats = crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(
        read_lines(log_path(&config)),
        vec![
            format!("{}/ Home", base_url),
            format!("{}/1.html One", base_url),
            format!("{}/2.html Two", base_url),
        ]
    );
    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.pages_recorded, 3);
    assert_eq!(stats.total_errors(), 0);
    assert_eq!(stats.pending_at_exit, 0);
}

#[tokio::test]
async fn test_pattern_filter_end_to_end() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", &["/1.html", "/2.html", "/about.html"]),
    )
    .await;
    mount_page(&mock_server, "/1.html", html_page("One", &[])).await;
    mount_page(&mock_server, "/2.html", html_page("Two", &[])).await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", base_url);
    let mut config = create_test_config(&dir, &seed);
    config.filter.pattern = Some(format!(r"^{}/1\.html$", regex::escape(&base_url)));

    crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(
        read_lines(log_path(&config)),
        vec![
            format!("{}/ Home", base_url),
            format!("{}/1.html One", base_url),
        ]
    );
}

#[tokio::test]
async fn test_http_error_does_not_halt_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_page("Home", &["/1.html", "/2.html"])).await;
    Mock::given(method("GET"))
        .and(path("/1.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/2.html", html_page("Two", &[])).await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", base_url);
    let config = create_test_config(&dir, &seed);

    let stats = crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(
        read_lines(log_path(&config)),
        vec![
            format!("{}/ Home", base_url),
            format!("{}/2.html Two", base_url),
        ]
    );
    assert_eq!(stats.status_errors, 1);
    assert_eq!(stats.pages_fetched, 3);
}

#[tokio::test]
async fn test_cyclic_links_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/1.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("One", &["/2.html"])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2.html"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(html_page("Two", &["/1.html", "/2.html#top"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/1.html", base_url);
    let config = create_test_config(&dir, &seed);

    crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(read_lines(log_path(&config)).len(), 2);
}

#[tokio::test]
async fn test_seed_fragment_shares_dedup_key() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/1.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("One", &["/2.html"])))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/2.html", html_page("Two", &["/1.html"])).await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/1.html#top", base_url);
    let config = create_test_config(&dir, &seed);

    crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(
        read_lines(log_path(&config)),
        vec![
            format!("{}/1.html One", base_url),
            format!("{}/2.html Two", base_url),
        ]
    );
}

#[tokio::test]
async fn test_missing_title_is_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_page("Home", &["/1.html", "/2.html"])).await;
    // No title, and its link must not be followed
    mount_page(
        &mock_server,
        "/1.html",
        r#"<html><body><a href="/3.html">Three</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(&mock_server, "/2.html", html_page("Two", &[])).await;
    Mock::given(method("GET"))
        .and(path("/3.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("Three", &[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", base_url);
    let config = create_test_config(&dir, &seed);

    let stats = crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(
        read_lines(log_path(&config)),
        vec![
            format!("{}/ Home", base_url),
            format!("{}/2.html Two", base_url),
        ]
    );
    assert_eq!(stats.parse_errors, 1);
}

#[tokio::test]
async fn test_slow_page_times_out() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_page("Home", &["/1.html", "/2.html"])).await;
    Mock::given(method("GET"))
        .and(path("/1.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Slow", &[]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/2.html", html_page("Two", &[])).await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", base_url);
    let mut config = create_test_config(&dir, &seed);
    config.http.timeout_secs = 1;

    let stats = crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(
        read_lines(log_path(&config)),
        vec![
            format!("{}/ Home", base_url),
            format!("{}/2.html Two", base_url),
        ]
    );
    assert_eq!(stats.transport_errors, 1);
}

#[tokio::test]
async fn test_each_run_starts_from_scratch() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("Home", &["/1.html"])))
        .expect(3)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/1.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("One", &[])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", base_url);
    let seed_url = Url::parse(&seed).unwrap();
    let mut config = create_test_config(&dir, &seed);

    // Second run truncates the log
    crawl(&config, &seed_url).await.expect("First crawl failed");
    crawl(&config, &seed_url).await.expect("Second crawl failed");
    assert_eq!(read_lines(log_path(&config)).len(), 2);

    // Third run appends
    config.output.append = true;
    crawl(&config, &seed_url).await.expect("Third crawl failed");
    assert_eq!(read_lines(log_path(&config)).len(), 4);
}

#[tokio::test]
async fn test_max_pages_stops_early() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", &["/1.html", "/2.html", "/3.html"]),
    )
    .await;
    mount_page(&mock_server, "/1.html", html_page("One", &[])).await;
    mount_page(&mock_server, "/2.html", html_page("Two", &[])).await;
    mount_page(&mock_server, "/3.html", html_page("Three", &[])).await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", base_url);
    let mut config = create_test_config(&dir, &seed);
    config.crawler.max_pages = Some(2);

    let stats = crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.pending_at_exit, 2);
    assert_eq!(read_lines(log_path(&config)).len(), 2);
}

#[tokio::test]
async fn test_redirect_keeps_dequeued_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/1.html"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/moved/1.html", base_url).as_str()),
        )
        .mount(&mock_server)
        .await;
    // Relative link resolves against the final URL
    mount_page(&mock_server, "/moved/1.html", html_page("Moved", &["2.html"])).await;
    mount_page(&mock_server, "/moved/2.html", html_page("Two", &[])).await;

    let dir = TempDir::new().unwrap();
    let seed = format!("{}/1.html", base_url);
    let mut config = create_test_config(&dir, &seed);
    config.filter.path_pattern = r"(moved/)?\d+\.html".to_string();

    crawl(&config, &Url::parse(&seed).unwrap())
        .await
        .expect("Crawl failed");

    assert_eq!(
        read_lines(log_path(&config)),
        vec![
            format!("{}/1.html Moved", base_url),
            format!("{}/moved/2.html Two", base_url),
        ]
    );
}

#[tokio::test]
async fn test_coordinator_with_custom_predicate() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", &["/keep/a", "/skip/b"]),
    )
    .await;
    mount_page(&mock_server, "/keep/a", html_page("Kept", &[])).await;

    let keep_only = |url: &Url| url.path().starts_with("/keep/");
    let mut coordinator =
        Coordinator::new(&HttpConfig::default(), keep_only, MemoryOutput::new())
            .expect("Failed to create coordinator");
    let mut frontier = Frontier::with_seed(format!("{}/", base_url));

    let stats = coordinator.run(&mut frontier).await.expect("Crawl failed");

    let lines: Vec<String> = coordinator
        .output()
        .records
        .iter()
        .map(|r| r.to_string())
        .collect();
    assert_eq!(
        lines,
        vec![
            format!("{}/ Home", base_url),
            format!("{}/keep/a Kept", base_url),
        ]
    );
    assert_eq!(stats.pages_recorded, 2);
    assert!(!frontier.is_visited(&format!("{}/skip/b", base_url)));
}

#[tokio::test]
async fn test_same_domain_filter_ignores_port() {
    let filter = LinkFilter::same_domain("127.0.0.1", r"\d+\.html").unwrap();
    let mut frontier = Frontier::with_seed("http://127.0.0.1:8080/");
    frontier.next_url().unwrap();

    let links = vec![
        Url::parse("http://127.0.0.1:9090/1.html").unwrap(),
        Url::parse("http://localhost/2.html").unwrap(),
    ];
    let added = frontier_crawl::crawler::enqueue_links(&mut frontier, &filter, &links);

    assert_eq!(added, 1);
    assert!(frontier.is_visited("http://127.0.0.1:9090/1.html"));
}
