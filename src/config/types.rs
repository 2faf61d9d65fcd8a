use serde::Deserialize;

/// Default per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Default path shape for same-domain filtering: numeric article pages
pub const DEFAULT_PATH_PATTERN: &str = r"\d+\.html";

/// Default output log path
pub const DEFAULT_LOG_PATH: &str = "crawl_pages.txt";

/// Main configuration structure for Frontier-Crawl
///
/// Every section is optional so the crawler can run from the command line
/// alone; missing values fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Seed URL; the command line may override it
    #[serde(default)]
    pub seed: Option<String>,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub crawler: CrawlerConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Link filter configuration
///
/// Either `pattern` (a regex over the whole URL) or `domain` plus
/// `path-pattern`. With neither set the seed's host is used as the domain.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Regex matched against the full absolute URL
    #[serde(default)]
    pub pattern: Option<String>,

    /// Domain pattern (e.g., "example.com" or "*.example.com")
    #[serde(default)]
    pub domain: Option<String>,

    /// Regex matched against the URL path (without the leading slash)
    #[serde(rename = "path-pattern", default = "default_path_pattern")]
    pub path_pattern: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            domain: None,
            path_pattern: default_path_pattern(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the page log
    #[serde(rename = "log-path", default = "default_log_path")]
    pub log_path: String,

    /// Keep existing log content instead of truncating at start
    #[serde(default)]
    pub append: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            append: false,
        }
    }
}

/// Crawl loop configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of fetch attempts; unbounded when absent
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<u64>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("frontier-crawl/{}", env!("CARGO_PKG_VERSION"))
}

fn default_path_pattern() -> String {
    DEFAULT_PATH_PATTERN.to_string()
}

fn default_log_path() -> String {
    DEFAULT_LOG_PATH.to_string()
}
