use crate::config::types::{Config, CrawlerConfig, FilterConfig, HttpConfig, OutputConfig};
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Longest per-request timeout accepted, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if let Some(seed) = &config.seed {
        validate_seed(seed)?;
    }
    validate_http_config(&config.http)?;
    validate_filter_config(&config.filter)?;
    validate_output_config(&config.output)?;
    validate_crawler_config(&config.crawler)?;
    Ok(())
}

/// Parses and checks a seed URL
///
/// The seed must be an absolute http(s) URL with a host. Its fragment is
/// dropped so it shares the key discovered links are deduplicated under.
pub fn validate_seed(seed: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(seed.trim())
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use http or https, got {}",
            seed,
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    url.set_fragment(None);
    Ok(url)
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the link filter section
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    if config.pattern.is_some() && config.domain.is_some() {
        return Err(ConfigError::Validation(
            "filter.pattern and filter.domain are mutually exclusive".to_string(),
        ));
    }

    if let Some(pattern) = &config.pattern {
        Regex::new(pattern).map_err(|e| {
            ConfigError::InvalidPattern(format!("Invalid link pattern '{}': {}", pattern, e))
        })?;
    }

    if let Some(domain) = &config.domain {
        validate_domain_pattern(domain)?;
    }

    Regex::new(&config.path_pattern).map_err(|e| {
        ConfigError::InvalidPattern(format!(
            "Invalid path pattern '{}': {}",
            config.path_pattern, e
        ))
    })?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.log_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "log-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawl loop configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages == Some(0) {
        return Err(ConfigError::Validation(
            "max-pages must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates a domain pattern (supports a leading `*.` wildcard)
fn validate_domain_pattern(pattern: &str) -> Result<(), ConfigError> {
    let domain = pattern.strip_prefix("*.").unwrap_or(pattern);

    if domain.is_empty() {
        return Err(ConfigError::InvalidPattern(
            "Domain pattern cannot be empty".to_string(),
        ));
    }

    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' contains invalid characters",
            domain
        )));
    }

    if domain.starts_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
        || domain.contains("..")
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' is malformed",
            domain
        )));
    }

    Ok(())
}
