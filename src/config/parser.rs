use crate::config::types::Config;
use crate::config::validation::validate;
use crate::url::{extract_domain, LinkFilter};
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;
use url::Url;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a crawl log can be tied to the exact settings used.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Builds the link filter described by the configuration
///
/// Resolution order:
/// 1. `filter.pattern` as a full-URL regex
/// 2. `filter.domain` with `filter.path-pattern`
/// 3. the seed's host with `filter.path-pattern`
pub fn build_filter(config: &Config, seed: &Url) -> Result<LinkFilter, ConfigError> {
    let filter = &config.filter;

    if let Some(pattern) = &filter.pattern {
        return LinkFilter::pattern(pattern).map_err(|e| {
            ConfigError::InvalidPattern(format!("Invalid link pattern '{}': {}", pattern, e))
        });
    }

    let domain = match &filter.domain {
        Some(domain) => domain.clone(),
        None => extract_domain(seed).ok_or_else(|| {
            ConfigError::InvalidUrl(format!("Seed URL '{}' has no host", seed))
        })?,
    };

    LinkFilter::same_domain(&domain, &filter.path_pattern).map_err(|e| {
        ConfigError::InvalidPattern(format!(
            "Invalid path pattern '{}': {}",
            filter.path_pattern, e
        ))
    })
}
