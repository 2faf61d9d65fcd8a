//! Frontier-Crawl main entry point
//!
//! This is the command-line interface for the Frontier-Crawl page crawler.

use clap::Parser;
use frontier_crawl::config::{
    build_filter, load_config_with_hash, validate, validate_seed, Config,
};
use frontier_crawl::crawler::crawl;
use frontier_crawl::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Frontier-Crawl: a breadth-first, single-site page crawler
///
/// Frontier-Crawl starts from one seed URL, visits every reachable page
/// whose URL the link filter accepts, and writes `<url> <title>` for each
/// visited page to a text log.
#[derive(Parser, Debug)]
#[command(name = "frontier-crawl")]
#[command(version)]
#[command(about = "A breadth-first, single-site page crawler", long_about = None)]
struct Cli {
    /// Seed URL (overrides `seed` in the config file)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output log path
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Regex a discovered URL must match to be followed
    #[arg(short, long, value_name = "REGEX")]
    pattern: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Stop after this many fetch attempts
    #[arg(long, value_name = "N")]
    max_pages: Option<u64>,

    /// Append to the output log instead of truncating it
    #[arg(long)]
    append: bool,

    /// Validate settings and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, &cli);
    if let Err(e) = validate(&config) {
        tracing::error!("Invalid settings: {}", e);
        return Err(e.into());
    }

    let seed = match config.seed.as_deref() {
        Some(seed) => validate_seed(seed)?,
        None => {
            tracing::error!("No seed URL given on the command line or in the config file");
            return Err("missing seed URL".into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, &seed)?;
    } else {
        handle_crawl(&config, &seed).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("frontier_crawl=info,warn"),
            1 => EnvFilter::new("frontier_crawl=debug,info"),
            2 => EnvFilter::new("frontier_crawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Command-line values take precedence over the config file
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(seed) = &cli.seed {
        config.seed = Some(seed.clone());
    }
    if let Some(output) = &cli.output {
        config.output.log_path = output.clone();
    }
    if let Some(pattern) = &cli.pattern {
        config.filter.pattern = Some(pattern.clone());
        config.filter.domain = None;
    }
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout;
    }
    if cli.max_pages.is_some() {
        config.crawler.max_pages = cli.max_pages;
    }
    if cli.append {
        config.output.append = true;
    }
}

/// Handles the --dry-run mode: validates settings and shows what would be crawled
fn handle_dry_run(config: &Config, seed: &Url) -> Result<(), Box<dyn std::error::Error>> {
    let filter = build_filter(config, seed)?;

    println!("=== Frontier-Crawl Dry Run ===\n");

    println!("Seed:");
    println!("  {}", seed);

    println!("\nLink Filter:");
    println!("  {}", filter);

    println!("\nHTTP:");
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  User agent: {}", config.http.user_agent);

    println!("\nOutput:");
    println!("  Log: {}", config.output.log_path);
    println!(
        "  Mode: {}",
        if config.output.append {
            "append"
        } else {
            "truncate"
        }
    );

    println!("\nCrawler:");
    match config.crawler.max_pages {
        Some(max_pages) => println!("  Max pages: {}", max_pages),
        None => println!("  Max pages: unlimited"),
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling from {}", seed);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, seed: &Url) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting crawl from {}", seed);

    match crawl(config, seed).await {
        Ok(stats) => {
            tracing::info!("Crawl completed successfully");
            print_statistics(&stats);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
