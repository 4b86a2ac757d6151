//! Sumi-Gleaner main entry point
//!
//! This is the command-line interface for the Sumi-Gleaner documentation
//! crawler. It either serves the crawl endpoint or runs a single crawl.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use sumi_gleaner::config::{load_config_with_hash, validate, Config};
use sumi_gleaner::crawler::Crawler;
use sumi_gleaner::output::{
    format_detail, format_markdown_report, format_statistics, format_summary,
    generate_markdown_report, CrawlReport, CrawlStatistics,
};
use sumi_gleaner::url::{parse_seed, strip_fragment};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Sumi-Gleaner: a documentation text gleaner
///
/// Sumi-Gleaner crawls a documentation site from a seed URL, staying on the
/// seed's origin, and extracts the readable text of every page it reaches.
#[derive(Parser, Debug)]
#[command(name = "sumi-gleaner")]
#[command(version)]
#[command(about = "A documentation text gleaner", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the crawl endpoint over HTTP
    Serve {
        /// Address to listen on, overriding the configuration
        #[arg(short, long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Crawl a documentation site and print what was gleaned
    Crawl {
        /// Absolute URL to start from
        url: String,

        /// How to print the results
        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,

        /// Print the full text of the result at this index (0-based)
        #[arg(short, long, value_name = "INDEX")]
        detail: Option<usize>,

        /// Also write a markdown report to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// One card per page with a text preview
    Summary,
    /// The raw result list
    Json,
    /// A markdown report
    Markdown,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = load_configuration(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_address = bind;
                validate(&config).context("Invalid bind address")?;
            }
            sumi_gleaner::server::serve(&config).await?;
        }
        Command::Crawl {
            url,
            format,
            detail,
            output,
        } => {
            let options = CrawlOptions {
                format,
                detail,
                output,
                config_hash,
            };
            handle_crawl(&config, &url, options).await?;
        }
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
            0 => EnvFilter::new("sumi_gleaner=info,warn"),
            1 => EnvFilter::new("sumi_gleaner=debug,info"),
            2 => EnvFilter::new("sumi_gleaner=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file if one was given, else the defaults
fn load_configuration(path: Option<&Path>) -> anyhow::Result<(Config, Option<String>)> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok((Config::default(), None));
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok((config, Some(hash)))
}

struct CrawlOptions {
    format: Format,
    detail: Option<usize>,
    output: Option<PathBuf>,
    config_hash: Option<String>,
}

/// Validates and normalizes the seed given on the command line
fn seed_url(url: &str) -> anyhow::Result<Url> {
    Ok(strip_fragment(parse_seed(Some(url))?))
}

/// Renders the crawl results for stdout
///
/// `--detail` takes precedence over `--format`.
fn render_results(
    report: &CrawlReport<'_>,
    format: Format,
    detail: Option<usize>,
    preview_len: usize,
) -> anyhow::Result<String> {
    let results = report.results;

    if let Some(index) = detail {
        let Some(result) = results.get(index) else {
            bail!(
                "No result at index {} ({} result(s) crawled)",
                index,
                results.len()
            );
        };
        return Ok(format_detail(result));
    }

    let rendered = match format {
        Format::Summary => format!(
            "{}{}",
            format_summary(results, preview_len),
            format_statistics(&CrawlStatistics::from_results(results))
        ),
        Format::Json => format!("{}\n", serde_json::to_string_pretty(results)?),
        Format::Markdown => format_markdown_report(report),
    };
    Ok(rendered)
}

/// Handles the crawl subcommand
async fn handle_crawl(config: &Config, url: &str, options: CrawlOptions) -> anyhow::Result<()> {
    let seed = seed_url(url)?;
    let crawler = Crawler::new(config)?;

    let start_time = Instant::now();
    let results = crawler.crawl(seed.as_str()).await;
    let duration_ms = start_time.elapsed().as_millis() as u64;

    let mut report = CrawlReport::new(seed.as_str(), &results);
    report.config_hash = options.config_hash;
    report.duration_ms = Some(duration_ms);

    let rendered = render_results(
        &report,
        options.format,
        options.detail,
        config.output.preview_length,
    )?;
    print!("{}", rendered);

    if let Some(path) = &options.output {
        generate_markdown_report(&report, path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("Report written to: {}", path.display());
    }

    Ok(())
}
