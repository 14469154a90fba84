//! smugscout CLI
//!
//! Enumerates public SmugMug profiles and searches their content for a keyword.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use smugscout::{
    error::{AppError, Result},
    models::{Config, ContentType},
    pipeline::{self, RunOptions},
    services::SmugMugClient,
    storage::CsvExporter,
};

/// smugscout - SmugMug profile content search
#[derive(Parser, Debug)]
#[command(
    name = "smugscout",
    version,
    about = "Search public SmugMug profiles for a keyword"
)]
struct Cli {
    /// Search keyword
    #[arg(long)]
    keyword: String,

    /// Content type to search
    #[arg(long = "type", value_enum, default_value_t = ContentType::Images)]
    content_type: ContentType,

    /// Delay between users in seconds (default: 2, doubled between probe characters)
    #[arg(long)]
    delay: Option<u64>,

    /// Export results to CSV
    #[arg(long)]
    export: bool,

    /// Path to TOML config file
    #[arg(short, long, default_value = "smugscout.toml")]
    config: PathBuf,

    /// Directory for the exported CSV
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load the config file if present, then apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if cli.config.exists() {
        log::info!("Loading configuration from {}", cli.config.display());
        Config::load(&cli.config)?
    } else {
        log::debug!("No config at {}, using defaults", cli.config.display());
        Config::default()
    };

    if let Some(delay) = cli.delay {
        config.crawler.delay_secs = delay;
    }
    if let Some(dir) = &cli.output_dir {
        config.export.output_dir = dir.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let keyword = cli.keyword.trim().to_string();
    if keyword.is_empty() {
        return Err(AppError::validation("--keyword must not be empty"));
    }

    let config = load_config(&cli)?;
    let api = SmugMugClient::new(&config)?;
    let exporter = CsvExporter::from_config(&config.export);
    let options = RunOptions {
        keyword,
        content_type: cli.content_type,
        delay: Duration::from_secs(config.crawler.delay_secs),
        export: cli.export,
    };

    // Interrupt drops the crawl future; partial results are never exported.
    tokio::select! {
        result = pipeline::run_crawler(&api, &exporter, &options) => {
            result?;
            log::info!("Done!");
        }
        _ = tokio::signal::ctrl_c() => {
            log::warn!("Interrupted by user.");
        }
    }

    Ok(())
}
