use anyhow::{Result, bail};
use clap::Parser;
use pixgal::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use pixgal::{GalleryOptions, InteractiveGallery, logging};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pixgal",
    version,
    about = "Browse image search results page by page in the terminal",
    long_about = None
)]
struct Cli {
    /// Search term to run on startup
    query: Option<String>,

    /// API key for the image search service
    #[arg(long, env = "PIXABAY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the image search endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Write logs to this file (default: <cache dir>/pixgal/pixgal.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(api_key) = cli.api_key.filter(|key| !key.trim().is_empty()) else {
        bail!("No API key given. Pass --api-key or set PIXABAY_API_KEY.");
    };

    let options = GalleryOptions {
        initial_query: cli
            .query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty()),
        api_key,
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout_secs),
        log_file: cli.log_file,
    };

    // The terminal belongs to the UI, so logs always go to a file
    let log_path = options.log_path();
    logging::init_tracing(&log_path)?;
    info!(log = %log_path.display(), "starting gallery");

    let mut gallery = InteractiveGallery::new(options)?;
    gallery.run()
}
