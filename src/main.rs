use clap::Parser;
use folio::core::config::{self, CliOverrides, FolioConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Single-page portfolio in the terminal")]
struct Args {
    /// Milliseconds the loading placeholder stays up after mount
    #[arg(long)]
    loading_delay_ms: Option<u64>,

    /// Scroll offset past which the scroll-to-top button appears
    #[arg(long)]
    scroll_top_threshold: Option<u32>,

    /// Where to write the log
    #[arg(long, default_value = "folio.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        FolioConfig::default()
    });
    let cli = CliOverrides {
        loading_delay_ms: args.loading_delay_ms,
        scroll_top_threshold: args.scroll_top_threshold,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!("Folio starting up: {:?}", resolved);

    folio::tui::run(resolved)
}
